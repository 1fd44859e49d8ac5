use log::{LevelFilter, Log, Metadata, Record};
use tinker_bits::{ClosedRange, LinkedList, StaticBitVector, word_count};

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        eprintln!("[{}] {}", record.level(), record.args());
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

const SLOT_COUNT: usize = 24;

type Slots = StaticBitVector<SLOT_COUNT, { word_count::<u8>(SLOT_COUNT) }, u8>;

/// Takes the lowest free slot inside `zone`, if any.
fn claim(free: &mut Slots, zone: ClosedRange) -> Option<usize> {
    let slot = free.find_least_significant_bit_index_with_range(zone)?;
    free.clear_bit(slot);
    Some(slot)
}

fn main() {
    log::set_logger(&LOGGER).expect("logger already installed");
    log::set_max_level(LevelFilter::Trace);

    let mut free = Slots::ones();
    let low_zone = ClosedRange::new(0usize, 7);
    let high_zone = ClosedRange::with_length(16usize, 8);

    // requests wait in priority order, lowest number first
    let mut pending = LinkedList::<(u8, &str), 8>::new();
    for request in [(2, "logger"), (0, "watchdog"), (1, "radio"), (2, "display")] {
        pending
            .insert_by(request, |new, current| new.0 < current.0)
            .expect("queue has room");
    }
    println!("pending: {pending:?}");

    while let Some((priority, name)) = pending.dequeue() {
        let zone = if priority == 0 { high_zone } else { low_zone };
        match claim(&mut free, zone) {
            Some(slot) => println!("{name} (priority {priority}) -> slot {slot} in {zone}"),
            None => println!("{name} (priority {priority}) -> no slot left in {zone}"),
        }
    }

    println!("free slots: {}", free.popcount());
    println!("{free:?}");
    println!(
        "highest free slot below 16: {:?}",
        free.find_most_significant_bit_index_with_range(ClosedRange::new(0usize, 15))
    );

    // the upper bound is past the last slot, so the query logs an error
    println!(
        "query past the end: {:?}",
        free.find_least_significant_bit_index_with_range(ClosedRange::new(20usize, 30))
    );
}
