use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::Mutex;
use tinker_bits::{ClosedRange, StaticBitVector, word_count};

struct CaptureLogger {
    records: Mutex<Vec<(Level, String)>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.records
            .lock()
            .unwrap()
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    records: Mutex::new(Vec::new()),
};

fn take_records() -> Vec<(Level, String)> {
    std::mem::take(&mut *LOGGER.records.lock().unwrap())
}

// The logger is process-wide, so every check lives in this one test.
#[test]
fn test_log_levels() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Trace);

    let mut vector = StaticBitVector::<12, { word_count::<u8>(12) }, u8>::new();
    vector.init_with_ones();
    let records = take_records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].0, Level::Trace);
    assert!(records[0].1.contains("NUM_BITS = 12"), "{}", records[0].1);

    // bounds inside the vector log nothing
    assert_eq!(
        vector.find_least_significant_bit_index_with_range(ClosedRange::new(2usize, 11)),
        Some(2)
    );
    assert!(take_records().is_empty());

    assert_eq!(
        vector.find_least_significant_bit_index_with_range(ClosedRange::new(5usize, 12)),
        None
    );
    let records = take_records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].0, Level::Error);
    assert_eq!(
        records[0].1,
        "The upper bound 12 of the given range [5, 12] is not valid."
    );

    assert_eq!(
        vector.find_most_significant_bit_index_with_range(ClosedRange::new(12usize, 20)),
        None
    );
    let records = take_records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].0, Level::Error);
    assert_eq!(
        records[0].1,
        "The lower bound 12 of the given range [12, 20] is not valid."
    );
}
