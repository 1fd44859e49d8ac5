use tinker_bits::{StaticBitVector, word_count};

const BIT_COUNT: usize = 45;

static FREE_SLOTS: StaticBitVector<BIT_COUNT, { word_count::<u8>(BIT_COUNT) }, u8> =
    StaticBitVector::const_zeros();

fn main() {
    let mut slots = FREE_SLOTS;
    slots.set_bit(44);
    assert_eq!(slots.find_most_significant_bit_index(), Some(44));
    assert!(FREE_SLOTS.is_empty());
}
