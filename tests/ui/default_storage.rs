use tinker_bits::{StaticBitVector, word_count};

const EMPTY: StaticBitVector<200, { word_count::<usize>(200) }> = StaticBitVector::const_zeros();

fn main() {
    let mut vector = EMPTY;
    vector.init_with_ones();
    assert_eq!(vector.popcount(), 200);
}
