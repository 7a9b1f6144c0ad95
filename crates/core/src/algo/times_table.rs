/// `size × size` multiplication table, one-based.
#[must_use]
pub fn multiplication_table(size: u32) -> Vec<Vec<u32>> {
    (1..=size)
        .map(|row| (1..=size).map(|col| row * col).collect())
        .collect()
}
