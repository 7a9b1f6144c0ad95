/// First `rows` rows of Pascal's triangle.
#[must_use]
pub fn pascal_triangle(rows: u32) -> Vec<Vec<u64>> {
    let mut triangle: Vec<Vec<u64>> = Vec::with_capacity(rows as usize);
    for _ in 0..rows {
        let row = match triangle.last() {
            None => vec![1],
            Some(prev) => {
                let mut row = Vec::with_capacity(prev.len() + 1);
                row.push(1);
                row.extend(prev.windows(2).map(|pair| pair[0] + pair[1]));
                row.push(1);
                row
            }
        };
        triangle.push(row);
    }
    triangle
}
