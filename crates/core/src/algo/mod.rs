//! Small deterministic routines behind the Skills Lab and Algorithms pages.

mod pascal;
mod sort_animation;
mod times_table;

pub use pascal::pascal_triangle;
pub use sort_animation::{SortAnimation, SortFrame};
pub use times_table::multiplication_table;

/// Largest row count or table size offered by the Algorithms page.
pub const MAX_TABLE_SIZE: u32 = 12;
