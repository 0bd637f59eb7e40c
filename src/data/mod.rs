pub mod table;

pub use table::{PointRow, PointTable};
