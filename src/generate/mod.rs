pub mod difficulty;
pub use difficulty::*;

pub mod labels;
pub use labels::*;

pub mod matrix;
pub use matrix::*;
