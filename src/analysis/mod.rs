pub mod dominance;
pub use dominance::*;

pub mod ieds;
pub use ieds::*;

pub mod nash;
pub use nash::*;
