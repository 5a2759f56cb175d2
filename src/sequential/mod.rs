pub mod node;
pub use node::*;

pub mod game;
pub use game::*;
