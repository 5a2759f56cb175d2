pub mod cell;
pub use cell::*;

pub mod matrix;
pub use matrix::*;

pub mod payoff;
pub use payoff::*;

pub mod player;
pub use player::*;

pub mod strategy;
pub use strategy::*;
