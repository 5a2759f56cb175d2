pub mod analysis;
pub mod game;
pub mod generate;
pub mod quiz;
pub mod sequential;

pub type Payout = i32;
