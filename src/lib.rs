pub mod board;
pub mod moves;
pub mod pins;
pub mod uci;
