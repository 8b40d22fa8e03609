pub mod board;
pub mod error;
pub mod game;
pub mod generate;
pub mod hex;
pub mod moves;
pub mod piece;

pub use error::MoveError;
pub use game::HiveGame;
pub use moves::Move;
pub use piece::{Color, Piece, PieceType};
