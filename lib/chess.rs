mod bitboard;
mod board;
mod color;
mod directed;
mod game;
mod r#move;
mod movement;
mod perft;
mod perspective;
mod piece;
mod position;
mod promotion;
mod rank;
mod role;
mod row;

/// Check detection and move legality.
pub mod arbiter;

pub use arbiter::State;
pub use bitboard::*;
pub use board::*;
pub use color::*;
pub use directed::*;
pub use game::*;
pub use movement::*;
pub use perspective::*;
pub use piece::*;
pub use position::*;
pub use promotion::*;
pub use r#move::*;
pub use rank::*;
pub use role::*;
pub use row::*;
