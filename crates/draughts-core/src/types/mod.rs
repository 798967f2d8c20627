//! 基本型（手番・升・駒・対角方向）

mod color;
mod direction;
mod piece;
mod square;

pub use color::Color;
pub use direction::Direction;
pub use piece::{Piece, PieceKind};
pub use square::Square;
