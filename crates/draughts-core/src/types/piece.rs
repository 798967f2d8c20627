//! 駒（Piece）

use super::Color;
use serde::{Deserialize, Serialize};

/// 駒の種別（通常駒/キング）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum PieceKind {
    Man = 0,
    King = 1,
}

/// 盤上の駒（色＋種別）。空き升は `Option<Piece>` の `None` で表す
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    /// 通常駒を生成
    #[inline]
    pub const fn man(color: Color) -> Piece {
        Piece {
            color,
            kind: PieceKind::Man,
        }
    }

    /// キングを生成
    #[inline]
    pub const fn king(color: Color) -> Piece {
        Piece {
            color,
            kind: PieceKind::King,
        }
    }

    /// キングかどうか
    #[inline]
    pub const fn is_king(self) -> bool {
        matches!(self.kind, PieceKind::King)
    }

    /// 表示用マーカー（白: O/W、黒: 0/B）
    #[inline]
    pub const fn marker(self) -> char {
        match (self.color, self.kind) {
            (Color::White, PieceKind::Man) => 'O',
            (Color::Black, PieceKind::Man) => '0',
            (Color::White, PieceKind::King) => 'W',
            (Color::Black, PieceKind::King) => 'B',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_constructors() {
        let m = Piece::man(Color::White);
        assert_eq!(m.color, Color::White);
        assert!(!m.is_king());
        let k = Piece::king(Color::Black);
        assert!(k.is_king());
    }

    #[test]
    fn test_piece_marker() {
        assert_eq!(Piece::man(Color::White).marker(), 'O');
        assert_eq!(Piece::man(Color::Black).marker(), '0');
        assert_eq!(Piece::king(Color::White).marker(), 'W');
        assert_eq!(Piece::king(Color::Black).marker(), 'B');
    }
}
