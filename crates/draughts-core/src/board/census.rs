//! 枚数集計（Census）

use super::Board;
use crate::types::{Color, Piece, PieceKind};
use serde::{Deserialize, Serialize};

/// 双方の通常駒・キングの枚数
///
/// 盤面の生き駒の数え上げと常に一致していることが不変条件。取り・成りの
/// 発生と同時に更新され、探索の分岐には値コピーとして渡されるので、
/// 分岐を捨てれば元の値がそのまま残る。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Census {
    men: [u8; Color::NUM],
    kings: [u8; Color::NUM],
}

impl Census {
    /// 初期配置の枚数（双方12枚、キングなし）
    pub const fn initial() -> Census {
        Census {
            men: [12, 12],
            kings: [0, 0],
        }
    }

    /// 通常駒の枚数
    #[inline]
    pub const fn men(self, color: Color) -> u8 {
        self.men[color.index()]
    }

    /// キングの枚数
    #[inline]
    pub const fn kings(self, color: Color) -> u8 {
        self.kings[color.index()]
    }

    /// 合計枚数
    #[inline]
    pub const fn total(self, color: Color) -> u8 {
        self.men[color.index()] + self.kings[color.index()]
    }

    /// 取られた駒の分を減算する
    #[inline]
    pub fn remove(&mut self, piece: Piece) {
        match piece.kind {
            PieceKind::Man => self.men[piece.color.index()] -= 1,
            PieceKind::King => self.kings[piece.color.index()] -= 1,
        }
    }

    /// 成り（通常駒→キング）の付け替え
    #[inline]
    pub fn promote(&mut self, color: Color) {
        self.men[color.index()] -= 1;
        self.kings[color.index()] += 1;
    }

    /// 盤面から数え直す
    ///
    /// ホットパスでは使わない。テストと不変条件の検証のためにある。
    pub fn recount(board: &Board) -> Census {
        let mut census = Census {
            men: [0; Color::NUM],
            kings: [0; Color::NUM],
        };
        for sq in Board::playable_squares() {
            if let Some(p) = board.piece_at(sq) {
                match p.kind {
                    PieceKind::Man => census.men[p.color.index()] += 1,
                    PieceKind::King => census.kings[p.color.index()] += 1,
                }
            }
        }
        census
    }
}

impl Default for Census {
    fn default() -> Census {
        Census::initial()
    }
}
