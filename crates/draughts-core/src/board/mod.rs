//! 盤面表現モジュール
//!
//! - [`Board`]: 8×8 の論理盤面（各升は `Option<Piece>`）
//! - [`Census`]: 双方の通常駒・キングの枚数
//!
//! 枚数は取り・成りのたびに `Census` 側で同時更新し、ホットパスでは
//! 盤面を走査し直さない。`Census::recount` は検証とテストのためにある。
//! 盤面と枚数の整合は `move_piece` / `try_promote` と
//! `movegen::chain::apply_capture` を通じて更新することを前提とする。

mod census;

pub use census::Census;

use crate::types::{Color, Piece, PieceKind, Square};

/// 8×8 の論理盤面
///
/// 駒は列+行が奇数の升にのみ置かれる。行0が黒側の陣地（表示上の段8）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Piece>; Square::NUM],
}

impl Board {
    /// 空の盤面
    pub const fn empty() -> Board {
        Board {
            cells: [None; Square::NUM],
        }
    }

    /// 初期配置（双方12枚。黒が上側3段、白が下側3段）
    pub fn initial() -> Board {
        let mut board = Board::empty();
        for sq in Board::playable_squares() {
            if sq.row() < 3 {
                board.set(sq, Some(Piece::man(Color::Black)));
            } else if sq.row() >= 5 {
                board.set(sq, Some(Piece::man(Color::White)));
            }
        }
        board
    }

    /// 升の内容
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.index()]
    }

    /// 升の内容を書き換える
    #[inline]
    pub fn set(&mut self, sq: Square, piece: Option<Piece>) {
        self.cells[sq.index()] = piece;
    }

    /// 駒が乗れる升を行優先で列挙する（行の偶奇で開始列を切り替える走査）
    pub fn playable_squares() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| {
            let start = if row % 2 == 0 { 1 } else { 0 };
            (start..8u8).step_by(2).filter_map(move |col| Square::new(col, row))
        })
    }

    /// side の駒がある升を行優先で列挙する
    pub fn squares_of(&self, side: Color) -> impl Iterator<Item = Square> + '_ {
        Board::playable_squares()
            .filter(move |&sq| matches!(self.piece_at(sq), Some(p) if p.color == side))
    }

    /// from の駒を to へ動かす（種別・色は維持、from は空きになる）
    #[inline]
    pub fn move_piece(&mut self, from: Square, to: Square) {
        self.cells[to.index()] = self.cells[from.index()];
        self.cells[from.index()] = None;
    }

    /// 着地升の成り判定
    ///
    /// sq の通常駒が自色の成り行に達していればキングへ変換し、census の
    /// 枚数を通常駒からキングへ付け替える。キングと空き升には何もしない
    /// ため、同じ着地に対して二重に呼んでも枚数は壊れない。
    pub fn try_promote(&mut self, sq: Square, census: &mut Census) -> bool {
        match self.piece_at(sq) {
            Some(p) if p.kind == PieceKind::Man && sq.row() == p.color.promotion_row() => {
                self.set(sq, Some(Piece::king(p.color)));
                census.promote(p.color);
                true
            }
            _ => false,
        }
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::initial()
    }
}
