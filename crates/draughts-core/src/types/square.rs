//! 升（Square）
//!
//! 論理座標は列0〜7・行0〜7で、行0が表示上の最上段（段8）に対応する。
//! 代数表記は列文字A〜H＋段数字1〜8で、段nは行 8-n に写る（全単射）。
//! 駒が乗れるのは列+行が奇数の升のみ。

use serde::{Deserialize, Serialize};
use std::fmt;

/// 升（0〜63のインデックス。行優先で row*8+col）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Square(u8);

impl Square {
    /// 升の数
    pub const NUM: usize = 64;

    /// 中央マス（代数表記E5）。評価関数が加点の対象にする
    pub const CENTER: Square = Square(3 * 8 + 4);

    /// 列・行から生成。盤外なら None
    #[inline]
    pub const fn new(col: u8, row: u8) -> Option<Square> {
        if col < 8 && row < 8 {
            Some(Square(row * 8 + col))
        } else {
            None
        }
    }

    /// インデックスから生成
    #[inline]
    pub const fn from_index(i: u8) -> Option<Square> {
        if i < 64 { Some(Square(i)) } else { None }
    }

    /// 列（0〜7）
    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % 8
    }

    /// 行（0〜7。0が最上段）
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / 8
    }

    /// インデックスとして使用（配列アクセス用）
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// 駒が乗れる升かどうか（列+行が奇数）
    #[inline]
    pub const fn is_playable(self) -> bool {
        (self.col() + self.row()) % 2 == 1
    }

    /// 対角方向へのオフセット。盤外に出る場合は None
    #[inline]
    pub const fn offset(self, dc: i8, dr: i8) -> Option<Square> {
        let col = self.col() as i8 + dc;
        let row = self.row() as i8 + dr;
        if col < 0 || col >= 8 || row < 0 || row >= 8 {
            None
        } else {
            Square::new(col as u8, row as u8)
        }
    }

    /// 代数表記（"A1"〜"H8"）から変換。列文字は小文字も受け付ける
    pub fn from_notation(s: &str) -> Option<Square> {
        let mut chars = s.chars();
        let file = chars.next()?;
        let rank = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        // 非ASCII文字は `as u8` で切り詰められて別の文字に化けるため先に弾く
        if !file.is_ascii_alphabetic() || !rank.is_ascii_digit() {
            return None;
        }
        let col = (file.to_ascii_uppercase() as u8).wrapping_sub(b'A');
        let digit = (rank as u8).wrapping_sub(b'0');
        if col >= 8 || digit < 1 || digit > 8 {
            return None;
        }
        Square::new(col, 8 - digit)
    }

    /// 代数表記の列文字（'A'〜'H'）
    #[inline]
    pub const fn file_char(self) -> char {
        (b'A' + self.col()) as char
    }

    /// 代数表記の段数字（'1'〜'8'）
    #[inline]
    pub const fn rank_char(self) -> char {
        (b'8' - self.row()) as char
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}
