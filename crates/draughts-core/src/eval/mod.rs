//! 局面評価
//!
//! 枚数差に基づく単純な素点評価。通常駒差・キング差それぞれの項は、
//! 差がマイナスのとき 0 に切り上げる（負の寄与を持たないのは仕様で、
//! 劣勢側の局面同士は中央ボーナスでのみ差が付く）。位置の勾配は
//! 中央マス1升の定額加点だけ。

use crate::board::{Board, Census};
use crate::types::{Color, Piece, Square};

/// 通常駒1枚差あたりの点
const MAN_WEIGHT: i32 = 10;
/// キング1枚差あたりの点
const KING_WEIGHT: i32 = 15;
/// 中央マス（[`Square::CENTER`]）を自分の通常駒が占めているときの加点
const CENTER_BONUS: i32 = 8;

/// us 視点の評価値を返す
///
/// 枚数は census から読む（盤面の走査はしない）。盤面は中央マスの
/// 判定にのみ使う。戻り値は常に 0 以上。
pub fn evaluate(board: &Board, census: Census, us: Color) -> i32 {
    let them = us.opponent();
    let mut score = 0;

    let man_diff = (census.men(us) as i32 - census.men(them) as i32) * MAN_WEIGHT;
    score += man_diff.max(0);

    let king_diff = (census.kings(us) as i32 - census.kings(them) as i32) * KING_WEIGHT;
    score += king_diff.max(0);

    if board.piece_at(Square::CENTER) == Some(Piece::man(us)) {
        score += CENTER_BONUS;
    }

    score
}
