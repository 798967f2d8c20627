//! 単純移動と取りの生成器

use crate::board::Board;
use crate::types::{Color, Direction, Square};
use smallvec::SmallVec;

/// 1方向分の取り。`over` の相手駒を飛び越えて `to` に着地する
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capture {
    pub dir: Direction,
    pub over: Square,
    pub to: Square,
}

/// 単純移動の着地升を列挙する
///
/// 通常駒は前進2方向のみ、キングは4方向すべて。着地先が空き升の場合に
/// 限り、盤端では該当方向が単に生成されない。取りはここでは扱わない。
pub fn step_moves(board: &Board, from: Square) -> SmallVec<[Square; 4]> {
    let mut out = SmallVec::new();
    let Some(piece) = board.piece_at(from) else {
        return out;
    };
    for dir in Direction::ALL {
        if !piece.is_king() && !dir.is_forward(piece.color) {
            continue;
        }
        let Some(to) = from.offset(dir.dc(), dir.dr()) else {
            continue;
        };
        if board.piece_at(to).is_none() {
            out.push(to);
        }
    }
    out
}

/// side の駒の取りを列挙する
///
/// 隣接升に相手の駒（通常駒・キングを問わず）があり、同一線上のさらに
/// 1升先が盤内かつ空きの場合に成立する。取りは駒種によらず4方向すべてで
/// 可能（通常駒も後方への取りができる）。1回の取りで除かれる相手駒は
/// 常に1枚。
pub fn capture_moves(board: &Board, side: Color, from: Square) -> SmallVec<[Capture; 4]> {
    let mut out = SmallVec::new();
    if board.piece_at(from).is_none() {
        return out;
    }
    let enemy = side.opponent();
    for dir in Direction::ALL {
        let Some(over) = from.offset(dir.dc(), dir.dr()) else {
            continue;
        };
        let Some(to) = from.offset(dir.dc() * 2, dir.dr() * 2) else {
            continue;
        };
        match board.piece_at(over) {
            Some(p) if p.color == enemy => {}
            _ => continue,
        }
        if board.piece_at(to).is_none() {
            out.push(Capture { dir, over, to });
        }
    }
    out
}
