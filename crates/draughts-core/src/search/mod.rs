//! 最善手選択（1手読み）
//!
//! 1手（取りが続く場合は連続取り1系列）だけを読み、末端局面の評価が
//! 最大になる手を選ぶ。枝刈りも置換表もない単純な総当りで、分岐の
//! 深さは一度の手順で取れる駒数（≤12）が上限なので常に完了する。
//!
//! 取り義務: 盤上のどれか1駒にでも取りがあれば、全駒の単純移動を
//! この手番では無視する。同点の比較はすべて「先に見つかった手を保持」
//! （厳密な `>` での置き換え）で、盤面の走査順とあわせて結果は決定的。


use crate::board::{Board, Census};
use crate::eval::evaluate;
use crate::movegen::{apply_capture, capture_moves, step_moves};
use crate::types::{Color, Square};

/// 選択された着手の確定結果
#[derive(Debug, Clone)]
pub struct SelectedMove {
    pub board: Board,
    pub census: Census,
    pub score: i32,
}

/// side のいずれかの駒に取りが存在するか
pub fn capture_is_mandatory(board: &Board, side: Color) -> bool {
    board
        .squares_of(side)
        .any(|sq| !capture_moves(board, side, sq).is_empty())
}

/// side に合法な着手（単純移動または取り）が一つでもあるか
pub fn has_any_move(board: &Board, side: Color) -> bool {
    board.squares_of(side).any(|sq| {
        !capture_moves(board, side, sq).is_empty() || !step_moves(board, sq).is_empty()
    })
}

/// us の最善手を探索して返す。合法手が皆無なら None（手詰まり）
///
/// 盤面を行優先で走査し、駒ごとに取り系列（あれば）または単純移動を
/// 評価して走査中の最善と比較する。最初に見つかった取りは、それまでの
/// 単純移動の最善を無条件に置き換える（取り義務の成立）。
pub fn select_move(board: &Board, census: Census, us: Color) -> Option<SelectedMove> {
    let mut best: Option<SelectedMove> = None;
    let mut has_to_kill = false;

    for sq in board.squares_of(us) {
        let captures = capture_moves(board, us, sq);
        if !captures.is_empty() {
            let line = best_capture_line(board, census, us, sq);
            let replace = match &best {
                None => true,
                Some(cur) => line.score > cur.score || !has_to_kill,
            };
            if replace {
                log::debug!("capture line from {sq} scores {}", line.score);
                best = Some(line);
            }
            has_to_kill = true;
            continue;
        }
        if has_to_kill {
            continue;
        }
        for to in step_moves(board, sq) {
            let mut next_board = board.clone();
            let mut next_census = census;
            next_board.move_piece(sq, to);
            next_board.try_promote(to, &mut next_census);
            let score = evaluate(&next_board, next_census, us);
            let replace = match &best {
                None => true,
                Some(cur) => score > cur.score,
            };
            if replace {
                log::debug!("quiet move {sq}->{to} scores {score}");
                best = Some(SelectedMove {
                    board: next_board,
                    census: next_census,
                    score,
                });
            }
        }
    }

    best
}

/// 1駒の連続取りツリーを総当りし、評価最大の末端を返す
///
/// 呼び出し側は取りが1つ以上あることを確認済みなので、末端は必ず
/// 存在し、最初の末端（評価 ≥ 0 > 初期値 -1）が必ず採用される。
fn best_capture_line(board: &Board, census: Census, us: Color, from: Square) -> SelectedMove {
    let mut best = SelectedMove {
        board: board.clone(),
        census,
        score: -1,
    };
    descend(board, census, us, from, &mut best);
    best
}

/// 連続取りの再帰本体。末端で評価し、厳密に上回るときだけ置き換える
fn descend(board: &Board, census: Census, us: Color, from: Square, best: &mut SelectedMove) {
    let captures = capture_moves(board, us, from);
    if captures.is_empty() {
        let score = evaluate(board, census, us);
        if score > best.score {
            *best = SelectedMove {
                board: board.clone(),
                census,
                score,
            };
        }
        return;
    }
    for cap in captures {
        let (next_board, next_census) = apply_capture(board, census, from, cap);
        descend(&next_board, next_census, us, cap.to, best);
    }
}
