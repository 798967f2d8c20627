//! 連続取りの列挙
//!
//! 取った駒の着地升からさらに取りが続く限り再帰し、それ以上取れない
//! 末端の (盤面, 枚数) を列挙する。各分岐は盤面・枚数を複製してから
//! 進めるので、呼び出し元の状態や兄弟分岐には影響しない。
//! 人間側には選択肢の列挙として、コンピュータ側には探索の土台として使う。

use super::generator::{Capture, capture_moves};
use crate::board::{Board, Census};
use crate::types::{Color, Square};

/// 連続取りの末端局面
///
/// `to` は取りを終えた駒の最終的な升。取りが1つも無い駒に対しては
/// 現在の状態そのものが唯一の末端になる。
#[derive(Debug, Clone)]
pub struct Outcome {
    pub to: Square,
    pub board: Board,
    pub census: Census,
}

/// from の駒から到達できる最大取り手順の末端をすべて集める
///
/// 複数方向に取りが分かれる場合はすべての分岐を列挙する（どれか1つでは
/// ない）。分岐の深さは一度の手順で取れる駒数が上限で、実用上12を
/// 超えない。
pub fn explore_chains(
    board: &Board,
    census: Census,
    side: Color,
    from: Square,
    out: &mut Vec<Outcome>,
) {
    let captures = capture_moves(board, side, from);
    if captures.is_empty() {
        out.push(Outcome {
            to: from,
            board: board.clone(),
            census,
        });
        return;
    }
    for cap in captures {
        let (next_board, next_census) = apply_capture(board, census, from, cap);
        explore_chains(&next_board, next_census, side, cap.to, out);
    }
}

/// 1回分の取りを適用した複製を返す
///
/// 取られた駒の升と元の升を空け、動いた駒（種別は維持）を着地升に置き、
/// 枚数を減算した上で着地升の成り判定まで行う。
pub fn apply_capture(board: &Board, census: Census, from: Square, cap: Capture) -> (Board, Census) {
    let mut next_board = board.clone();
    let mut next_census = census;
    if let Some(victim) = next_board.piece_at(cap.over) {
        next_census.remove(victim);
    }
    next_board.set(cap.over, None);
    next_board.move_piece(from, cap.to);
    next_board.try_promote(cap.to, &mut next_census);
    (next_board, next_census)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Piece;

    fn sq(notation: &str) -> Square {
        Square::from_notation(notation).unwrap()
    }

    fn census_of(board: &Board) -> Census {
        Census::recount(board)
    }

    #[test]
    fn test_no_capture_yields_current_state() {
        let mut board = Board::empty();
        board.set(sq("D4"), Some(Piece::man(Color::White)));
        let census = census_of(&board);
        let mut leaves = Vec::new();
        explore_chains(&board, census, Color::White, sq("D4"), &mut leaves);
        assert_eq!(leaves.len(), 1);
        assert_eq!(leaves[0].to, sq("D4"));
        assert_eq!(leaves[0].board, board);
    }

    #[test]
    fn test_single_capture_leaf() {
        let mut board = Board::empty();
        board.set(sq("D4"), Some(Piece::man(Color::White)));
        board.set(sq("E5"), Some(Piece::man(Color::Black)));
        let census = census_of(&board);
        let mut leaves = Vec::new();
        explore_chains(&board, census, Color::White, sq("D4"), &mut leaves);
        assert_eq!(leaves.len(), 1);
        let leaf = &leaves[0];
        assert_eq!(leaf.to, sq("F6"));
        assert_eq!(leaf.board.piece_at(sq("E5")), None);
        assert_eq!(leaf.board.piece_at(sq("D4")), None);
        assert_eq!(leaf.census.men(Color::Black), census.men(Color::Black) - 1);
        // 不変条件: 枚数は盤面の数え直しと一致する
        assert_eq!(leaf.census, Census::recount(&leaf.board));
    }

    #[test]
    fn test_chain_continues_after_capture() {
        // D4 → F6 と取った先に2枚目の黒（F6 の斜め先）
        let mut board = Board::empty();
        board.set(sq("D4"), Some(Piece::man(Color::White)));
        board.set(sq("E5"), Some(Piece::man(Color::Black)));
        board.set(sq("E7"), Some(Piece::man(Color::Black)));
        let census = census_of(&board);
        let mut leaves = Vec::new();
        explore_chains(&board, census, Color::White, sq("D4"), &mut leaves);
        // 連鎖は途中で止まらず、黒2枚が取り除かれた末端になる
        assert_eq!(leaves.len(), 1);
        let leaf = &leaves[0];
        assert_eq!(leaf.to, sq("D8"));
        assert_eq!(leaf.census.men(Color::Black), 0);
        assert_eq!(leaf.board.piece_at(sq("E5")), None);
        assert_eq!(leaf.board.piece_at(sq("E7")), None);
    }

    #[test]
    fn test_alternative_first_steps_all_enumerated() {
        // 左右どちらにも最初の取りがある場合、末端は分岐ごとに1つずつ
        let mut board = Board::empty();
        board.set(sq("D4"), Some(Piece::man(Color::White)));
        board.set(sq("C5"), Some(Piece::man(Color::Black)));
        board.set(sq("E5"), Some(Piece::man(Color::Black)));
        let census = census_of(&board);
        let mut leaves = Vec::new();
        explore_chains(&board, census, Color::White, sq("D4"), &mut leaves);
        assert_eq!(leaves.len(), 2);
        // どの末端でも敵の枚数は開始時より必ず減る
        for leaf in &leaves {
            assert!(leaf.census.total(Color::Black) < census.total(Color::Black));
            assert_eq!(leaf.census, Census::recount(&leaf.board));
        }
        // 走査順: 左上分岐が先
        assert_eq!(leaves[0].to, sq("B6"));
        assert_eq!(leaves[1].to, sq("F6"));
    }

    #[test]
    fn test_siblings_do_not_share_state() {
        // 片方の分岐で取った駒がもう片方の末端に影響しない
        let mut board = Board::empty();
        board.set(sq("D4"), Some(Piece::man(Color::White)));
        board.set(sq("C5"), Some(Piece::man(Color::Black)));
        board.set(sq("E5"), Some(Piece::man(Color::Black)));
        let census = census_of(&board);
        let mut leaves = Vec::new();
        explore_chains(&board, census, Color::White, sq("D4"), &mut leaves);
        // 左の分岐の末端には右の黒がまだ居る（逆も同様）
        assert_eq!(
            leaves[0].board.piece_at(sq("E5")),
            Some(Piece::man(Color::Black))
        );
        assert_eq!(
            leaves[1].board.piece_at(sq("C5")),
            Some(Piece::man(Color::Black))
        );
    }

    #[test]
    fn test_promotion_applies_on_landing_mid_sequence() {
        // 取りの着地が成り行なら、その場でキングに変わる
        let mut board = Board::empty();
        board.set(sq("C5"), Some(Piece::man(Color::Black)));
        board.set(sq("D4"), Some(Piece::man(Color::White)));
        board.set(sq("D2"), Some(Piece::man(Color::Black)));
        // 黒C5がD4を取ると E3、さらにD2は別駒で連鎖なし
        let census = census_of(&board);
        let mut leaves = Vec::new();
        explore_chains(&board, census, Color::Black, sq("C5"), &mut leaves);
        assert_eq!(leaves.len(), 1);
        assert_eq!(leaves[0].to, sq("E3"));

        // 成りの確認: 黒が行7（段1）に着地する形
        let mut board = Board::empty();
        board.set(sq("C3"), Some(Piece::man(Color::Black)));
        board.set(sq("D2"), Some(Piece::man(Color::White)));
        let census = census_of(&board);
        let mut leaves = Vec::new();
        explore_chains(&board, census, Color::Black, sq("C3"), &mut leaves);
        assert_eq!(leaves.len(), 1);
        let leaf = &leaves[0];
        assert_eq!(leaf.to, sq("E1"));
        assert_eq!(leaf.board.piece_at(sq("E1")), Some(Piece::king(Color::Black)));
        assert_eq!(leaf.census.kings(Color::Black), 1);
        assert_eq!(leaf.census.men(Color::Black), 0);
    }

    #[test]
    fn test_capturing_king_keeps_rank() {
        // キングが取っても通常駒には戻らない
        let mut board = Board::empty();
        board.set(sq("D4"), Some(Piece::king(Color::White)));
        board.set(sq("E5"), Some(Piece::man(Color::Black)));
        let census = census_of(&board);
        let mut leaves = Vec::new();
        explore_chains(&board, census, Color::White, sq("D4"), &mut leaves);
        assert_eq!(leaves.len(), 1);
        assert_eq!(
            leaves[0].board.piece_at(sq("F6")),
            Some(Piece::king(Color::White))
        );
    }
}
