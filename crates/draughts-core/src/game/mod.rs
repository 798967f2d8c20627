//! 対局セッション
//!
//! 盤面・枚数・手番をひとまとめにし、フロントエンドが必要とする操作
//! だけを公開する。手番は明示的に保持し（プロセス全体の可変状態は
//! 持たない）、検証で弾かれた操作は状態を一切変更しない。
//!
//! 手詰まり（手番側に合法手が皆無）は手詰まり側の負けとして扱う。

use crate::board::{Board, Census};
use crate::movegen::{capture_moves, explore_chains, step_moves};
use crate::search::{self, select_move};
use crate::types::{Color, Square};
use thiserror::Error;

/// 着手入力に対する検証エラー
///
/// どれも回復可能で、呼び出し側は再入力を促すだけでよい。
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// 指定升に手番側の駒が無い
    #[error("no piece of the side to move on {0}")]
    NotYourPiece(Square),
    /// 取り義務がある局面で、取れない駒を選んだ
    #[error("a capture is mandatory, but the piece on {0} cannot capture")]
    MustCapture(Square),
    /// 選んだ駒に合法手が無い
    #[error("the piece on {0} has no legal move")]
    NoMoves(Square),
    /// 候補の選択番号が範囲外
    #[error("choice {choice} is out of range (1..={max})")]
    InvalidChoice { choice: usize, max: usize },
}

/// 1つの着手候補
///
/// 単純移動なら1歩先、取りなら連続取りを最後まで進めた末端局面を持つ。
/// 確定時はこの盤面・枚数をそのまま採用する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOption {
    /// 駒の最終的な着地升（表示用の代数表記は `to.to_string()`）
    pub to: Square,
    pub board: Board,
    pub census: Census,
    pub is_capture: bool,
}

/// 対局状態
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    census: Census,
    side_to_move: Color,
}

impl Game {
    /// 初期局面から開始する。先手は白
    pub fn new() -> Game {
        Game {
            board: Board::initial(),
            census: Census::initial(),
            side_to_move: Color::White,
        }
    }

    /// 現在の盤面
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// 現在の枚数
    #[inline]
    pub fn census(&self) -> Census {
        self.census
    }

    /// 手番
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// 駒の全滅による勝者。決着していなければ None
    ///
    /// 手詰まりによる決着はここでは判定しない（着手系APIの
    /// `None`/`has_any_move` を通じて手番側の負けとして扱う）。
    pub fn winner(&self) -> Option<Color> {
        if self.census.total(Color::White) == 0 {
            Some(Color::Black)
        } else if self.census.total(Color::Black) == 0 {
            Some(Color::White)
        } else {
            None
        }
    }

    /// side に取り義務があるか
    pub fn is_capture_mandatory_for(&self, side: Color) -> bool {
        search::capture_is_mandatory(&self.board, side)
    }

    /// side に合法な着手が一つでもあるか
    pub fn has_any_move(&self, side: Color) -> bool {
        search::has_any_move(&self.board, side)
    }

    /// from の駒の着手候補を列挙する（人間側の入力用）
    ///
    /// 取りがある駒には連続取りの末端のみが並ぶ。盤上の別の駒に取りが
    /// ある場合、取れない駒の選択は [`MoveError::MustCapture`] で拒否する。
    pub fn enumerate_options(&self, from: Square) -> Result<Vec<MoveOption>, MoveError> {
        let side = self.side_to_move;
        match self.board.piece_at(from) {
            Some(p) if p.color == side => {}
            _ => return Err(MoveError::NotYourPiece(from)),
        }

        let captures = capture_moves(&self.board, side, from);
        if !captures.is_empty() {
            let mut leaves = Vec::new();
            explore_chains(&self.board, self.census, side, from, &mut leaves);
            return Ok(leaves
                .into_iter()
                .map(|leaf| MoveOption {
                    to: leaf.to,
                    board: leaf.board,
                    census: leaf.census,
                    is_capture: true,
                })
                .collect());
        }

        if self.is_capture_mandatory_for(side) {
            return Err(MoveError::MustCapture(from));
        }

        let steps = step_moves(&self.board, from);
        if steps.is_empty() {
            return Err(MoveError::NoMoves(from));
        }
        Ok(steps
            .into_iter()
            .map(|to| {
                let mut board = self.board.clone();
                let mut census = self.census;
                board.move_piece(from, to);
                board.try_promote(to, &mut census);
                MoveOption {
                    to,
                    board,
                    census,
                    is_capture: false,
                }
            })
            .collect())
    }

    /// 列挙済み候補のうち choice 番（1始まり）を確定し、手番を渡す
    ///
    /// 範囲外の番号は [`MoveError::InvalidChoice`] で拒否し、状態は
    /// 変更しない。
    pub fn apply_choice(&mut self, from: Square, choice: usize) -> Result<(), MoveError> {
        let mut options = self.enumerate_options(from)?;
        let max = options.len();
        if choice == 0 || choice > max {
            return Err(MoveError::InvalidChoice { choice, max });
        }
        let option = options.swap_remove(choice - 1);
        log::debug!(
            "{side:?} commits {from}->{to}",
            side = self.side_to_move,
            to = option.to
        );
        self.board = option.board;
        self.census = option.census;
        self.side_to_move = !self.side_to_move;
        Ok(())
    }

    /// 手番側の最善手を探索して確定し、手番を渡す
    ///
    /// 合法手が皆無なら None を返し、状態は変更しない（その手番側の
    /// 負けとして扱うのは呼び出し側）。
    pub fn compute_move(&mut self) -> Option<i32> {
        let selected = select_move(&self.board, self.census, self.side_to_move)?;
        log::debug!(
            "{side:?} plays a searched move scoring {score}",
            side = self.side_to_move,
            score = selected.score
        );
        self.board = selected.board;
        self.census = selected.census;
        self.side_to_move = !self.side_to_move;
        Some(selected.score)
    }
}

impl Default for Game {
    fn default() -> Game {
        Game::new()
    }
}
