//! ドラフツ（チェッカー）エンジンのコアライブラリ
//!
//! 8×8 盤・取り義務ありの固定ルールで、盤面表現・合法手生成・連続取りの
//! 列挙・1手読みの最善手選択を提供する。コンソール入出力や盤面の描画は
//! `draughts-cli` 側の責務で、本クレートは純粋なルール/探索エンジンのみを持つ。
//!
//! - [`types`]: 手番・升・駒・対角方向の基本型
//! - [`board`]: 論理盤面と枚数集計（`Board` / `Census`）
//! - [`movegen`]: 単純移動・取り・連続取りの生成
//! - [`eval`]: 枚数差に基づく局面評価
//! - [`search`]: 取り義務を織り込んだ最善手選択
//! - [`game`]: フロントエンド向けの対局セッション

pub mod board;
pub mod eval;
pub mod game;
pub mod movegen;
pub mod search;
pub mod types;

pub use board::{Board, Census};
pub use game::{Game, MoveError, MoveOption};
pub use types::{Color, Direction, Piece, PieceKind, Square};
