//! 合法手生成モジュール
//!
//! - 単純移動: 空き升への対角1歩（通常駒は前進のみ、キングは4方向）
//! - 取り: 隣接する相手駒を飛び越える対角2歩（駒種によらず4方向）
//! - 連続取り: 着地升から取りが続く限り再帰し、末端局面を列挙する
//!
//! 生成器はどれも手番を引数で受け取る純関数で、プロセス全体の状態には
//! 一切依存しない。

mod chain;
mod generator;

pub use chain::{Outcome, apply_capture, explore_chains};
pub use generator::{Capture, capture_moves, step_moves};
