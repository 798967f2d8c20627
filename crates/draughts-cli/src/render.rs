//! ASCII board rendering
//!
//! Draws the logical board as a bordered 8x8 grid with `*` marking empty
//! playable squares, rank digits on the right and file letters underneath.
//! The board is oriented with the human's pieces at the bottom, so the
//! rows are flipped when the human plays black.

use draughts_core::{Color, Game, Square};

const H_BORDER: &str = "+---+---+---+---+---+---+---+---+";

/// Print the marker legend and the current piece counts
pub fn print_legend(game: &Game) {
    println!();
    println!("0 - black man");
    println!("O - white man");
    println!("W, B - kings");
    println!("Current board state:");
    let census = game.census();
    println!(
        "White: {} ({} kings), Black: {} ({} kings)",
        census.total(Color::White),
        census.kings(Color::White),
        census.total(Color::Black),
        census.kings(Color::Black),
    );
}

/// Print the board grid oriented for `human`
pub fn print_board(game: &Game, human: Color) {
    print_legend(game);
    let flip = human == Color::Black;
    for display_row in 0..8u8 {
        let row = if flip { 7 - display_row } else { display_row };
        println!("{H_BORDER}");
        let mut line = String::new();
        for col in 0..8u8 {
            let ch = match Square::new(col, row) {
                Some(sq) => match game.board().piece_at(sq) {
                    Some(piece) => piece.marker(),
                    None if sq.is_playable() => '*',
                    None => ' ',
                },
                None => ' ',
            };
            line.push_str("| ");
            line.push(ch);
            line.push(' ');
        }
        line.push('|');
        println!("{line} {}", 8 - row);
    }
    println!("{H_BORDER}");
    println!("  A   B   C   D   E   F   G   H");
}

/// Print whose turn it is
pub fn print_turn(game: &Game, human: Color) {
    let mover = if game.side_to_move() == human {
        "player"
    } else {
        "computer"
    };
    println!();
    println!("Current turn: {mover}");
}
