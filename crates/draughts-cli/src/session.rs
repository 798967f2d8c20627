//! Top-level game loop
//!
//! Drives turn order between the human input loop and the engine search.
//! All recoverable input errors are handled here by re-prompting; the
//! engine state only changes once a fully validated choice is committed.

use crate::{input, render};
use anyhow::Result;
use draughts_core::{Color, Game, MoveError};

/// Play one full game with the human controlling `human`
pub fn run(human: Color) -> Result<()> {
    let mut game = Game::new();
    render::print_board(&game, human);

    loop {
        render::print_turn(&game, human);

        if let Some(winner) = game.winner() {
            announce_material_win(winner);
            break;
        }

        let mover = game.side_to_move();
        if mover == human {
            if !game.has_any_move(human) {
                println!("\nYou have no moves left. The computer wins.");
                break;
            }
            human_turn(&mut game)?;
        } else {
            match game.compute_move() {
                Some(score) => log::debug!("computer committed a move scoring {score}"),
                None => {
                    println!("\nThe computer has no moves left. You win!");
                    break;
                }
            }
        }

        render::print_board(&game, human);
    }

    println!("Game over.");
    Ok(())
}

fn announce_material_win(winner: Color) {
    match winner {
        Color::White => println!("\nWhite wins! Black has no pieces left."),
        Color::Black => println!("\nBlack wins! White has no pieces left."),
    }
}

/// Read a piece and a destination choice until a move is committed
fn human_turn(game: &mut Game) -> Result<()> {
    let mut prompt = "\nYour move. Enter the piece coordinates (e.g. C3): ".to_string();
    loop {
        let from = input::prompt_square(&prompt)?;
        let options = match game.enumerate_options(from) {
            Ok(options) => options,
            Err(MoveError::NotYourPiece(_)) => {
                prompt = "That is not your piece! Try again: ".to_string();
                continue;
            }
            Err(MoveError::MustCapture(_)) => {
                println!("You must capture! Please pick a piece that can take an opponent's piece this turn.");
                prompt = "Enter the piece coordinates: ".to_string();
                continue;
            }
            Err(MoveError::NoMoves(_)) => {
                prompt = "That piece cannot move. Try again: ".to_string();
                continue;
            }
            Err(e @ MoveError::InvalidChoice { .. }) => return Err(e.into()),
        };

        if options.first().is_some_and(|o| o.is_capture) {
            println!("\nCapture sequences end on:");
        } else {
            println!("\nYou can move to:");
        }
        for (i, option) in options.iter().enumerate() {
            println!("{}. {}", i + 1, option.to);
        }

        let choice = input::prompt_choice(options.len())?;
        match game.apply_choice(from, choice) {
            Ok(()) => return Ok(()),
            // The choice was validated against the listed options, so this
            // only triggers if the position changed underneath us.
            Err(e) => {
                log::warn!("apply_choice rejected a listed option: {e}");
                prompt = "Try again: ".to_string();
            }
        }
    }
}
