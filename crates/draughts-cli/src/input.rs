//! Line-oriented console input helpers
//!
//! All prompts re-ask on invalid input and only return with a validated
//! value. An error is returned solely when stdin is closed, which the
//! caller treats as a request to quit.

use anyhow::{Result, bail};
use draughts_core::{Color, Square};
use std::io::{self, BufRead, Write};

/// Print `prompt` and read one trimmed line from stdin
pub fn read_line(prompt: &str) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    let n = io::stdin().lock().read_line(&mut line)?;
    if n == 0 {
        bail!("stdin closed");
    }
    Ok(line.trim().to_string())
}

/// Ask which color the human plays until the answer is valid
pub fn prompt_color() -> Result<Color> {
    loop {
        println!();
        println!("Choose your color:");
        println!("1. White");
        println!("2. Black");
        let answer = read_line("Your choice: ")?;
        match answer.to_ascii_lowercase().as_str() {
            "white" | "1" => return Ok(Color::White),
            "black" | "2" => return Ok(Color::Black),
            _ => println!("Invalid input. Please enter 'White' or 'Black'."),
        }
    }
}

/// Ask for piece coordinates (e.g. "C3") until the notation parses
pub fn prompt_square(prompt: &str) -> Result<Square> {
    let mut prompt = prompt.to_string();
    loop {
        let answer = read_line(&prompt)?;
        match Square::from_notation(&answer) {
            Some(sq) => return Ok(sq),
            None => {
                log::debug!("rejected notation input: {answer:?}");
                prompt = "Invalid coordinates! Try again: ".to_string();
            }
        }
    }
}

/// Ask for a 1-based menu choice until it is a number within range
pub fn prompt_choice(max: usize) -> Result<usize> {
    loop {
        let answer = read_line("Enter the move number: ")?;
        match answer.parse::<usize>() {
            Ok(n) if (1..=max).contains(&n) => return Ok(n),
            _ => println!("Invalid input"),
        }
    }
}
