// Console front end for the draughts engine

mod input;
mod render;
mod session;

use anyhow::Result;
use clap::Parser;
use draughts_core::Color;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Play as this color instead of being prompted (white moves first)
    #[arg(long, value_parser = parse_color)]
    color: Option<Color>,
}

fn parse_color(s: &str) -> Result<Color, String> {
    match s.to_ascii_lowercase().as_str() {
        "white" => Ok(Color::White),
        "black" => Ok(Color::Black),
        _ => Err(format!("invalid color '{s}', expected 'white' or 'black'")),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    use std::io::Write;
    let log_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .format(|buf, record| {
        writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args())
    })
    .init();

    println!();
    println!("Welcome to draughts!");

    let human = match args.color {
        Some(color) => color,
        None => input::prompt_color()?,
    };
    match human {
        Color::White => println!("\nYou play white (O). You move first."),
        Color::Black => println!("\nYou play black (0). The computer moves first."),
    }
    log::debug!("human side: {human:?}");

    session::run(human)
}
