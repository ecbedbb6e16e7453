//! Interactive text-mode play loop

use std::io::{self, BufRead, Write};

use crate::board::{Board, Direction};

const HELP: &str = "Commands: U/D/L/R to slide the blank, N to reshuffle, H for help, Q to quit.";

/// Run the interactive loop until the puzzle is solved, the player quits,
/// or stdin closes. Illegal moves are reported and ignored.
///
/// # Errors
///
/// Returns error only on stdin/stdout failures.
pub fn run(start: Board, reshuffle_moves: usize) -> crate::Result<()> {
    let mut board = start;
    let stdin = io::stdin();
    println!("{HELP}");

    loop {
        println!("\n{board}");
        if board.is_goal() {
            println!("Solved!");
            return Ok(());
        }

        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // stdin closed
            return Ok(());
        }

        match line.trim().to_uppercase().as_str() {
            "" => {}
            "Q" => {
                println!("Thanks for playing!");
                return Ok(());
            }
            "H" => println!("{HELP}"),
            "N" => {
                board = Board::goal(board.n())?.randomize(reshuffle_moves, rand::random());
                println!("Board reshuffled.");
            }
            other => match other.parse::<Direction>() {
                Ok(direction) => match board.slide(direction) {
                    Ok(next) => board = next,
                    Err(err) => println!("{err}"),
                },
                Err(_) => println!("Unknown command '{other}'; type H for help."),
            },
        }
    }
}
