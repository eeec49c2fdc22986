//! Simple console game
//!
//! Line-based Mastermind without the TUI: type a guess, get red and white
//! pegs back, repeat until the code is broken or you quit.

use crate::core::{Difficulty, Palette, Settings, parse_yes_no};
use crate::game::{CodeGenerator, GameSession, HistoryEntry, PlayerInput, Status};
use crate::output::formatters::active_colors;
use crate::output::{print_feedback, print_history, print_quit, print_win};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Options for the console game
pub struct SimpleConfig {
    pub palette: Palette,
    /// Ask the player when `None`
    pub settings: Option<Settings>,
    pub seed: Option<u64>,
}

/// How one game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRecord {
    pub status: Status,
    pub attempts: usize,
}

/// Run the console game on stdin
///
/// # Errors
///
/// Returns an error if reading input fails or the settings cannot produce a code.
pub fn run_simple(config: &SimpleConfig) -> Result<Vec<GameRecord>> {
    let stdin = io::stdin();
    run_simple_with(config, &mut stdin.lock())
}

/// Run the console game reading player input from `input`
///
/// End of input counts as quitting.
///
/// # Errors
///
/// Returns an error if reading input fails or the settings cannot produce a code.
pub fn run_simple_with<R: BufRead>(config: &SimpleConfig, input: &mut R) -> Result<Vec<GameRecord>> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   Mastermind - Console Mode                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Break the hidden color code. After each guess you get:");
    println!("  - a red peg (●) for each right color in the right place");
    println!("  - a white peg (○) for each right color in the wrong place\n");
    println!("Commands: 'history' to list guesses, 'quit' to give up, 'help'\n");

    let settings = match config.settings {
        Some(settings) => settings,
        None => match prompt_settings(input)? {
            Some(settings) => settings,
            None => return Ok(Vec::new()),
        },
    };

    let mut generator = CodeGenerator::new(config.palette.clone(), config.seed);
    let mut records = Vec::new();

    loop {
        let mut session = GameSession::start(settings, &mut generator)?;
        println!("New game: {settings}\n");

        let record = play_one(&mut session, &config.palette, input)?;
        records.push(record);

        match read_line(input, "Play again? (yes/no)")? {
            Some(answer) if parse_yes_no(&answer) == Ok(true) => {
                println!("\n🔄 New game started!\n");
            }
            _ => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(records);
            }
        }
    }
}

fn play_one<R: BufRead>(
    session: &mut GameSession,
    palette: &Palette,
    input: &mut R,
) -> Result<GameRecord> {
    let settings = *session.settings();
    let pegs = settings.peg_count();

    loop {
        println!("Available colors: {}", active_colors(palette, &settings));

        let Some(line) = read_line(input, "Place your guess here")? else {
            print_quit(session.quit()?);
            break;
        };

        match PlayerInput::parse(&line, palette, &settings) {
            Ok(PlayerInput::Quit) => {
                print_quit(session.quit()?);
                break;
            }
            Ok(PlayerInput::History) => print_history(session.history(), pegs),
            Ok(PlayerInput::Help) => print_help(pegs),
            Ok(PlayerInput::Guess(guess)) => {
                let turn = session.submit(guess.clone())?;
                if turn.won {
                    print_win(session.code(), session.attempts());
                    break;
                }
                print_feedback(
                    &HistoryEntry {
                        guess,
                        feedback: turn.feedback,
                    },
                    pegs,
                );
            }
            Err(e) => {
                println!("{} {e}", "❌".red());
                println!(
                    "Guess must be {pegs} of these: {}",
                    active_colors(palette, &settings)
                );
            }
        }
    }

    Ok(GameRecord {
        status: session.status(),
        attempts: session.attempts(),
    })
}

/// Ask for difficulty and the duplicates rule, `None` on end of input
fn prompt_settings<R: BufRead>(input: &mut R) -> Result<Option<Settings>> {
    let difficulty = loop {
        let Some(line) = read_line(input, "Choose your difficulty (easy, medium, hard, expert)")?
        else {
            return Ok(None);
        };
        match line.parse::<Difficulty>() {
            Ok(difficulty) => break difficulty,
            Err(_) => println!("Please enter easy, medium, hard or expert."),
        }
    };

    let duplicates = loop {
        let Some(line) = read_line(input, "Allow duplicate colors? (yes/no)")? else {
            return Ok(None);
        };
        match parse_yes_no(&line) {
            Ok(allowed) => break allowed,
            Err(_) => println!("Please enter yes or no."),
        }
    };

    Ok(Some(Settings::new(difficulty, duplicates)))
}

fn print_help(pegs: usize) {
    println!("\nEnter {pegs} colors separated by spaces, e.g. 'pink orange yellow green'.");
    println!("Abbreviations work too: pi or ye gr bl pu wh bla.");
    println!("Type 'history' to see your guesses or 'quit' to reveal the code.\n");
}

/// Prompt and read one trimmed line, `None` on end of input
fn read_line<R: BufRead>(input: &mut R, prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn config(settings: Option<Settings>, seed: u64) -> SimpleConfig {
        SimpleConfig {
            palette: Palette::standard(),
            settings,
            seed: Some(seed),
        }
    }

    fn secret_for(settings: Settings, seed: u64) -> String {
        CodeGenerator::seeded(Palette::standard(), seed)
            .generate_code(&settings)
            .unwrap()
            .to_string()
    }

    #[test]
    fn win_after_wrong_guesses() {
        let settings = Settings::new(Difficulty::Easy, false);
        let secret = secret_for(settings, 10);

        // All-purple can never be right for a duplicate-free code
        let script = format!("history\npu pu pu pu\nnot a guess\n{secret}\nno\n");
        let records = run_simple_with(&config(Some(settings), 10), &mut Cursor::new(script)).unwrap();

        assert_eq!(
            records,
            vec![GameRecord {
                status: Status::Won,
                attempts: 2
            }]
        );
    }

    #[test]
    fn quit_ends_the_game() {
        let settings = Settings::new(Difficulty::Medium, true);
        let script = "quit\nno\n";
        let records = run_simple_with(&config(Some(settings), 3), &mut Cursor::new(script)).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].status, Status::Quit);
        assert_eq!(records[0].attempts, 0);
    }

    #[test]
    fn settings_prompt_retries_until_valid() {
        let settings = Settings::new(Difficulty::Hard, true);
        let secret = secret_for(settings, 4);

        let script = format!("impossible\nhard\nmaybe\nyes\n{secret}\nno\n");
        let records = run_simple_with(&config(None, 4), &mut Cursor::new(script)).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].status, Status::Won);
        assert_eq!(records[0].attempts, 1);
    }

    #[test]
    fn play_again_starts_a_new_game() {
        let settings = Settings::new(Difficulty::Easy, true);
        let script = "quit\nyes\nquit\nno\n";
        let records = run_simple_with(&config(Some(settings), 8), &mut Cursor::new(script)).unwrap();

        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.status == Status::Quit));
    }

    #[test]
    fn end_of_input_quits() {
        let settings = Settings::new(Difficulty::Easy, false);
        let records = run_simple_with(&config(Some(settings), 1), &mut Cursor::new("")).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].status, Status::Quit);
    }

    #[test]
    fn end_of_input_during_settings() {
        let records = run_simple_with(&config(None, 1), &mut Cursor::new("easy\n")).unwrap();
        assert!(records.is_empty());
    }
}
