//! Mastermind - CLI
//!
//! Code-breaking game with a TUI (default) and a plain console mode, plus
//! one-shot commands for scoring guesses and inspecting code generation.

use anyhow::Result;
use clap::{Parser, Subcommand};
use mastermind::{
    commands::{SimpleConfig, generate_one, run_duplicate_survey, run_simple, score_guess},
    core::{Difficulty, Palette, Settings},
    output::{print_generated, print_score_result, print_survey_result},
};

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Break the hidden color code using red and white peg feedback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Difficulty: easy (6 colors, 4 pegs), medium (8, 4), hard (8, 5), expert (8, 6)
    #[arg(short, long, global = true)]
    difficulty: Option<Difficulty>,

    /// Allow the same color to appear more than once in the code
    #[arg(long, global = true)]
    duplicates: bool,

    /// Seed for reproducible codes
    #[arg(long, global = true, env = "MASTERMIND_SEED")]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple console mode; asks for settings unless --difficulty is given
    Simple,

    /// Score a guess against a code, e.g. score "bl gr pi or" "pi gr or pu"
    Score {
        /// The secret code
        code: String,

        /// The guess to evaluate
        guess: String,
    },

    /// Print a generated code
    Generate,

    /// Generate many codes and report how often a color repeats
    Duplicates {
        /// Number of codes to generate
        #[arg(short = 'n', long, default_value = "1000")]
        games: usize,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let palette = Palette::standard();
    let settings = Settings::new(cli.difficulty.unwrap_or_default(), cli.duplicates);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(palette, settings, cli.seed),
        Commands::Simple => {
            let config = SimpleConfig {
                palette,
                settings: cli.difficulty.map(|_| settings),
                seed: cli.seed,
            };
            run_simple(&config)?;
            Ok(())
        }
        Commands::Score { code, guess } => {
            let result = score_guess(&code, &guess, &palette, &settings)?;
            print_score_result(&result);
            Ok(())
        }
        Commands::Generate => {
            let code = generate_one(&palette, &settings, cli.seed)?;
            print_generated(&code, &settings);
            Ok(())
        }
        Commands::Duplicates { games } => {
            println!("Generating {games} codes with {settings}...");
            let survey = run_duplicate_survey(&palette, &settings, games, cli.seed, true)?;
            print_survey_result(&survey);
            Ok(())
        }
    }
}

fn run_play_command(palette: Palette, settings: Settings, seed: Option<u64>) -> Result<()> {
    use mastermind::interactive::{App, run_tui};

    let app = App::new(palette, settings, seed)?;
    run_tui(app)
}
