//! Wordle Assistant - CLI
//!
//! Interactive console assistant and one-shot suggestions from known constraints.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;
use wordle_assist::{
    commands::{SuggestConfig, run_interactive, run_suggest},
    output::print_suggest_report,
    solver::{Solver, StrategyType},
    wordlists::WordSource,
};

#[derive(Parser)]
#[command(
    name = "wordle_assist",
    about = "Wordle assistant narrowing a word list with color feedback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file, one word per line
    #[arg(short = 'w', long, global = true, default_value = "20k.txt")]
    wordlist: String,

    /// Word length
    #[arg(short, long, global = true, default_value = "5")]
    length: usize,

    /// Log solver activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode (default)
    Play,

    /// Suggest a guess from known constraints
    Suggest {
        /// Letters absent from the word
        #[arg(short = 'x', long, default_value = "")]
        excluded: String,

        /// Letters absent per position, comma separated (e.g. "s,,ai,,")
        #[arg(short, long)]
        position_exclusions: Option<String>,

        /// Letters present somewhere in the word
        #[arg(short, long, default_value = "")]
        required: String,

        /// Known letters with '*' wildcards (e.g. "*la*e")
        #[arg(short = 'f', long)]
        pattern: Option<String>,

        /// Guess type: e (eliminating) or g (first match)
        #[arg(short, long, default_value = "e")]
        mode: String,

        /// Print every remaining candidate
        #[arg(long)]
        list: bool,
    },
}

fn init_logging(verbose: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to install log subscriber")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let source = WordSource::load(&cli.wordlist, cli.length)
        .with_context(|| format!("failed to load word list {}", cli.wordlist))?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(cli.length, &source),
        Commands::Suggest {
            excluded,
            position_exclusions,
            required,
            pattern,
            mode,
            list,
        } => {
            let config = SuggestConfig {
                excluded,
                position_exclusions,
                required,
                pattern,
                strategy: StrategyType::from_name(&mode),
                list,
            };
            run_suggest_command(cli.length, &source, &config)
        }
    }
}

fn run_play_command(length: usize, source: &WordSource) -> Result<()> {
    let mut solver = Solver::new(length, source);
    let outcome = run_interactive(&mut solver)?;

    if !outcome.solved {
        println!("\n👋 Thanks for playing!\n");
    }
    Ok(())
}

fn run_suggest_command(length: usize, source: &WordSource, config: &SuggestConfig) -> Result<()> {
    let report = run_suggest(length, source, config).context("invalid constraints")?;
    print_suggest_report(&report);
    Ok(())
}
