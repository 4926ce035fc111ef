//! Password Breaker - CLI
//!
//! Character-by-character prefix search with a rate limiter and an animated
//! status line. Starts an interactive session when no command is given.

use anyhow::Result;
use clap::{Parser, Subcommand};
use pwd_brkr::{
    animator::{AnimationConfig, FrameSet, TerminalSink},
    commands::{BreakArgs, RandomBreakArgs, Session},
    core::Alphabet,
    engine::{CancelToken, EngineConfig},
    logging::init_logging,
    output::{print_banner, print_charset},
};
use std::io;
use std::sync::Arc;
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "pwd-brkr",
    about = "Password Breaker: a prefix-search cracking simulator with rate limiting",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Spinner frames: braille (default), line, alphabet
    #[arg(long, global = true, default_value = "braille")]
    spinner: String,

    /// Status line refresh period in milliseconds
    #[arg(long, global = true, default_value_t = 80)]
    tick_ms: u64,

    /// How long each status message stays up, in milliseconds
    #[arg(long, global = true, default_value_t = 1500)]
    message_interval_ms: u64,

    /// Pause after each guess, in milliseconds
    #[arg(long, global = true, default_value_t = 2)]
    attempt_delay_ms: u64,

    /// Run without asking for confirmation
    #[arg(short = 'y', long, global = true)]
    yes: bool,

    /// Skip the start-up banner
    #[arg(long, global = true)]
    no_banner: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive session (default)
    Repl,

    /// Break a literal stringset
    Break(BreakArgs),

    /// Generate & break a random stringset
    Random(RandomBreakArgs),

    /// Display the character set used for breaking
    Charset,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let session = build_session(&cli)?;
    let command = cli.command.unwrap_or(Commands::Repl);

    if !cli.no_banner && matches!(command, Commands::Repl) {
        print_banner();
    }

    match command {
        Commands::Repl => session.run_repl()?,
        Commands::Break(args) => {
            session.confirm_and_run(&args.to_request(), &mut io::stdin().lock())?;
        }
        Commands::Random(args) => {
            session.random_break(args.spec(), &mut io::stdin().lock())?;
        }
        Commands::Charset => print_charset(session.alphabet()),
    }

    Ok(())
}

/// Map the global flags onto animator and engine settings
fn build_session(cli: &Cli) -> Result<Session> {
    let alphabet = Alphabet::printable_ascii();

    let animation = AnimationConfig {
        tick: Duration::from_millis(cli.tick_ms),
        message_interval: Duration::from_millis(cli.message_interval_ms),
        ..AnimationConfig::default()
    }
    .with_frames(FrameSet::from_name(&cli.spinner).frames(&alphabet));
    animation.validate()?;

    let engine_config = EngineConfig {
        attempt_delay: Duration::from_millis(cli.attempt_delay_ms),
        ..EngineConfig::default()
    };

    let cancel = CancelToken::new();
    cancel.install_interrupt_handler()?;

    Ok(Session::new(alphabet, animation, engine_config, Arc::new(TerminalSink))
        .with_cancel(cancel)
        .assume_yes(cli.yes))
}
