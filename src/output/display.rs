//! Display functions for session output

use super::formatters::{escape_display, plural, quoted};
use crate::core::Alphabet;
use crate::engine::{BreakResult, Outcome};
use crate::error::Error;
use colored::Colorize;

/// Print the session banner
pub fn print_banner() {
    let width = 62;
    println!("\n{}", format!("╔{}╗", "═".repeat(width)).bright_cyan());
    println!(
        "{}{}{}",
        "║".bright_cyan(),
        format!(
            "{:^width$}",
            format!("pwd-brkr v{}", env!("CARGO_PKG_VERSION"))
        )
        .bright_white()
        .bold(),
        "║".bright_cyan()
    );
    println!(
        "{}{}{}",
        "║".bright_cyan(),
        format!("{:^width$}", "character-by-character stringset breaker").dimmed(),
        "║".bright_cyan()
    );
    println!("{}", format!("╚{}╝", "═".repeat(width)).bright_cyan());
    println!(
        "{}\n",
        "[*] Type 'list' for available commands | Use --help flag for command info | 'exit' to quit"
            .dimmed()
    );
}

/// Print the REPL prompt (no newline)
pub fn print_prompt() {
    print!("{}{}{} ", "[pwd-brkr".bright_cyan(), "]".bright_white(), " #".bright_cyan());
}

/// Print the command registry table
pub fn print_command_table() {
    let rows: [(&str, &str, &str); 5] = [
        (
            "random-break",
            "<max> | <min> <max> [<rate> [<cd>]]",
            "Generate & break a random stringset",
        ),
        (
            "break",
            "[-r <rate>] [-c <cd>] <literal>",
            "Break a literal stringset",
        ),
        ("charset", "(none)", "Display the allowed character set"),
        ("list", "(none)", "Show this command registry"),
        ("exit", "(none)", "Terminate session"),
    ];

    println!("\n{}", "[COMMAND REGISTRY]".bright_cyan().bold());
    println!("{}", "─".repeat(100).cyan());
    println!(
        " {:<3} {:<14} {:<38} {}",
        "#".dimmed(),
        "Command".bold(),
        "Arguments".bold(),
        "Description".bold()
    );
    println!("{}", "─".repeat(100).cyan());
    for (i, (command, args, description)) in rows.iter().enumerate() {
        println!(
            " {:<3} {:<14} {:<38} {}",
            (i + 1).to_string().dimmed(),
            command.bright_cyan(),
            args.bright_yellow(),
            description.dimmed()
        );
    }
    println!("{}\n", "─".repeat(100).cyan());
}

/// Print the alphabet in attempt order
pub fn print_charset(alphabet: &Alphabet) {
    println!(
        "\n{} {}",
        "[*] CHARACTER SET".bright_cyan().bold(),
        format!("({} symbols, attempt order)", alphabet.len()).dimmed()
    );
    for chunk in alphabet.symbols().chunks(32) {
        let row: String = chunk.iter().collect();
        println!("    {}", escape_display(&row).bright_white());
    }
    println!();
}

/// Print a freshly generated target
pub fn print_target(target: &str) {
    println!(
        "{}\n",
        format!("[*] TARGET GENERATED: {}", quoted(target)).bright_yellow()
    );
}

/// Print the final message of a run
pub fn print_outcome(result: &BreakResult) {
    match &result.outcome {
        Outcome::Cracked(found) => {
            println!(
                "{}",
                format!("[+] CRACKED: {}", quoted(found)).bright_green().bold()
            );
        }
        Outcome::Interrupted(partial) => {
            println!(
                "{}",
                format!("[!] INTERRUPTED - partial match: {}", quoted(partial)).yellow()
            );
        }
        Outcome::Failed(reason) => {
            println!(
                "{}",
                format!("[x] FAILED: {}", escape_display(reason)).red().bold()
            );
        }
    }

    println!(
        "    {}\n",
        format!(
            "{}, {} in {:.2}s",
            plural(result.total_attempts, "attempt"),
            plural(result.cooldowns, "cooldown"),
            result.duration.as_secs_f64()
        )
        .dimmed()
    );
}

/// Print the notice for a run skipped by Ctrl+C before it started
pub fn print_cancelled() {
    println!(
        "{}\n",
        "[!] INTERRUPTED - run cancelled before start".yellow()
    );
}

/// Print a usage or help text
pub fn print_usage(text: &str) {
    println!("{}", text.trim_end().bright_yellow());
    println!();
}

/// Print a recoverable error
pub fn print_error(error: &Error) {
    match error {
        Error::Usage(text) => println!("{}\n", text.trim_end().red()),
        other => println!("{}\n", format!("[x] ERROR: {other}").red()),
    }
}

/// Print an unknown-command notice
pub fn print_unknown_command(command: &str) {
    println!(
        "{}\n",
        format!("[x] UNKNOWN COMMAND: {}", quoted(command)).red()
    );
}
