use owo_colors::OwoColorize;
use std::io::IsTerminal;

pub struct Output;

/// Split a command line into its program word and the remaining arguments,
/// joined back with single spaces.
pub fn split_command(command: &str) -> (&str, String) {
    let mut words = command.split_whitespace();
    let word = words.next().unwrap_or("");
    (word, words.collect::<Vec<_>>().join(" "))
}

/// `<prefix> <word>[ <rest>]` without colors.
pub fn plain_line(prefix: &str, command: &str) -> String {
    let (word, rest) = split_command(command);
    if rest.is_empty() {
        format!("{} {}", prefix, word)
    } else {
        format!("{} {} {}", prefix, word, rest)
    }
}

impl Output {
    pub fn success(message: &str) {
        println!("{} {}", "✓".green().bold(), message);
    }

    pub fn info(message: &str) {
        println!("{} {}", "ℹ".blue().bold(), message.bright_blue());
    }

    pub fn warning(message: &str) {
        println!("{} {}", "⚠".yellow().bold(), message.yellow());
    }

    pub fn header(message: &str) {
        println!("\n{}\n", message.bright_cyan().bold());
    }

    /// Print a command line with the program word highlighted.
    pub fn command(prefix: &str, command: &str) {
        println!("{}", Self::styled_line(prefix, command));
    }

    /// Highlighted on a terminal, plain when piped.
    pub fn styled_line(prefix: &str, command: &str) -> String {
        if !std::io::stdout().is_terminal() {
            return plain_line(prefix, command);
        }
        let (word, rest) = split_command(command);
        if rest.is_empty() {
            format!("{} {}", prefix.bright_black(), word.bold())
        } else {
            format!("{} {} {}", prefix.bright_black(), word.bold(), rest)
        }
    }

    /// One row of the tab strip: name, selection marker and command.
    pub fn tab(name: &str, selected: bool, prefix: &str, command: &str) {
        let marker = if selected { "●" } else { " " };
        let line = if command.is_empty() {
            "(no command)".bright_black().to_string()
        } else {
            Self::styled_line(prefix, command)
        };
        if selected {
            println!("{} {:<6} {}", marker.cyan(), name.cyan().bold(), line);
        } else {
            println!("{} {:<6} {}", marker, name, line);
        }
    }
}
