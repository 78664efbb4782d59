use console::style;
use std::fmt::Display;

/// Prints a section heading.
pub(crate) fn heading(title: &str) {
    println!();
    println!("  {}", style(title).cyan().bold().underlined());
    println!();
}

/// Prints a completed step.
pub(crate) fn success(message: impl Display) {
    println!("  {} {}", style("✓").green().bold(), message);
}

/// Prints the closing line of a command.
pub(crate) fn done(message: impl Display) {
    println!();
    println!("  {}", style(message).green().bold());
    println!();
}

/// Prints a dimmed note.
pub(crate) fn note(message: impl Display) {
    println!("  {}", style(message).magenta().dim());
}
