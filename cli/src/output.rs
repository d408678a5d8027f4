//! Colored terminal output helpers.

use console::{style, Emoji};

pub static SUCCESS: Emoji = Emoji("✓", "+");
pub static ERROR: Emoji = Emoji("✗", "x");
pub static MISSING: Emoji = Emoji("·", "-");
pub static WARNING: Emoji = Emoji("⚠", "!");

pub fn success(msg: &str) {
    println!("{} {}", style(SUCCESS).green().bold(), msg);
}

pub fn error(msg: &str) {
    eprintln!("{} {}", style(ERROR).red().bold(), msg);
}

pub fn warning(msg: &str) {
    println!("{} {}", style(WARNING).yellow().bold(), msg);
}

pub fn header(msg: &str) {
    println!("\n{}", style(msg).bold());
}

/// Prints an aligned `label: value` line.
pub fn field(label: &str, value: &str) {
    println!("  {:<16} {}", style(format!("{label}:")).dim(), value);
}

/// Prints whether an environment variable is set, without its value.
pub fn var_status(name: &str, set: bool) {
    if set {
        println!("  {} {}", style(SUCCESS).green(), name);
    } else {
        println!("  {} {} {}", style(MISSING).red(), name, style("(not set)").dim());
    }
}
