use std::time::Duration;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

/// Print a success message.
pub fn success(msg: &str) {
    println!("  {} {}", "✓".green(), msg);
}

/// Print an error message.
pub fn error(msg: &str) {
    eprintln!("  {} {}", "✗".red(), msg);
}

/// Print a dimmed detail line.
pub fn detail(msg: &str) {
    println!("    {}", msg.dimmed());
}

/// Start a spinner with the given message.
pub fn spinner(msg: &str) -> ProgressBar {
    let sp = ProgressBar::new_spinner();
    sp.set_style(
        ProgressStyle::with_template("  {spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    sp.enable_steady_tick(Duration::from_millis(80));
    sp.set_message(msg.to_string());
    sp
}

/// Stop a spinner and print the final message as a success line.
pub fn finish_spinner(sp: ProgressBar, msg: &str) {
    sp.finish_and_clear();
    success(msg);
}
