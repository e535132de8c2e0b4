//! Display functions for pipeline steps and results

use console::Style;

/// Announce a pipeline step
pub fn step(message: &str) {
    println!("{} {}", Style::new().cyan().bold().apply_to("==>"), message);
}

/// Report a completed action
pub fn ok(message: &str) {
    println!("  {} {}", Style::new().green().bold().apply_to("✓"), message);
}

/// Report a skipped or degraded action
pub fn warn(message: &str) {
    println!("  {} {}", Style::new().yellow().bold().apply_to("!"), message);
}

/// Secondary detail line
pub fn detail(message: &str) {
    println!("    {}", Style::new().dim().apply_to(message));
}

/// Emphasized key/value line for final summaries
pub fn summary(label: &str, value: &str) {
    println!("{} {}", Style::new().bold().apply_to(label), value);
}
