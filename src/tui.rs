//! Text User Interface (TUI) utilities.
//!
//! Handles formatted console output for the CLI: per-strategy notices in
//! the reference tool's wording, plus an optional cross-strategy summary
//! table sized to the terminal.

use terminal_size::{terminal_size, Width};

use crate::harness::{ReportSink, StrategyReport};
use crate::strategy::Strategy;
use crate::utils::format_duration;

/// Get the current terminal width, constrained to a reasonable range
fn get_term_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        (w as usize).clamp(40, 200)
    } else {
        80
    }
}

/// Sink that renders reports to stdout as they arrive.
pub struct Console;

impl ReportSink for Console {
    fn strategy_started(&mut self, strategy: Strategy) {
        println!("Start searching ({})...", strategy.label());
    }

    fn strategy_finished(&mut self, report: &StrategyReport) {
        println!(
            "Found {} entries. Time taken: {}",
            report.ratio(),
            format_duration(report.elapsed)
        );
        if let (Some(label), Some(prepare)) = (report.strategy.prepare_label(), report.prepare) {
            println!("{} time: {}", label, format_duration(prepare));
        }
        if let Some(search) = report.search {
            println!("Searching time: {}", format_duration(search));
        }
        println!();
    }
}

/// Print the application header
pub fn print_header() {
    let term_width = get_term_width().min(80); // Cap header at 80
    let title = " Phonebook Strategy Benchmarks ";
    let padding = term_width.saturating_sub(title.len() + 2) / 2;
    let right_padding = term_width.saturating_sub(padding + title.len());

    let border = "═".repeat(term_width);

    println!("╔{}╗", border);
    println!(
        "║{}{}{}║",
        " ".repeat(padding),
        title,
        " ".repeat(right_padding)
    );
    println!("╚{}╝", border);
    println!();
}

/// Print the list of available strategies
pub fn print_available_strategies() {
    println!("Available strategies:");
    println!();
    for strategy in Strategy::ALL {
        println!(
            "  {:<14} {:<28} - {}",
            strategy.id(),
            strategy.label(),
            strategy.description()
        );
    }
}

/// Print a cross-strategy summary table after a full run.
pub fn print_summary(reports: &[StrategyReport]) {
    if reports.is_empty() {
        return;
    }

    let term_width = get_term_width();
    let fixed_width = 64;
    let label_width = term_width.saturating_sub(fixed_width).clamp(12, 28);
    let table_width = label_width + fixed_width;

    println!("  {}", "─".repeat(table_width));
    println!(
        "  {:<l_width$} {:>10} {:>16} {:>16} {:>16}",
        "Strategy",
        "Found",
        "Total",
        "Prepare",
        "Search",
        l_width = label_width
    );
    println!("  {}", "─".repeat(table_width));

    for report in reports {
        let phase = |d: Option<std::time::Duration>| match d {
            Some(d) => format!("{:.3} ms", d.as_secs_f64() * 1_000.0),
            None => "-".to_string(),
        };
        println!(
            "  {:<l_width$} {:>10} {:>13.3} ms {:>16} {:>16}",
            truncate(report.strategy.label(), label_width),
            report.ratio(),
            report.elapsed.as_secs_f64() * 1_000.0,
            phase(report.prepare),
            phase(report.search),
            l_width = label_width
        );
    }
    println!();
}

/// Truncate string with ellipsis if it exceeds width (character-wise)
fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut result: String = s.chars().take(width.saturating_sub(3)).collect();
        result.push_str("...");
        result
    }
}
