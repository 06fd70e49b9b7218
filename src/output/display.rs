//! Display functions for command results

use super::formatters::{create_progress_bar, familiarity_dots};
use crate::commands::{SimulationResult, StatusReport};
use crate::core::Familiarity;
use colored::Colorize;

/// Print a status report
pub fn print_status_report(report: &StatusReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "VOCABULARY STATUS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let source = report.source.to_string();
    if report.source.is_fallback() {
        println!("\n📚 Source: {}", source.yellow());
    } else {
        println!("\n📚 Source: {source}");
    }

    let status = &report.status;
    println!("   Total:       {}", status.total);
    println!(
        "   Learned:     {}",
        status.learned.to_string().green().bold()
    );
    println!(
        "   Unlearned:   {}",
        status.unlearned.to_string().yellow().bold()
    );
    println!(
        "   Progress:    [{}] {:.1}%",
        create_progress_bar(status.learned as f64, status.total as f64, 30).green(),
        report.learned_percent()
    );

    println!("\n📈 {}", "Familiarity:".bright_cyan().bold());
    for tier in Familiarity::ALL {
        let count = report.tiers[usize::from(tier.value())];
        println!(
            "   {} {:<11} {count:5}",
            familiarity_dots(tier),
            tier.label()
        );
    }
}

/// Print the result of a simulation
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "SELECTION SIMULATION:".bright_cyan().bold(),
        result.mode.label().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if result.rows.is_empty() {
        println!("\n{}", result.mode.empty_message().yellow());
        return;
    }

    println!(
        "\n🎲 {} draws in {:.2}s",
        result.draws,
        result.duration.as_secs_f64()
    );
    println!(
        "\n   {:<16} {:<4} {:>9} {:>9} {:>9}",
        "Word", "Tier", "Draws", "Observed", "Expected"
    );
    for row in &result.rows {
        let observed = row.frequency(result.draws);
        println!(
            "   {:<16} {:<4} {:>9} {:>8.2}% {:>8.2}%",
            row.term,
            familiarity_dots(row.familiarity),
            row.observed,
            observed * 100.0,
            row.expected * 100.0
        );
    }

    let deviation = result.max_deviation() * 100.0;
    let deviation_text = format!("{deviation:.2} pp");
    println!(
        "\n   Max deviation: {}",
        if deviation < 1.0 {
            deviation_text.green()
        } else {
            deviation_text.yellow()
        }
    );
}
