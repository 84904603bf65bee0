//! Text User Interface (TUI) utilities.
//!
//! Handles formatted output for the CLI.

use crate::config::DemoConfig;
use crate::registry::{BenchmarkResult, DemoRegistry, DemoRunner, DemoStatus, ReportStyle};
use crate::utils::bench::{format_checksum, format_seconds, report_improvement, Improvement};
use crate::utils::runner::{DemoOutcome, DemoReport};
use terminal_size::{terminal_size, Width};

/// Get the current terminal width, constrained to a reasonable range
fn get_term_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        (w as usize).clamp(40, 200)
    } else {
        80
    }
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

fn status_label(status: DemoStatus) -> &'static str {
    match status {
        DemoStatus::Ready => "ready",
        DemoStatus::Pending => "pending (not implemented)",
    }
}

/// Print demo info box
pub fn print_demo_info_box(demo: &dyn DemoRunner, config: &DemoConfig) {
    let term_width = get_term_width();
    let max_content_width = term_width.saturating_sub(4).max(40);

    let variants = demo.available_variants(config);
    let name_line = format!("Demo:     {}", demo.name());
    let cat_line = format!("Category: {}", demo.category());
    let desc_line = demo.description();
    let var_line = if variants.is_empty() {
        format!("Status:   {}", status_label(demo.status()))
    } else {
        format!("Variants: {}", variants.join(", "))
    };

    let content_width = [name_line.len(), cat_line.len(), desc_line.len(), var_line.len()]
        .iter()
        .cloned()
        .max()
        .unwrap_or(60)
        .min(max_content_width);

    let border = "─".repeat(content_width + 2);

    println!("┌{}┐", border);
    for line in [name_line.as_str(), cat_line.as_str(), desc_line] {
        println!(
            "│ {:<width$} │",
            truncate(line, content_width),
            width = content_width
        );
    }
    println!("├{}┤", border);
    println!(
        "│ {:<width$} │",
        truncate(&var_line, content_width),
        width = content_width
    );
    println!("└{}┘", border);
    println!();
}

/// Print one row per variant. With `show_gain`, each row after the first
/// also shows its improvement over the first.
pub fn print_results_table(results: &[BenchmarkResult], show_gain: bool) {
    if results.is_empty() {
        return;
    }

    let variant_col_width = results
        .iter()
        .map(|r| r.label.len())
        .max()
        .unwrap_or(0)
        .max("Variant".len());
    let table_width = variant_col_width + 14 + 12 + if show_gain { 14 } else { 0 };

    let baseline = results[0].elapsed_seconds;

    println!("  {}", "─".repeat(table_width));
    if show_gain {
        println!(
            "  {:<v_width$} {:>13} {:>13} {:>11}",
            "Variant",
            "Time",
            "Improvement",
            "Checksum",
            v_width = variant_col_width
        );
    } else {
        println!(
            "  {:<v_width$} {:>13} {:>11}",
            "Variant",
            "Time",
            "Checksum",
            v_width = variant_col_width
        );
    }
    println!("  {}", "─".repeat(table_width));

    for (idx, result) in results.iter().enumerate() {
        let time_str = format_seconds(result.elapsed_seconds);
        let checksum = format_checksum(result.result_sample);

        if show_gain {
            let gain = if idx == 0 {
                "baseline".to_string()
            } else {
                report_improvement(baseline, result.elapsed_seconds).to_string()
            };
            println!(
                "  {:<v_width$} {:>13} {:>13} {:>11}",
                result.label,
                time_str,
                gain,
                checksum,
                v_width = variant_col_width
            );
        } else {
            println!(
                "  {:<v_width$} {:>13} {:>11}",
                result.label,
                time_str,
                checksum,
                v_width = variant_col_width
            );
        }
    }
    println!();
}

/// One line per run of consecutive variants sharing a description.
pub fn variant_legend(results: &[BenchmarkResult]) -> Vec<String> {
    results
        .chunk_by(|a, b| a.description == b.description)
        .map(|group| {
            let labels: Vec<&str> = group.iter().map(|r| r.label.as_str()).collect();
            format!("{}: {}", labels.join(", "), group[0].description)
        })
        .collect()
}

/// The summary line printed under a demo's table.
pub fn improvement_line(results: &[BenchmarkResult], improvement: Improvement) -> String {
    let baseline = results.first().map(|r| r.label.as_str()).unwrap_or("baseline");
    match improvement {
        Improvement::Percent(p) if results.len() == 2 => {
            format!("Improvement of {:.2} % of '{}' over '{}'.", p, results[1].label, baseline)
        }
        Improvement::Percent(p) => {
            format!("Best improvement over '{}': {:.2} %.", baseline, p)
        }
        Improvement::Undefined => {
            "Improvement: undefined (no usable baseline).".to_string()
        }
    }
}

/// Print everything known about one finished demo.
pub fn print_demo_report(demo: &dyn DemoRunner, report: &DemoReport, config: &DemoConfig) {
    print_demo_info_box(demo, config);

    match &report.outcome {
        DemoOutcome::Completed {
            results,
            improvement,
        } => {
            print_results_table(results, demo.report_style() == ReportStyle::BestOverFirst);
            for line in variant_legend(results) {
                println!("  {}", truncate(&line, get_term_width().saturating_sub(2)));
            }
            println!();
            if let Some(improvement) = improvement {
                println!("  {}", improvement_line(results, *improvement));
                println!();
            }
        }
        DemoOutcome::Skipped(err) => {
            println!("  Skipped: {}", err);
            println!();
        }
        DemoOutcome::Pending => {}
    }
}

/// Print the application header
pub fn print_header() {
    let term_width = get_term_width().min(80);
    let title = " Memory Access Demos ";
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
    println!(
        "  Timed with the {} clock. Results depend on the CPU they run on.",
        crate::utils::timer::clock_name()
    );
    println!();
}

/// Print the help message
pub fn print_help() {
    println!("Usage: mem-demos [OPTIONS] [DEMO]");
    println!();
    println!("Options:");
    println!("  --list, -l     List all demos");
    println!("  --help, -h     Show this help message");
    println!();
    println!("Unknown options are ignored. The exit status is always 0.");
    println!();
    println!("Arguments:");
    println!("  DEMO           Name of a single demo to run (omit for all)");
    println!();
    println!("Environment:");
    println!("  RUST_LOG       Log level for progress messages on stderr (default: warn)");
    println!();
    println!("Examples:");
    println!("  mem-demos                        # Run every demo in order");
    println!("  mem-demos unroll_sum_f32         # Run only the float unroll demo");
    println!("  RUST_LOG=debug mem-demos         # Log each variant as it finishes");
}

/// Print the list of demos
pub fn print_available_demos(registry: &DemoRegistry) {
    println!("Available demos:");
    println!();
    for demo in registry.all() {
        let pending = if demo.status() == DemoStatus::Pending {
            " (pending)"
        } else {
            ""
        };
        println!(
            "  {:<22} [{}]{} - {}",
            demo.name(),
            demo.category(),
            pending,
            demo.description()
        );
    }
}
