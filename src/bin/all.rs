//! Runs the memory-access demos.
//!
//! Usage:
//!   mem-demos              # Run every demo in order
//!   mem-demos --list       # List available demos
//!   mem-demos unroll_sum_f32  # Run one demo
//!   mem-demos --help       # Show help
//!
//! The exit status is always 0; problems are reported on stderr.

use memory_access_demos::cli::{parse_args, Action};
use memory_access_demos::config::DemoConfig;
use memory_access_demos::registry::build_registry;
use memory_access_demos::tui;
use memory_access_demos::utils::runner::{run_demos_with, TimingConfig};
use std::env;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let registry = build_registry();
    let invocation = parse_args(env::args().skip(1), &registry);

    for warning in &invocation.warnings {
        eprintln!("{}", warning);
    }

    let demos = match invocation.action {
        Action::Help => {
            tui::print_help();
            return;
        }
        Action::List => {
            tui::print_available_demos(&registry);
            return;
        }
        Action::UnknownDemo(name) => {
            eprintln!("Demo '{}' not found; nothing was run.", name);
            eprintln!("Available: {:?}", registry.list_names());
            return;
        }
        Action::Run(demos) => demos,
    };

    let config = DemoConfig::default();
    let timing = TimingConfig::default();

    tui::print_header();
    run_demos_with(&demos, &config, &timing, |demo, report| {
        tui::print_demo_report(demo, report, &config);
    });

    println!("Note: improvement is relative to the first variant of each demo; positive means faster.");
}
