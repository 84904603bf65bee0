//! Argument handling for the `mem-demos` binary.
//!
//! Nothing here ends the process: bad input becomes a warning and the binary
//! still exits with status 0.

use crate::registry::{DemoRegistry, DemoRunner};

/// What the binary should do.
pub enum Action<'r> {
    Help,
    List,
    /// Run these demos in order.
    Run(Vec<&'r dyn DemoRunner>),
    /// The requested demo does not exist; nothing runs.
    UnknownDemo(String),
}

/// Resolved command line.
pub struct Invocation<'r> {
    pub action: Action<'r>,
    /// Messages for stderr about ignored arguments.
    pub warnings: Vec<String>,
}

/// Resolve the arguments (without the program name) against the registry.
///
/// `--help` wins over `--list`, which wins over a demo name. The last demo
/// name given is the one used. Unknown options are ignored with a warning.
pub fn parse_args<'r, I, S>(args: I, registry: &'r DemoRegistry) -> Invocation<'r>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut show_list = false;
    let mut show_help = false;
    let mut demo_filter: Option<String> = None;
    let mut warnings = Vec::new();

    for arg in args {
        match arg.as_ref() {
            "--list" | "-l" => show_list = true,
            "--help" | "-h" => show_help = true,
            arg if !arg.starts_with('-') => demo_filter = Some(arg.to_string()),
            arg => warnings.push(format!("Unknown option '{}' ignored.", arg)),
        }
    }

    let action = if show_help {
        Action::Help
    } else if show_list {
        Action::List
    } else {
        match demo_filter {
            Some(name) => match registry.find(&name) {
                Some(demo) => Action::Run(vec![demo]),
                None => Action::UnknownDemo(name),
            },
            None => Action::Run(registry.all().iter().map(|d| d.as_ref()).collect()),
        }
    };

    Invocation { action, warnings }
}
