//! Command line assembly for repository removal operations.
//!
//! Generated command lines are text only: helmforge writes them to stdout or
//! a file, and the caller decides when and how to execute them.

use crate::config::Config;
use crate::flags::{remove_flags_with, RemoveOptions};
use crate::options::{merge_options, OptionValue};
use crate::quote::QuoteMode;
use log::{debug, warn};

/// Build a full `helm repo remove` command line from typed options.
///
/// Returns `"<helm_binary> repo remove"` with the flag fragment appended when
/// it is non-empty.
pub fn remove_command(helm_binary: &str, options: &RemoveOptions, mode: QuoteMode) -> String {
    let flags = remove_flags_with(options, mode);
    if flags.is_empty() {
        format!("{} repo remove", helm_binary)
    } else {
        format!("{} repo remove {}", helm_binary, flags)
    }
}

/// Generate one command line per configured repository entry.
///
/// Global defaults are merged under per-entry options, and the entry name is
/// injected as the positional repository name, overriding any `repo_name`
/// carried in the option maps.
pub fn generate_commands(config: &Config) -> Vec<String> {
    let helm_binary = config.helm_binary();
    let mode = config.quote_mode();
    let mut commands = Vec::with_capacity(config.repositories.len());

    for entry in &config.repositories {
        let mut merged = merge_options(config.defaults.as_ref(), entry.options.as_ref());
        merged.insert(
            "repo_name".to_string(),
            OptionValue::String(entry.name.clone()),
        );

        let options = RemoveOptions::from_options(&merged);
        if options.is_empty() {
            // Happens when the entry name is the "undef" sentinel
            warn!(
                "Repository entry '{}' produces no arguments; emitting bare removal command",
                entry.name
            );
        }

        let command = remove_command(helm_binary, &options, mode);
        debug!("Generated: {}", command);
        commands.push(command);
    }

    commands
}
