//! # Helmforge - Command-line generation utility for Helm repository maintenance
//!
//! This library generates `helm repo remove` command lines from declarative
//! YAML or JSON configuration files.
//!
//! ## Overview
//!
//! Infrastructure automation tools often need to tear down Helm chart
//! repositories across many environments. Helmforge takes a configuration
//! describing the repositories to remove, together with per-environment
//! options such as the Helm home directory or the Tiller host, and emits one
//! shell command line per repository. The commands are emitted as text;
//! executing them is left to the caller.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - `options`: Loosely-typed option values and defaults/overrides merging
//! - `flags`: Typed removal options and flag-string serialization
//! - `quote`: Legacy and POSIX-escaped value quoting
//! - `config`: Type-safe configuration structures and validation
//! - `config_loader`: Configuration file loading
//! - `command`: Full command-line assembly
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use helmforge::{command, config_loader};
//! use std::path::Path;
//!
//! // Load configuration from a YAML file
//! let config = config_loader::load_config(Path::new("repos.yaml"))?;
//!
//! // Generate one command line per repository entry
//! for line in command::generate_commands(&config) {
//!     println!("{}", line);
//! }
//! # Ok::<(), color_eyre::eyre::Error>(())
//! ```
//!
//! ## Flag Serialization
//!
//! The core of the crate is a deterministic serializer from removal options
//! to a flag string:
//!
//! ```rust
//! use helmforge::flags::{remove_flags, RemoveOptions};
//!
//! let options = RemoveOptions {
//!     repo_name: Some("stable".to_string()),
//!     home: Some("/root/.helm".to_string()),
//!     ..Default::default()
//! };
//! assert_eq!(remove_flags(&options), "'stable' --home '/root/.helm'");
//! ```
//!
//! Fields left unset, or set to the literal string `"undef"` by upstream
//! configuration layers, are omitted from the output.
//!
//! ## Error Handling
//!
//! File loading and the CLI use `color_eyre` for error reporting with
//! context; configuration validation has a typed `thiserror` taxonomy. The
//! serializer itself never fails.

pub mod command;
pub mod config;
pub mod config_loader;
pub mod flags;
pub mod options;
pub mod quote;
