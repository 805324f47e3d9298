//! Dockview - filtered, templated JSON views of container state
//!
//! Dockview lists containers on a Docker-compatible engine, inspects every
//! match, renders each inspection record through one or more text
//! templates, and writes the results as JSON arrays on standard output.
//!
//! # Example
//!
//! ```no_run
//! use dockview::{compile, parse_spec};
//!
//! let filters = parse_spec("status=running,label=app%3Dweb").unwrap();
//! let templates = compile(&[]).unwrap(); // default pass-through template
//! assert_eq!(templates.len(), 1);
//! ```

pub mod cli;
pub mod engine;
pub mod error;
pub mod filter;
pub mod output;
pub mod template;

pub use cli::Args;
pub use error::{DockviewError, Result};
pub use filter::{parse_spec, parse_tokens, FilterSet};
pub use output::write_array;
pub use template::{compile, render_all, render_template, CompiledTemplates, DEFAULT_TEMPLATE};
