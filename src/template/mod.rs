//! Template compilation and rendering

pub mod compiler;
pub mod renderer;

pub use compiler::{compile, CompiledTemplates, DEFAULT_TEMPLATE};
pub use renderer::{render_all, render_template};
