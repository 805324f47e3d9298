//! Error types for Dockview

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DockviewError {
    #[error("Invalid filter token `{token}`: {reason}")]
    Filter { token: String, reason: String },

    #[error("Template #{index} failed to compile: {source}")]
    Template {
        index: usize,
        source: minijinja::Error,
    },

    #[error("Could not discover engine API version: {0}")]
    Version(String),

    #[error("Engine error: {0}")]
    Engine(#[from] bollard::errors::Error),

    #[error("Engine returned a container summary without an id")]
    MissingContainerId,

    #[error("Template `{template}` failed to render: {reason}")]
    Render { template: String, reason: String },

    #[error("Template `{template}` did not produce valid JSON: {source}")]
    Decode {
        template: String,
        source: serde_json::Error,
    },

    #[error("Error encoding output: {0}")]
    Encode(serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DockviewError>;
