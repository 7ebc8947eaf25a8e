use std::io;
use std::path::PathBuf;
use thiserror::Error;
use crate::zone::render::RenderError;

/// Everything that can abort a zonefile run. Nothing is recovered locally.
#[derive(Debug, Error)]
pub enum ZonefileError {
    #[error("usage: mesh-zonefile <template-file>\nplease set template file as 1st argument. Will read from stdin and write to stdout.")]
    Usage,

    #[error("Failed to read template {}: {source}", .path.display())]
    MissingTemplate {
        path: PathBuf,
        source: io::Error,
    },

    #[error("no data")]
    EmptyInput,

    #[error("Failed to read standard input: {0}")]
    Input(#[source] io::Error),

    #[error("Malformed member list: {0}")]
    MalformedInput(#[from] serde_json::Error),

    #[error("Failed to render template: {0}")]
    Render(#[from] RenderError),

    #[error("Invalid configuration: {0:#}")]
    Config(anyhow::Error),

    #[error("Failed to write output: {0}")]
    Output(#[source] io::Error),
}

impl ZonefileError {
    /// Process exit status for this failure
    pub fn exit_code(&self) -> u8 {
        match self {
            ZonefileError::Usage => 1,
            ZonefileError::EmptyInput => 2,
            _ => 1,
        }
    }
}
