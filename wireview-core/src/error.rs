/// Error type shared by the wireframe viewer crates
use std::io;

/// Failures detected while setting up a viewer. All of them are deterministic
/// and surface once, before anything is drawn.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An edge refers to a vertex that does not exist.
    #[error("edge {edge} references vertex {index}, but the shape only has {vertex_count} vertices")]
    EdgeOutOfRange {
        edge: usize,
        index: usize,
        vertex_count: usize,
    },

    /// A rendering surface or input source could not be found at setup.
    #[error("missing collaborator: {name}")]
    MissingCollaborator { name: String },

    #[error("OBJ parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    pub fn missing(name: impl Into<String>) -> Self {
        Self::MissingCollaborator { name: name.into() }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
