//! Errors from loading a [`crate::ir::ClassInfo`] out of its JSON
//! projection. The synthesizer itself never fails (§7); this error domain
//! exists only at the boundary this crate owns in place of the upstream
//! parser.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum SynthError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse class JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no class files found under {0}")]
    EmptyBatch(PathBuf),
}
