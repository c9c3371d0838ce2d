use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum KubectlError {
    #[error("kubectl wrote to stderr: {stderr}")]
    ExternalCommand { stderr: String },
    #[error("unable to run {} - please verify the kubectl path", .binary.display())]
    Spawn {
        binary: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize log record")]
    Serialize(#[from] serde_json::Error),
}
