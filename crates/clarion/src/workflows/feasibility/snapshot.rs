use super::domain::ProjectSnapshot;
use std::fmt;
use std::io::Read;
use std::path::Path;

#[derive(Debug)]
pub enum SnapshotLoadError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for SnapshotLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotLoadError::Io(err) => write!(f, "failed to read project snapshot: {}", err),
            SnapshotLoadError::Json(err) => write!(f, "invalid project snapshot: {}", err),
        }
    }
}

impl std::error::Error for SnapshotLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SnapshotLoadError::Io(err) => Some(err),
            SnapshotLoadError::Json(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for SnapshotLoadError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for SnapshotLoadError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl ProjectSnapshot {
    /// Loads a snapshot saved as camelCase JSON.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SnapshotLoadError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, SnapshotLoadError> {
        Ok(serde_json::from_reader(reader)?)
    }
}
