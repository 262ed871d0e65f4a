use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::domain::model::PostId;
use crate::utils::error::Result;

/// Single-integer file holding the last post ID we notified about.
///
/// The read initializes an absent file to `0` so the first run behaves like
/// every other run. Non-numeric contents are an error, never a silent zero.
#[derive(Debug, Clone)]
pub struct CheckpointFile {
    path: PathBuf,
}

impl CheckpointFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn read(&self) -> Result<PostId> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(contents.parse()?),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                self.write(PostId(0))?;
                Ok(PostId(0))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Full-file overwrite with the decimal form of `id`. No atomicity beyond
    /// what the filesystem gives a short write; a missed notification after a
    /// crash is acceptable here.
    pub fn write(&self, id: PostId) -> Result<()> {
        fs::write(&self.path, id.to_string())?;
        Ok(())
    }
}
