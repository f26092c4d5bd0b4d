use async_trait::async_trait;
use url::Url;

use crate::error::Result;
use lumina_model::{ImageFolder, UserId};

/// Destination of an upload within the object store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePath {
    pub folder: ImageFolder,
    pub owner: UserId,
    pub file_name: String,
}

impl StoragePath {
    pub fn as_path(&self) -> String {
        format!("{}/{}/{}", self.folder.as_str(), self.owner, self.file_name)
    }
}

/// Port to the managed object store.
///
/// Consumed only at its interface boundary; the resize pipeline picks up
/// originals from here and writes derivatives at fixed suffixes.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Upload a file and return its download URL.
    async fn upload(&self, path: &StoragePath, bytes: Vec<u8>) -> Result<Url>;
}
