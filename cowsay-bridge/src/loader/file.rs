// Copyright 2025 Cowsay Bridge Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Filesystem fetch strategy
//!
//! Reads the artifact from `{base_dir}/{artifact}` and wraps it in the same
//! media-type-tagged payload the network strategy produces, so the bridge
//! compiles both through one path.

use super::{ArtifactLoader, ArtifactPayload, WASM_MEDIA_TYPE};
use crate::error::{BridgeError, BridgeResult};
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::debug;

/// Fetches artifacts from a local base directory
pub struct FileLoader {
    base_dir: PathBuf,
}

impl FileLoader {
    /// Create a loader rooted at `base_dir`
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }
}

#[async_trait]
impl ArtifactLoader for FileLoader {
    async fn fetch(&self, artifact: &str) -> BridgeResult<ArtifactPayload> {
        let path = self.base_dir.join(artifact);
        debug!(path = %path.display(), "reading artifact from filesystem");

        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|e| BridgeError::fetch(artifact, format!("{e} ({})", path.display())))?;

        Ok(ArtifactPayload {
            bytes,
            source: path.display().to_string(),
            media_type: WASM_MEDIA_TYPE.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reads_artifact_bytes() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("cow.wasm"), b"\0asm").unwrap();

        let loader = FileLoader::new(dir.path().to_path_buf());
        let payload = loader.fetch("cow.wasm").await.unwrap();

        assert_eq!(payload.bytes, b"\0asm");
        assert_eq!(payload.media_type, WASM_MEDIA_TYPE);
        assert!(payload.source.ends_with("cow.wasm"));
    }

    #[tokio::test]
    async fn test_missing_file_is_fetch_error() {
        let dir = tempfile::tempdir().unwrap();
        let loader = FileLoader::new(dir.path().to_path_buf());

        let err = loader.fetch("nope.wasm").await.unwrap_err();
        assert!(matches!(err, BridgeError::Fetch { ref artifact, .. } if artifact == "nope.wasm"));
    }
}
