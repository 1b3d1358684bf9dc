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

//! Artifact fetch strategies
//!
//! Resolving an artifact name into bytes depends on where the artifact
//! lives. Both strategies converge on the same [`ArtifactPayload`] shape so
//! the bridge has exactly one compilation path:
//! - [`HttpLoader`]: GET the artifact from a remote base URL
//! - [`FileLoader`]: read the artifact from a local base directory
//!
//! The strategy is selected once, at startup, and injected into the bridge
//! ([`loader_for`] picks by URL scheme).

pub mod file;
pub mod http;

pub use file::FileLoader;
pub use http::HttpLoader;

use crate::error::BridgeResult;
use async_trait::async_trait;
use std::sync::Arc;

/// Media type tag attached to fetched artifacts
pub const WASM_MEDIA_TYPE: &str = "application/wasm";

/// A fetched artifact: raw bytes plus where they came from
#[derive(Debug)]
pub struct ArtifactPayload {
    /// Raw component bytes
    pub bytes: Vec<u8>,

    /// Resolved source location (URL or filesystem path)
    pub source: String,

    /// Media type of the payload
    pub media_type: String,
}

/// Fetch strategy: artifact name in, binary payload out
///
/// Implementations must normalize every failure (network, HTTP status,
/// missing file) to [`crate::BridgeError::Fetch`] with the artifact
/// identifier attached.
#[async_trait]
pub trait ArtifactLoader: Send + Sync {
    /// Resolve the named artifact into its raw bytes
    async fn fetch(&self, artifact: &str) -> BridgeResult<ArtifactPayload>;
}

/// Select a fetch strategy for a base location
///
/// An `http://` or `https://` base gets the network strategy; anything else
/// is treated as a local directory.
pub fn loader_for(base: &str) -> Arc<dyn ArtifactLoader> {
    if is_remote(base) {
        Arc::new(HttpLoader::new(base.to_string()))
    } else {
        Arc::new(FileLoader::new(base.into()))
    }
}

fn is_remote(base: &str) -> bool {
    base.starts_with("http://") || base.starts_with("https://")
}
