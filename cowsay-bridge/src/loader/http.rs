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

//! Network fetch strategy
//!
//! Retrieves the artifact from `{base_url}/{artifact}`. Transport failures,
//! non-success statuses, and empty bodies all normalize to a fetch error.

use super::{ArtifactLoader, ArtifactPayload, WASM_MEDIA_TYPE};
use crate::error::{BridgeError, BridgeResult};
use async_trait::async_trait;
use tracing::debug;

/// Fetches artifacts over HTTP(S) relative to a base URL
pub struct HttpLoader {
    client: reqwest::Client,
    base_url: String,
}

impl HttpLoader {
    /// Create a loader rooted at `base_url` (no trailing slash required)
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl ArtifactLoader for HttpLoader {
    async fn fetch(&self, artifact: &str) -> BridgeResult<ArtifactPayload> {
        let url = format!("{}/{artifact}", self.base_url);
        debug!(%url, "fetching artifact over http");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| BridgeError::fetch(artifact, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BridgeError::fetch(
                artifact,
                format!("HTTP status {status} ({url})"),
            ));
        }

        let media_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or(WASM_MEDIA_TYPE)
            .to_string();

        let bytes = response
            .bytes()
            .await
            .map_err(|e| BridgeError::fetch(artifact, e))?;
        if bytes.is_empty() {
            return Err(BridgeError::fetch(artifact, format!("empty response ({url})")));
        }

        Ok(ArtifactPayload {
            bytes: bytes.to_vec(),
            source: url,
            media_type,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unreachable_host_is_fetch_error() {
        // Discard port on localhost: connection is refused immediately.
        let loader = HttpLoader::new("http://127.0.0.1:9".to_string());
        let err = loader.fetch("cowsay.wasm").await.unwrap_err();
        assert!(matches!(err, BridgeError::Fetch { ref artifact, .. } if artifact == "cowsay.wasm"));
    }

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let loader = HttpLoader::new("http://localhost:8080/wasm/".to_string());
        assert_eq!(loader.base_url, "http://localhost:8080/wasm");
    }
}
