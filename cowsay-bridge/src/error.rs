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

//! Bridge error types
//!
//! One variant per pipeline stage. No stage recovers locally: a failure at
//! any stage aborts the pipeline and surfaces here unmodified.

use thiserror::Error;

/// Result type for bridge operations
pub type BridgeResult<T> = Result<T, BridgeError>;

/// Errors that can occur while loading and instantiating a component
#[derive(Debug, Error)]
pub enum BridgeError {
    /// The artifact could not be located or read
    #[error("Artifact fetch failed for `{artifact}`: {reason}")]
    Fetch { artifact: String, reason: String },

    /// The fetched bytes are not a valid component
    #[error("Component compilation failed: {0}")]
    Compile(String),

    /// The component's required imports are not satisfied by the supplied
    /// capability set, or an import is not recognized at all
    #[error("Host linking failed: {0}")]
    Link(String),

    /// Instantiation of a compiled, linkable component failed
    #[error("Component instantiation failed: {0}")]
    Instantiation(String),

    /// The instance does not expose an expected export
    #[error("Component export not found: {0}")]
    MissingExport(String),

    /// A call into an instantiated component trapped or failed
    #[error("Component call failed: {0}")]
    Execution(String),

    /// The WASM engine itself could not be constructed
    #[error("Engine setup failed: {0}")]
    Engine(String),
}

impl BridgeError {
    /// Build a fetch error with the artifact identifier attached
    pub fn fetch(artifact: impl Into<String>, reason: impl ToString) -> Self {
        BridgeError::Fetch {
            artifact: artifact.into(),
            reason: reason.to_string(),
        }
    }
}
