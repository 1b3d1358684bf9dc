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

//! Host capabilities injected into the component
//!
//! The capability set is a closed structure: every capability group the
//! bridge knows how to link is enumerated here. A component that imports
//! anything else fails at the link stage instead of deep inside wasmtime.
//!
//! Recognized groups:
//! - `host`: a single `log(message)` callback into the embedding program.

use std::fmt;
use std::sync::Arc;

/// Host-supplied logging callback, invoked by the component
pub type LogFn = Arc<dyn Fn(&str) + Send + Sync>;

/// Name of the capability group carrying the `log` function
pub const HOST_GROUP: &str = "host";

/// The set of host capabilities supplied to one instantiation
///
/// Built by the caller and passed through the bridge verbatim; only the
/// groups actually supplied are registered into the component linker.
#[derive(Clone, Default)]
pub struct HostCapabilities {
    log: Option<LogFn>,
}

impl HostCapabilities {
    /// Create an empty capability set
    pub fn new() -> Self {
        Self::default()
    }

    /// Supply the `host.log` capability
    pub fn with_log(mut self, log: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.log = Some(Arc::new(log));
        self
    }

    /// Whether the `host` group was supplied
    pub fn has_log(&self) -> bool {
        self.log.is_some()
    }

    /// The supplied `log` callback, if any
    pub fn log(&self) -> Option<&LogFn> {
        self.log.as_ref()
    }
}

impl fmt::Debug for HostCapabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostCapabilities")
            .field("log", &self.log.is_some())
            .finish()
    }
}

/// Per-instance state held in the wasmtime store
///
/// Host functions read the granted capabilities from here at call time.
pub struct HostState {
    capabilities: HostCapabilities,
}

impl HostState {
    /// Create the store state for one instantiation
    pub fn new(capabilities: HostCapabilities) -> Self {
        Self { capabilities }
    }

    /// The capabilities granted to this instance
    pub fn capabilities(&self) -> &HostCapabilities {
        &self.capabilities
    }

    /// The `log` callback, if granted
    pub fn log(&self) -> Option<&LogFn> {
        self.capabilities.log()
    }
}
