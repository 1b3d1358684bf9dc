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

//! Cowsay component bridge
//!
//! Loads a precompiled WASM component and binds host capabilities into it,
//! returning a typed handle to the component's exports. The component itself
//! is an opaque black box exposing `cow.say(text, variant?) -> string` and
//! importing a single `host.log(message)` callback.
//!
//! The artifact can live on a remote HTTP location or on the local
//! filesystem; both fetch strategies produce one payload shape, so the
//! bridge has exactly one compile/instantiate path regardless of where the
//! bytes came from.
//!
//! # Example
//!
//! ```rust,ignore
//! use cowsay_bridge::{loader_for, CowsayBridge, HostCapabilities};
//!
//! #[tokio::main]
//! async fn main() {
//!     let loader = loader_for("./wasm");
//!     let bridge = CowsayBridge::new().unwrap();
//!     let caps = HostCapabilities::new().with_log(|msg| println!("[cow] {msg}"));
//!
//!     let mut cow = bridge
//!         .instantiate(loader.as_ref(), "cowsay.wat", caps)
//!         .await
//!         .unwrap();
//!
//!     println!("{}", cow.say("Hello Wasm COWponents!", None).await.unwrap());
//!     println!("{}", cow.say("Hello Wasm OWLponents!", Some("owl")).await.unwrap());
//! }
//! ```

pub mod bridge;
pub mod capabilities;
pub mod error;
pub mod instance;
pub mod loader;

// Re-exports
pub use bridge::CowsayBridge;
pub use capabilities::{HostCapabilities, HostState, LogFn, HOST_GROUP};
pub use error::{BridgeError, BridgeResult};
pub use instance::Cowsay;
pub use loader::{loader_for, ArtifactLoader, ArtifactPayload, FileLoader, HttpLoader, WASM_MEDIA_TYPE};
