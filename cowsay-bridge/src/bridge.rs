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

//! Instantiation bridge
//!
//! Runs the fetch → compile → link → instantiate pipeline for one component
//! instantiation and hands the typed export handle to the caller. Each call
//! is a fresh pipeline: nothing is cached or shared between calls except the
//! immutable engine.

use crate::capabilities::{HostCapabilities, HostState, HOST_GROUP};
use crate::error::{BridgeError, BridgeResult};
use crate::instance::Cowsay;
use crate::loader::ArtifactLoader;
use tracing::debug;
use wasmtime::component::{Component, Linker};
use wasmtime::{Config, Engine, Store, StoreContextMut};

/// Loads the cowsay component and binds host capabilities into it
///
/// Owns the wasmtime engine; everything per-instantiation (store, linker,
/// instance) is created inside [`CowsayBridge::instantiate`] and either
/// handed to the caller or dropped on failure.
pub struct CowsayBridge {
    engine: Engine,
}

impl CowsayBridge {
    /// Create a bridge with component-model and async execution enabled
    pub fn new() -> BridgeResult<Self> {
        let mut config = Config::new();
        config.async_support(true);
        config.wasm_component_model(true);

        let engine = Engine::new(&config).map_err(|e| BridgeError::Engine(e.to_string()))?;
        Ok(Self { engine })
    }

    /// Fetch, compile, and instantiate the named artifact
    ///
    /// The fetch strategy is injected so it is swappable and testable. The
    /// supplied capabilities become the component's callable imports; the
    /// returned [`Cowsay`] handle is exclusively owned by the caller.
    pub async fn instantiate(
        &self,
        loader: &dyn ArtifactLoader,
        artifact: &str,
        capabilities: HostCapabilities,
    ) -> BridgeResult<Cowsay> {
        let payload = loader.fetch(artifact).await?;
        debug!(source = %payload.source, bytes = payload.bytes.len(), "artifact fetched");

        let component = Component::new(&self.engine, &payload.bytes)
            .map_err(|e| BridgeError::Compile(e.to_string()))?;

        self.check_imports(&component, &capabilities)?;

        let mut linker: Linker<HostState> = Linker::new(&self.engine);
        if capabilities.has_log() {
            let mut host = linker
                .instance(HOST_GROUP)
                .map_err(|e| BridgeError::Link(e.to_string()))?;
            host.func_wrap(
                "log",
                |store: StoreContextMut<'_, HostState>, (message,): (String,)| -> wasmtime::Result<()> {
                    if let Some(log) = store.data().log() {
                        log(&message);
                    }
                    Ok(())
                },
            )
            .map_err(|e| BridgeError::Link(e.to_string()))?;
        }

        let mut store = Store::new(&self.engine, HostState::new(capabilities));
        let instance = linker
            .instantiate_async(&mut store, &component)
            .await
            .map_err(|e| BridgeError::Instantiation(e.to_string()))?;
        debug!(source = %payload.source, "component instantiated");

        Cowsay::from_instance(store, instance)
    }

    /// Check the component's imports against the supplied capability set
    ///
    /// A required group that was not supplied, or an import the bridge does
    /// not recognize at all, is a link failure here rather than an opaque
    /// instantiation error later.
    fn check_imports(
        &self,
        component: &Component,
        capabilities: &HostCapabilities,
    ) -> BridgeResult<()> {
        let ty = component.component_type();
        for (name, _item) in ty.imports(&self.engine) {
            match name {
                HOST_GROUP => {
                    if !capabilities.has_log() {
                        return Err(BridgeError::Link(format!(
                            "component requires capability group `{name}` but none was supplied"
                        )));
                    }
                }
                other => {
                    return Err(BridgeError::Link(format!(
                        "component requires unrecognized import `{other}`"
                    )));
                }
            }
        }
        Ok(())
    }

    /// The shared engine
    pub fn engine(&self) -> &Engine {
        &self.engine
    }
}
