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

//! Typed handle over a live component instance
//!
//! Wraps the store and the resolved `cow.say` export. The handle is the
//! sole owner of the instance; dropping it drops the instance.

use crate::capabilities::HostState;
use crate::error::{BridgeError, BridgeResult};
use std::fmt;
use wasmtime::component::{Instance, TypedFunc};
use wasmtime::Store;

/// Exported interface instance name
const COW_INSTANCE: &str = "cow";

/// Exported rendering function name
const SAY_FUNC: &str = "say";

/// A live cowsay component instance
pub struct Cowsay {
    store: Store<HostState>,
    say: TypedFunc<(String, Option<String>), (String,)>,
}

impl fmt::Debug for Cowsay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cowsay")
            .field("capabilities", self.store.data().capabilities())
            .finish()
    }
}

impl Cowsay {
    /// Resolve the `cow.say` export of a freshly instantiated component
    pub(crate) fn from_instance(
        mut store: Store<HostState>,
        instance: Instance,
    ) -> BridgeResult<Self> {
        let cow = instance
            .get_export(&mut store, None, COW_INSTANCE)
            .ok_or_else(|| BridgeError::MissingExport(COW_INSTANCE.to_string()))?;
        let say_index = instance
            .get_export(&mut store, Some(&cow), SAY_FUNC)
            .ok_or_else(|| BridgeError::MissingExport(format!("{COW_INSTANCE}.{SAY_FUNC}")))?;
        let say = instance
            .get_typed_func::<(String, Option<String>), (String,)>(&mut store, &say_index)
            .map_err(|e| BridgeError::MissingExport(format!("{COW_INSTANCE}.{SAY_FUNC}: {e}")))?;

        Ok(Self { store, say })
    }

    /// Render `text` through the component
    ///
    /// `variant` selects a named rendering style; it is passed through to
    /// the component unchecked, and `None` selects the default style.
    pub async fn say(&mut self, text: &str, variant: Option<&str>) -> BridgeResult<String> {
        let params = (text.to_string(), variant.map(str::to_string));
        let (rendered,) = self
            .say
            .call_async(&mut self.store, params)
            .await
            .map_err(|e| BridgeError::Execution(e.to_string()))?;
        self.say
            .post_return_async(&mut self.store)
            .await
            .map_err(|e| BridgeError::Execution(e.to_string()))?;

        Ok(rendered)
    }
}
