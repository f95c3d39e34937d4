//! CEP host bridge backed by `window.__adobe_cep__.evalScript`.

use js_sys::{Function, Object, Promise, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen_futures::JsFuture;

use super::HostBridge;
use crate::config::bridge::CEP_GLOBAL;
use crate::utils::dom;

/// Bridge to the After Effects scripting host.
///
/// Outside a CEP panel the global is missing and every call resolves with
/// `None`, which decodes as [`BridgeError::Unavailable`].
///
/// [`BridgeError::Unavailable`]: crate::core::error::BridgeError::Unavailable
#[derive(Clone, Copy, Debug, Default)]
pub struct CepBridge;

impl CepBridge {
    pub fn new() -> Self {
        Self
    }
}

/// Get the CEP interface object injected by the host.
fn get_cep() -> Option<Object> {
    let window = dom::window()?;
    Reflect::get(&window, &CEP_GLOBAL.into())
        .ok()
        .and_then(|v| v.dyn_into::<Object>().ok())
}

impl HostBridge for CepBridge {
    async fn eval_script(&self, script: String) -> Option<String> {
        let cep = get_cep()?;
        let eval = Reflect::get(&cep, &"evalScript".into())
            .ok()?
            .dyn_into::<Function>()
            .ok()?;

        // Adapt the callback API to a promise
        let promise = Promise::new(&mut |resolve: Function, _reject: Function| {
            let on_result = resolve.clone();
            let callback = Closure::once_into_js(move |result: JsValue| {
                let _ = on_result.call1(&JsValue::NULL, &result);
            });
            if eval
                .call2(&cep, &JsValue::from_str(&script), &callback)
                .is_err()
            {
                let _ = resolve.call1(&JsValue::NULL, &JsValue::UNDEFINED);
            }
        });

        JsFuture::from(promise).await.ok()?.as_string()
    }
}
