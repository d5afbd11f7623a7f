//! WASM bindings for lango-identity
//!
//! Exposes the device identifier to browser code, backed by
//! `window.localStorage` and `crypto.getRandomValues`.

#[cfg(feature = "wasm")]
pub use browser::{generate_user_id, get_user_id, BrowserStorage};

#[cfg(feature = "wasm")]
mod browser {
    use crate::{
        default_source, generate, DeviceIdentity, IdentityError, KeyValueStorage, NullStorage,
        Result,
    };
    use wasm_bindgen::prelude::*;

    /// `window.localStorage` as a [`KeyValueStorage`]
    pub struct BrowserStorage {
        inner: web_sys::Storage,
    }

    impl BrowserStorage {
        /// The page's local storage, if this is a browser window that allows it
        pub fn detect() -> Option<Self> {
            let inner = web_sys::window()?.local_storage().ok()??;
            Some(Self { inner })
        }
    }

    impl KeyValueStorage for BrowserStorage {
        fn get(&self, key: &str) -> Option<String> {
            self.inner.get_item(key).ok().flatten()
        }

        fn set(&self, key: &str, value: &str) -> Result<()> {
            self.inner
                .set_item(key, value)
                .map_err(|e| IdentityError::Storage(format!("{e:?}")))
        }
    }

    fn to_js(err: IdentityError) -> JsValue {
        JsValue::from_str(&err.to_string())
    }

    /// Generate a new identifier without persisting it
    #[wasm_bindgen(js_name = generateUserId)]
    pub fn generate_user_id() -> std::result::Result<String, JsValue> {
        generate(&mut default_source()).map_err(to_js)
    }

    /// Get this device's identifier, creating it on first use
    ///
    /// Returns an empty string outside a browser window.
    #[wasm_bindgen(js_name = getUserId)]
    pub fn get_user_id() -> std::result::Result<String, JsValue> {
        let id = match BrowserStorage::detect() {
            Some(storage) => DeviceIdentity::new(storage, default_source()).get_or_create(),
            None => DeviceIdentity::new(NullStorage, default_source()).get_or_create(),
        };
        id.map_err(to_js)
    }
}
