/// JS bridge to browser extension APIs (see /bridge.js)
use wasm_bindgen::prelude::*;

#[wasm_bindgen(module = "/bridge.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    pub async fn getStorage(key: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    pub async fn setStorage(key: &str, value: JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    pub async fn openUrl(url: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    pub async fn copyText(text: &str) -> Result<(), JsValue>;
}
