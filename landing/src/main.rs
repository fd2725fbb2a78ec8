// ArendaPrime landing page: browser entry point
// Mounts the live page into #root; everything else lives in arenda-site.

use arenda_site::content::Content;
use wasm_bindgen::JsValue;

fn main() {
    console_error_panic_hook::set_once();

    if let Err(err) = arenda_site::mount(Content::default()) {
        web_sys::console::error_1(&JsValue::from_str(&format!("[arenda] {err}")));
    }
}
