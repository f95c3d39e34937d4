use leptos::prelude::*;
use projects_panel::app::App;
use projects_panel::utils::init_logging;
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();
    init_logging();

    let root = document()
        .get_element_by_id("app")
        .expect("Failed to find #app element")
        .unchecked_into::<web_sys::HtmlElement>();

    mount_to(root, App).forget();
}
