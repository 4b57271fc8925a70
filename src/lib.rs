#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod content;
pub mod motion;
pub mod nav;
#[cfg(feature = "ssr")]
pub mod server;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Warn
    };
    // only fails if a logger is already installed
    _ = console_log::init_with_level(level);
    leptos::mount::hydrate_body(App);

    // until this runs the page is shown in its final, unanimated state
    if let Some(root) = leptos::prelude::document().document_element() {
        _ = root.class_list().add_1(REVEAL_READY_CLASS);
    }
}
