use wasm_bindgen::prelude::*;

use crate::web;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    if console_log::init_with_level(log::Level::Trace).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }

    // The page config decides how chatty the console is
    let config = web::load_config();
    log::set_max_level(config.log_level.to_level_filter());
    log::info!("🚀 {} site starting", config.brand);

    if let Err(e) = web::when_ready(config) {
        log::error!("❌ Site failed to start: {}", e);
    }
}
