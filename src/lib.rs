#![cfg(target_arch = "wasm32")]
use folio_core::constants::{DEFERRED_EFFECTS_DELAY_MS, LOADER_HIDE_DELAY_MS};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod contact;
mod counters;
mod dom;
mod events;
mod frame;
mod gallery;
mod loader;
mod navigation;
mod particles;
mod theme;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("Welcome to Kas Portfolio!");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    if document.ready_state() == "loading" {
        let doc = document.clone();
        dom::listen(&document, "DOMContentLoaded", move |_: web::Event| {
            init_or_log(&doc)
        });
    } else {
        init_or_log(&document);
    }
    Ok(())
}

fn init_or_log(document: &web::Document) {
    if let Err(e) = init(document) {
        log::error!("init error: {:?}", e);
    }
}

fn init(document: &web::Document) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;

    wire_loader(&window, document);
    if frame::wire_cursor(document).is_none() {
        log::debug!("[cursor] no cursor elements, skipping");
    }
    navigation::wire_navigation(document);
    events::wire_parallax(document);
    gallery::wire_project_filters(document);
    theme::wire_theme_toggle(document);

    // Each of these is independent; one failing must not stop the rest.
    for (name, res) in [
        ("counters", counters::wire_counters(document)),
        ("contact", contact::wire_contact_form(document)),
        ("particles", particles::spawn_particles(document)),
    ] {
        if let Err(e) = res {
            log::error!("[{name}] {:?}", e);
        }
    }
    Ok(())
}

/// Hide the loader shortly after `load`, then wire the effects that only
/// matter once the page is fully laid out.
fn wire_loader(window: &web::Window, document: &web::Document) {
    let doc = document.clone();
    let on_load = move || {
        let hide_doc = doc.clone();
        if let Err(e) = dom::set_timeout(LOADER_HIDE_DELAY_MS, move || loader::hide(&hide_doc)) {
            log::warn!("[loader] {e}");
        }
        let fx_doc = doc.clone();
        if let Err(e) = dom::set_timeout(DEFERRED_EFFECTS_DELAY_MS, move || {
            wire_deferred_effects(&fx_doc)
        }) {
            log::warn!("[effects] {e}");
        }
    };

    if document.ready_state() == "complete" {
        on_load();
    } else {
        let mut on_load = Some(on_load);
        dom::listen(window, "load", move |_: web::Event| {
            if let Some(f) = on_load.take() {
                f();
            }
        });
    }
}

fn wire_deferred_effects(document: &web::Document) {
    events::wire_magnetic_buttons(document);
    events::wire_tilt_cards(document);
    if let Err(e) = counters::wire_lazy_images(document) {
        log::error!("[lazy-images] {:?}", e);
    }
}
