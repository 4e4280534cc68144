use crate::constants::{ATTR_THEME, THEME_TOGGLE_ID};
use crate::dom;
use folio_core::theme::{load_theme, toggle_theme, PreferenceStore, Theme};
use std::cell::Cell;
use std::rc::Rc;
use web_sys as web;

/// `localStorage`, when the browser grants it.
struct LocalStore(Option<web::Storage>);

impl LocalStore {
    fn open() -> Self {
        Self(web::window().and_then(|w| w.local_storage().ok().flatten()))
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.0.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> bool {
        self.0
            .as_ref()
            .is_some_and(|s| s.set_item(key, value).is_ok())
    }
}

fn apply_theme(document: &web::Document, theme: Theme) {
    if let Some(root) = document.document_element() {
        _ = root.set_attribute(ATTR_THEME, theme.as_str());
    }
}

pub fn wire_theme_toggle(document: &web::Document) {
    if document.get_element_by_id(THEME_TOGGLE_ID).is_none() {
        return;
    }
    let mut store = LocalStore::open();
    let current = Rc::new(Cell::new(load_theme(&store)));
    apply_theme(document, current.get());

    let doc = document.clone();
    dom::add_click_listener(document, THEME_TOGGLE_ID, move || {
        let next = toggle_theme(current.get(), &mut store);
        current.set(next);
        apply_theme(&doc, next);
        log::info!("[theme] {}", next.as_str());
    });
}
