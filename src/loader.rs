use crate::constants::{CLASS_HIDDEN, LOADER_ID};
use web_sys as web;

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(LOADER_ID) {
        _ = el.class_list().add_1(CLASS_HIDDEN);
    }
}
