use crate::constants::{CLASS_HOVERING, HOVER_TARGETS, MAGNETIC_BUTTONS, TILT_CARDS};
use crate::dom;
use folio_core::effects::{self, Rect};
use folio_core::{CursorHover, PointerState};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[inline]
fn client_pos(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

#[inline]
fn element_rect(el: &web::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(
        r.left() as f32,
        r.top() as f32,
        r.width() as f32,
        r.height() as f32,
    )
}

/// Record every pointer move; the frame loop reads the latest sample.
pub fn wire_pointer_tracker(document: &web::Document, pointer: Rc<RefCell<PointerState>>) {
    dom::listen(document, "pointermove", move |ev: web::PointerEvent| {
        let p = client_pos(&ev);
        pointer.borrow_mut().record(p.x, p.y);
    });
}

pub fn wire_cursor_hover(document: &web::Document, follower: &web::HtmlElement) {
    let hover = Rc::new(RefCell::new(CursorHover::default()));
    let targets = dom::query_all(document, HOVER_TARGETS);
    log::debug!("[cursor] {} hover targets", targets.len());

    for el in &targets {
        let (hover_in, follower_in) = (hover.clone(), follower.clone());
        dom::listen(el, "mouseenter", move |_: web::MouseEvent| {
            let on = hover_in.borrow_mut().enter();
            dom::set_class(&follower_in, CLASS_HOVERING, on);
        });

        let (hover_out, follower_out) = (hover.clone(), follower.clone());
        dom::listen(el, "mouseleave", move |_: web::MouseEvent| {
            let on = hover_out.borrow_mut().leave();
            dom::set_class(&follower_out, CLASS_HOVERING, on);
        });
    }
}

pub fn wire_magnetic_buttons(document: &web::Document) {
    for btn in dom::query_all(document, MAGNETIC_BUTTONS) {
        let target = btn.clone();
        dom::listen(&btn, "mousemove", move |ev: web::MouseEvent| {
            let offset = effects::magnetic_offset(client_pos(&ev), element_rect(&target));
            dom::set_style(&target, "transform", &effects::magnetic_transform(offset));
        });

        let target = btn.clone();
        dom::listen(&btn, "mouseleave", move |_: web::MouseEvent| {
            dom::set_style(&target, "transform", "");
        });
    }
}

pub fn wire_tilt_cards(document: &web::Document) {
    for card in dom::query_all(document, TILT_CARDS) {
        let target = card.clone();
        dom::listen(&card, "mousemove", move |ev: web::MouseEvent| {
            let t = effects::tilt(client_pos(&ev), element_rect(&target));
            dom::set_style(&target, "transform", &t.css_transform());
        });

        let target = card.clone();
        dom::listen(&card, "mouseleave", move |_: web::MouseEvent| {
            dom::set_style(&target, "transform", "");
        });
    }
}
