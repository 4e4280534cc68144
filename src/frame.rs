use crate::constants::{CURSOR_FOLLOWER_ID, CURSOR_ID};
use crate::dom;
use crate::events;
use folio_core::{CursorAnimator, CursorFrame, FrameLoop, LoopHandle, PointerState};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub frame_loop: FrameLoop,
    pub pointer: Rc<RefCell<PointerState>>,
    pub cursor: web::HtmlElement,
    pub follower: web::HtmlElement,
}

impl FrameContext {
    /// Advance the cursor one frame. Returns false once the loop is cancelled.
    pub fn frame(&mut self) -> bool {
        let target = self.pointer.borrow().target();
        match self.frame_loop.tick(target) {
            Some(f) => {
                self.write(&f);
                true
            }
            None => false,
        }
    }

    fn write(&self, f: &CursorFrame) {
        place(&self.cursor, f.lead);
        place(&self.follower, f.trail);
    }
}

#[inline]
fn place(el: &web::HtmlElement, pos: Vec2) {
    let style = el.style();
    _ = style.set_property("left", &format!("{}px", pos.x));
    _ = style.set_property("top", &format!("{}px", pos.y));
}

/// Wire the two-part cursor: pointer tracking, hover state and the frame
/// loop. Pages without the cursor elements get none of it.
pub fn wire_cursor(document: &web::Document) -> Option<LoopHandle> {
    let cursor = dom::html_by_id(document, CURSOR_ID)?;
    let follower = dom::html_by_id(document, CURSOR_FOLLOWER_ID)?;

    let pointer = Rc::new(RefCell::new(PointerState::default()));
    events::wire_pointer_tracker(document, pointer.clone());
    events::wire_cursor_hover(document, &follower);

    let handle = start_loop(FrameContext {
        frame_loop: FrameLoop::new(CursorAnimator::default()),
        pointer,
        cursor,
        follower,
    });

    if let Some(w) = web::window() {
        let on_teardown = handle.clone();
        dom::listen(&w, "pagehide", move |ev: web::PageTransitionEvent| {
            if on_teardown.on_page_hide(ev.persisted()) {
                log::debug!("[cursor] page discarded, stopping loop");
            }
        });
    }
    Some(handle)
}

pub fn start_loop(ctx: FrameContext) -> LoopHandle {
    let handle = ctx.frame_loop.handle();
    let ctx = Rc::new(RefCell::new(ctx));
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !ctx.borrow_mut().frame() {
            log::info!(
                "[cursor] loop stopped after {} frames",
                ctx.borrow().frame_loop.frames()
            );
            return;
        }
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
    handle
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
