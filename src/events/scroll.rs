use crate::constants::*;
use crate::dom;
use folio_core::effects;
use folio_core::nav::{NavigationState, SectionBounds};
use folio_core::rate_limit::{Debouncer, Throttle};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Scroll-side half of the navigation controller.
///
/// Scroll events are coalesced with a debouncer; section geometry is
/// re-measured at most once per throttle window since it forces layout.
struct NavScroll {
    nav: Rc<RefCell<NavigationState>>,
    navbar: Option<web::Element>,
    back_to_top: Option<web::Element>,
    links: Vec<web::Element>,
    sections: Vec<web::HtmlElement>,
    bounds: Vec<SectionBounds>,
    debounce: Debouncer<f64>,
    remeasure: Throttle,
}

impl NavScroll {
    fn measure(&mut self) {
        self.bounds = self
            .sections
            .iter()
            .map(|s| {
                SectionBounds::new(
                    s.id(),
                    f64::from(s.offset_top()),
                    f64::from(s.offset_height()),
                )
            })
            .collect();
    }

    fn apply(&mut self, offset: f64, now: f64) {
        if self.remeasure.try_call(now) {
            self.measure();
        }
        let update = self.nav.borrow_mut().on_scroll(offset, &self.bounds);
        if let Some(el) = &self.navbar {
            dom::set_class(el, CLASS_SCROLLED, update.scrolled);
        }
        if let Some(el) = &self.back_to_top {
            dom::set_class(el, CLASS_VISIBLE, update.back_to_top_visible);
        }
        let nav = self.nav.borrow();
        for link in &self.links {
            let href = link.get_attribute("href").unwrap_or_default();
            dom::set_class(link, CLASS_ACTIVE, nav.link_is_active(&href));
        }
    }
}

pub fn wire_nav_scroll(document: &web::Document, nav: Rc<RefCell<NavigationState>>) {
    let sections = dom::query_all(document, SECTIONS)
        .into_iter()
        .filter_map(|el| el.dyn_into::<web::HtmlElement>().ok())
        .collect();
    let mut state = NavScroll {
        nav,
        navbar: document.get_element_by_id(NAVBAR_ID),
        back_to_top: document.get_element_by_id(BACK_TO_TOP_ID),
        links: dom::query_all(document, NAV_LINKS),
        sections,
        bounds: Vec::new(),
        debounce: Debouncer::default(),
        remeasure: Throttle::default(),
    };
    state.measure();
    log::debug!("[nav] tracking {} sections", state.bounds.len());
    let state = Rc::new(RefCell::new(state));

    let Some(window) = web::window() else {
        return;
    };
    dom::listen(&window, "scroll", move |_: web::Event| {
        let wait = {
            let mut s = state.borrow_mut();
            let now = dom::now_ms();
            s.debounce.call(now, dom::scroll_y()) - now
        };
        let state = state.clone();
        let res = dom::set_timeout(wait.max(0.0).ceil() as u32 + 1, move || {
            let now = dom::now_ms();
            let mut s = state.borrow_mut();
            if let Some(offset) = s.debounce.poll(now) {
                s.apply(offset, now);
            }
        });
        if let Err(e) = res {
            log::warn!("[nav] scroll timer: {e}");
        }
    });
}

/// Background orbs drift at increasing speeds as the page scrolls.
pub fn wire_parallax(document: &web::Document) {
    let orbs = dom::query_all(document, GRADIENT_ORBS);
    if orbs.is_empty() {
        return;
    }
    let Some(window) = web::window() else {
        return;
    };
    dom::listen(&window, "scroll", move |_: web::Event| {
        let scrolled = dom::scroll_y();
        for (i, orb) in orbs.iter().enumerate() {
            dom::set_style(orb, "transform", &effects::parallax_transform(scrolled, i));
        }
    });
}
