use crate::constants::*;
use crate::dom;
use crate::events;
use folio_core::nav::{anchor_target, NavigationState};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

struct Menu {
    toggle: Option<web::Element>,
    menu: Option<web::Element>,
    body: Option<web::HtmlElement>,
}

impl Menu {
    fn render(&self, open: bool) {
        for el in [&self.toggle, &self.menu].into_iter().flatten() {
            dom::set_class(el, CLASS_ACTIVE, open);
        }
        if let Some(body) = &self.body {
            _ = body
                .style()
                .set_property("overflow", if open { "hidden" } else { "" });
        }
    }
}

pub fn wire_navigation(document: &web::Document) {
    let nav = Rc::new(RefCell::new(NavigationState::default()));
    let menu = Rc::new(Menu {
        toggle: document.get_element_by_id(NAV_TOGGLE_ID),
        menu: document.get_element_by_id(NAV_MENU_ID),
        body: document.body(),
    });

    events::wire_nav_scroll(document, nav.clone());

    {
        let (nav, menu) = (nav.clone(), menu.clone());
        dom::add_click_listener(document, NAV_TOGGLE_ID, move || {
            let open = nav.borrow_mut().toggle_menu();
            menu.render(open);
        });
    }

    for link in dom::query_all(document, NAV_LINKS) {
        let (nav, menu) = (nav.clone(), menu.clone());
        dom::listen(&link, "click", move |_: web::Event| {
            nav.borrow_mut().close_menu();
            menu.render(false);
        });
    }

    wire_smooth_anchors(document);
}

/// In-page anchors scroll smoothly instead of jumping. Links to ids that do
/// not exist do nothing.
fn wire_smooth_anchors(document: &web::Document) {
    for anchor in dom::query_all(document, ANCHOR_LINKS) {
        let doc = document.clone();
        let link = anchor.clone();
        dom::listen(&anchor, "click", move |ev: web::Event| {
            ev.prevent_default();
            let href = link.get_attribute("href").unwrap_or_default();
            let Some(target) = anchor_target(&href).and_then(|id| doc.get_element_by_id(id))
            else {
                log::debug!("[nav] no target for {href:?}");
                return;
            };
            let opts = web::ScrollIntoViewOptions::new();
            opts.set_behavior(web::ScrollBehavior::Smooth);
            opts.set_block(web::ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&opts);
        });
    }
}
