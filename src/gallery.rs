use crate::constants::*;
use crate::dom;
use folio_core::constants::CARD_FADE_IN_ANIMATION;
use folio_core::filter::{CardVisibility, FilterState};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

struct Gallery {
    state: FilterState,
    buttons: Vec<web::Element>,
    cards: Vec<web::Element>,
}

impl Gallery {
    fn select(&mut self, category: &str) {
        self.state.select(category);
        for b in &self.buttons {
            let cat = b.get_attribute(ATTR_FILTER).unwrap_or_default();
            dom::set_class(b, CLASS_ACTIVE, self.state.button_is_active(&cat));
        }
        let categories: Vec<String> = self
            .cards
            .iter()
            .map(|c| c.get_attribute(ATTR_CATEGORY).unwrap_or_default())
            .collect();
        let vis = self.state.apply(categories.iter().map(String::as_str));
        for (card, v) in self.cards.iter().zip(vis) {
            match v {
                CardVisibility::Shown => {
                    dom::set_class(card, CLASS_HIDDEN, false);
                    dom::set_style(card, "animation", CARD_FADE_IN_ANIMATION);
                }
                CardVisibility::Hidden => dom::set_class(card, CLASS_HIDDEN, true),
            }
        }
    }
}

pub fn wire_project_filters(document: &web::Document) {
    let buttons = dom::query_all(document, FILTER_BUTTONS);
    if buttons.is_empty() {
        return;
    }
    let gallery = Rc::new(RefCell::new(Gallery {
        state: FilterState::default(),
        buttons: buttons.clone(),
        cards: dom::query_all(document, PROJECT_CARDS),
    }));

    for btn in &buttons {
        let gallery = gallery.clone();
        let category = btn.get_attribute(ATTR_FILTER).unwrap_or_default();
        dom::listen(btn, "click", move |_: web::Event| {
            gallery.borrow_mut().select(&category);
        });
    }
}
