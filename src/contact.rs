use crate::constants::*;
use crate::dom;
use folio_core::contact::{
    ContactRelay, ContactSubmission, RelayEffect, RelayEvent, SubmitLabel,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

struct ContactForm {
    form: web::HtmlFormElement,
    button: Option<web::HtmlButtonElement>,
    original_label: String,
    relay: ContactRelay,
}

impl ContactForm {
    fn show_label(&self, label: SubmitLabel) {
        let Some(btn) = &self.button else {
            return;
        };
        let (icon, background) = match label {
            SubmitLabel::Sending => (ICON_SENDING, None),
            SubmitLabel::Sent => (ICON_SENT, Some(SUBMIT_BG_SENT)),
            SubmitLabel::Error => (ICON_ERROR, Some(SUBMIT_BG_ERROR)),
        };
        btn.set_inner_html(&format!(
            "<span>{}</span><i class=\"{}\"></i>",
            label.text(),
            icon
        ));
        if let Some(bg) = background {
            _ = btn.style().set_property("background", bg);
        }
    }

    fn restore(&self) {
        if let Some(btn) = &self.button {
            btn.set_inner_html(&self.original_label);
            _ = btn.style().remove_property("background");
            btn.set_disabled(false);
        }
    }
}

fn read_fields(form: &web::HtmlFormElement) -> folio_core::Result<ContactSubmission> {
    let data = web::FormData::new_with_form(form).ok();
    ContactSubmission::from_fields(|name| data.as_ref()?.get(name).as_string())
}

fn perform(ctx: &Rc<RefCell<ContactForm>>, effects: Vec<RelayEffect>) {
    for fx in effects {
        match fx {
            RelayEffect::DisableSubmit => {
                if let Some(btn) = &ctx.borrow().button {
                    btn.set_disabled(true);
                }
            }
            RelayEffect::ShowLabel(label) => ctx.borrow().show_label(label),
            RelayEffect::Schedule { event, after_ms } => {
                let c = ctx.clone();
                let res = dom::set_timeout(after_ms, move || {
                    let next = c.borrow_mut().relay.advance(event);
                    match next {
                        Ok(fx) => perform(&c, fx),
                        Err(e) => log::warn!("[contact] {e}"),
                    }
                });
                if let Err(e) = res {
                    log::error!("[contact] cannot schedule {:?}: {e}", event);
                    let recovered = {
                        let mut form = ctx.borrow_mut();
                        form.relay
                            .fail()
                            .or_else(|_| form.relay.advance(RelayEvent::ResetDue))
                    };
                    match recovered {
                        Ok(fx) => perform(ctx, fx),
                        Err(e) => log::warn!("[contact] cannot recover relay: {e}"),
                    }
                }
            }
            RelayEffect::OpenLink(url) => {
                let opened = web::window()
                    .map(|w| w.open_with_url_and_target(&url, "_blank"))
                    .transpose();
                if let Err(e) = opened {
                    log::warn!("[contact] window.open failed: {:?}", e);
                }
            }
            RelayEffect::ResetForm => ctx.borrow().form.reset(),
            RelayEffect::RestoreSubmit => ctx.borrow().restore(),
        }
    }
}

pub fn wire_contact_form(document: &web::Document) -> anyhow::Result<()> {
    let Some(form) = document.get_element_by_id(CONTACT_FORM_ID) else {
        return Ok(());
    };
    let form = form
        .dyn_into::<web::HtmlFormElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let button = form
        .query_selector(SUBMIT_BUTTON)
        .ok()
        .flatten()
        .and_then(|b| b.dyn_into::<web::HtmlButtonElement>().ok());
    let original_label = button.as_ref().map(|b| b.inner_html()).unwrap_or_default();

    let ctx = Rc::new(RefCell::new(ContactForm {
        form: form.clone(),
        button,
        original_label,
        relay: ContactRelay::default(),
    }));

    dom::listen(&form, "submit", move |ev: web::Event| {
        ev.prevent_default();
        let fields = read_fields(&ctx.borrow().form);
        let started = ctx.borrow_mut().relay.submit(fields);
        match started {
            Ok(fx) => perform(&ctx, fx),
            Err(e) => log::info!("[contact] {e}"),
        }
    });
    Ok(())
}
