use crate::constants::*;
use crate::dom;
use folio_core::constants::{
    COUNTER_TICK_MS, COUNTER_VISIBILITY_THRESHOLD, LAZY_IMAGE_VISIBILITY_THRESHOLD,
};
use folio_core::counter::{parse_counter_target, CounterRamp, CounterSpec};
use folio_core::visibility::VisibilityTrigger;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Observe `elements` and call `on_reveal` once per element the first time
/// it is at least `threshold` visible. The element is unobserved right away.
fn observe_once<V: 'static>(
    prefix: &str,
    elements: Vec<(web::Element, V)>,
    threshold: f64,
    mut on_reveal: impl FnMut(web::Element, V) + 'static,
) -> anyhow::Result<()> {
    let mut trigger = VisibilityTrigger::<String, V>::new(threshold);
    let mut targets = Vec::with_capacity(elements.len());
    for (i, (el, value)) in elements.into_iter().enumerate() {
        let key = format!("{prefix}-{i}");
        el.set_attribute(ATTR_OBSERVE_KEY, &key)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        trigger.observe(key, value);
        targets.push(el);
    }
    let trigger = Rc::new(RefCell::new(trigger));

    let cb = Closure::<dyn FnMut(js_sys::Array, web::IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(key) = target.get_attribute(ATTR_OBSERVE_KEY) else {
                    continue;
                };
                let hit = trigger.borrow_mut().on_intersection(
                    key.as_str(),
                    entry.intersection_ratio(),
                    entry.is_intersecting(),
                );
                if let Some(value) = hit {
                    observer.unobserve(&target);
                    on_reveal(target, value);
                }
            }
        },
    );

    let opts = web::IntersectionObserverInit::new();
    opts.set_threshold(&JsValue::from_f64(threshold));
    let observer = web::IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &opts)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    cb.forget();

    for el in &targets {
        observer.observe(el);
    }
    Ok(())
}

fn run_ramp(el: web::Element, mut ramp: CounterRamp) {
    let Some(value) = ramp.next() else {
        return;
    };
    el.set_text_content(Some(&value.to_string()));
    if let Err(e) = dom::set_timeout(COUNTER_TICK_MS, move || run_ramp(el, ramp)) {
        log::warn!("[counter] timer: {e}");
    }
}

pub fn wire_counters(document: &web::Document) -> anyhow::Result<()> {
    let counters: Vec<(web::Element, CounterSpec)> = dom::query_all(document, COUNTERS)
        .into_iter()
        .filter_map(|el| {
            let target = el
                .get_attribute(ATTR_COUNT)
                .as_deref()
                .and_then(parse_counter_target)?;
            Some((el, CounterSpec::new(target)))
        })
        .collect();
    if counters.is_empty() {
        return Ok(());
    }
    log::debug!("[counter] observing {}", counters.len());

    observe_once(
        "counter",
        counters,
        COUNTER_VISIBILITY_THRESHOLD,
        |el, mut spec| {
            if let Some(ramp) = spec.fire() {
                run_ramp(el, ramp);
            }
        },
    )
}

pub fn wire_lazy_images(document: &web::Document) -> anyhow::Result<()> {
    let images: Vec<(web::Element, String)> = dom::query_all(document, LAZY_IMAGES)
        .into_iter()
        .filter_map(|el| {
            let src = el.get_attribute(ATTR_LAZY_SRC)?;
            Some((el, src))
        })
        .collect();
    if images.is_empty() {
        return Ok(());
    }

    observe_once(
        "lazy",
        images,
        LAZY_IMAGE_VISIBILITY_THRESHOLD,
        |img, src| {
            _ = img.set_attribute("src", &src);
            _ = img.remove_attribute(ATTR_LAZY_SRC);
        },
    )
}
