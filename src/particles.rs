use crate::constants::{CLASS_PARTICLE, PARTICLES_ID};
use folio_core::constants::PARTICLE_COUNT;
use folio_core::particles::ParticleField;
use web_sys as web;

pub fn spawn_particles(document: &web::Document) -> anyhow::Result<()> {
    let Some(container) = document.get_element_by_id(PARTICLES_ID) else {
        return Ok(());
    };
    let field = ParticleField::generate(&mut rand::thread_rng(), PARTICLE_COUNT);

    for spec in field.particles() {
        let el = document
            .create_element("div")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        el.set_class_name(CLASS_PARTICLE);
        el.set_attribute("style", &spec.css_text())
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        container
            .append_child(&el)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    }

    let style = document
        .create_element("style")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    style.set_text_content(Some(&field.keyframes_css()));
    if let Some(head) = document.head() {
        head.append_child(&style)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    }
    log::debug!("[particles] spawned {}", field.particles().len());
    Ok(())
}
