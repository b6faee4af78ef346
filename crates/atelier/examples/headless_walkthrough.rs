//! Headless walkthrough of the customization page.
//!
//! Drives a [`Site`] on an in-memory document and virtual clock, printing
//! the generated CSS and the notifications it raises.
//!
//! Run with: `RUST_LOG=debug cargo run -p atelier --example headless_walkthrough`
//!
//! An optional argument names a TOML config file.

use std::time::Duration;

use atelier::{MemorySurface, Site, SiteConfig, Surface, VirtualScheduler, ids};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => SiteConfig::from_toml_str(&std::fs::read_to_string(path)?)?,
        None => SiteConfig::default(),
    };

    let mut site = Site::new(MemorySurface::customize_page(), VirtualScheduler::new(), config);
    site.start();
    println!("initial:\n{}\n", css(&site));

    site.on_input("primaryColorText", "#2b2d42");
    site.on_change("fontFamily", "Georgia, serif");
    site.on_input("borderRadius", "4");
    site.on_input("shadowIntensity", "40");
    println!("customized:\n{}\n", css(&site));
    println!(
        "shadow label: {}",
        site.surface().text(ids::SHADOW_INTENSITY_LABEL).unwrap_or_default()
    );

    site.on_click("applyCustomization");
    for n in site.notifications().live() {
        println!("[{}] {}", n.kind, n.message);
    }

    site.on_click("resetCustomization");
    site.advance(Duration::from_secs(6));
    println!("\nafter reset:\n{}", css(&site));
    println!("notifications left: {}", site.notifications().len());

    Ok(())
}

fn css(site: &Site<MemorySurface, VirtualScheduler<atelier::Timer>>) -> String {
    site.surface().text(ids::CSS_OUTPUT).unwrap_or_default()
}
