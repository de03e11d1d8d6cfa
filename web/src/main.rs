use dioxus::logger::tracing::{warn, Level};
use dioxus::prelude::*;

use ui::components::SiteNavbar;
use ui::core::SiteConfig;
use ui::views::PageSection;

const MAIN_CSS: Asset = asset!("/assets/main.css");

// Site content & navbar tuning (brand, nav items, style variant)
const SITE_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/site.json"));

fn main() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    if let Err(err) = dioxus::logger::init(level) {
        eprintln!("[folio] logger init failed: {err}");
    }

    dioxus::launch(App);
}

fn load_site_config() -> SiteConfig {
    SiteConfig::from_json(SITE_JSON).unwrap_or_else(|err| {
        warn!(%err, "site.json rejected; falling back to the default site");
        SiteConfig::default()
    })
}

fn section_blurb(id: &str) -> &'static str {
    match id {
        "Home" => "Developer and designer building fast, friendly things for the web.",
        "About" => "A little about me, the tools I reach for and how I like to work.",
        "Portfolio" => "Selected projects, experiments and open-source contributions.",
        "Contact" => "Have an idea or a question? My inbox is always open.",
        _ => "",
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(load_site_config);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SiteNavbar { config: config.clone() }

        main { class: "page",
            for item in config.items.iter() {
                PageSection {
                    key: "{item.id}",
                    id: item.id.clone(),
                    title: item.label.clone(),
                    p { class: "page-section__lead", {section_blurb(&item.id)} }
                }
            }
        }
    }
}
