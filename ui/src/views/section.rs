use dioxus::prelude::*;

/// Full-height page section that a navbar item scrolls to. `id` must match
/// the navigation item's id so the tracker can measure it.
#[component]
pub fn PageSection(id: String, title: String, children: Element) -> Element {
    let class = format!("page-section page-section--{}", id.to_lowercase());

    rsx! {
        section { id: id, class: class,
            div { class: "page-section__inner",
                h2 { class: "page-section__title", {title} }
                {children}
            }
        }
    }
}
