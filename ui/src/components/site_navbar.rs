use std::rc::Rc;

use dioxus::prelude::*;
use futures_util::StreamExt;

use crate::core::platform::DefaultHost;
use crate::core::{MenuState, NavController, ScrollState, SiteConfig};

// Navbar stylesheet (also inlined for release native builds, like the app theme)
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Fixed single-page navbar.
///
/// Owns one [`NavController`] for its whole lifetime:
/// - scroll notifications are coalesced per frame by the controller and the
///   resulting `ScrollState` is forwarded through a coroutine channel, so
///   signal writes always happen inside the Dioxus runtime;
/// - clicking a link (desktop row, mobile overlay or brand) smooth-scrolls to
///   its anchor and closes the mobile menu;
/// - unmounting tears the listener, pending frame and scroll lock down.
///
/// Visual differences between variants come from `config.style` only.
#[component]
pub fn SiteNavbar(config: SiteConfig) -> Element {
    let mut scroll_state = use_signal(|| ScrollState::initial(&config.items));
    let mut menu = use_signal(MenuState::default);

    let controller = use_hook(|| {
        Rc::new(NavController::new(
            Rc::new(DefaultHost::default()),
            &config,
        ))
    });

    let updates = use_coroutine(move |mut rx: UnboundedReceiver<ScrollState>| async move {
        while let Some(next) = rx.next().await {
            if *scroll_state.peek() != next {
                scroll_state.set(next);
            }
        }
    });

    {
        let controller = controller.clone();
        use_effect(move || {
            let tx = updates.tx();
            let initial = controller.attach(move |state| {
                let _ = tx.unbounded_send(state);
            });
            scroll_state.set(initial);
        });
    }

    {
        let controller = controller.clone();
        use_drop(move || controller.teardown());
    }

    let on_select = {
        let controller = controller.clone();
        use_callback(move |id: String| {
            controller.navigate_to(&id);
            menu.set(controller.menu());
        })
    };

    let on_toggle = {
        let controller = controller.clone();
        move |_: MouseEvent| {
            menu.set(controller.toggle_menu());
        }
    };

    let state = scroll_state();
    let menu_open = menu().is_open();
    let style = config.style;

    let bar_class = style.bar_class(&state, menu_open);
    let menu_class = style.menu_class(menu_open);
    let toggle_class = if menu_open {
        "navbar__toggle navbar__toggle--open"
    } else {
        "navbar__toggle"
    };
    let home = config.home_anchor().to_string();

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        nav { id: "navbar", class: bar_class,
            div { class: "navbar__inner",
                // Brand
                div { class: "navbar__brand",
                    NavLink {
                        id: home,
                        class: "navbar__brand-link",
                        style: "",
                        on_select: on_select,
                        {config.brand.clone()}
                    }
                }

                // Desktop row
                div { class: "navbar__links",
                    for (index, item) in config.items.iter().enumerate() {
                        NavLink {
                            key: "{item.id}",
                            id: item.id.clone(),
                            class: style.link_class(state.is_active(&item.id)),
                            style: style.link_style(index),
                            on_select: on_select,
                            span { class: "navbar__link-label", {item.label.clone()} }
                            span { class: "navbar__link-underline" }
                        }
                    }
                }

                // Mobile toggle
                button {
                    r#type: "button",
                    class: toggle_class,
                    onclick: on_toggle,
                    if menu_open { "✕" } else { "☰" }
                }
            }

            // Mobile overlay
            div { class: menu_class,
                if style.glass {
                    div { class: "navbar__orbs",
                        span { class: "navbar__orb navbar__orb--indigo" }
                        span { class: "navbar__orb navbar__orb--violet" }
                        span { class: "navbar__orb navbar__orb--purple" }
                    }
                }
                div { class: "navbar__menu-card",
                    for (index, item) in config.items.iter().enumerate() {
                        NavLink {
                            key: "{item.id}",
                            id: item.id.clone(),
                            class: style.menu_item_class(state.is_active(&item.id)),
                            style: style.menu_item_style(index),
                            on_select: on_select,
                            span { class: "navbar__menu-label", {item.label.clone()} }
                            span { class: "navbar__menu-dot" }
                        }
                    }
                }
                p { class: "navbar__menu-hint", "Swipe up to close menu" }
            }
        }
    }
}

/// In-page anchor that routes clicks through the navbar instead of letting the
/// browser jump.
#[component]
fn NavLink(
    id: String,
    #[props(into)] class: String,
    #[props(into)] style: String,
    on_select: EventHandler<String>,
    children: Element,
) -> Element {
    let href = format!("#{id}");

    rsx! {
        a {
            class: class,
            href: href,
            style: style,
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                on_select.call(id.clone());
            },
            {children}
        }
    }
}
