use std::{cell::RefCell, rc::Rc};

use dioxus::prelude::*;
use dioxus_router::prelude::*;

use storefront::{
    BRAND_MARK, BRAND_NAME,
    config::StorefrontConfig,
    header::{HEADER_LINKS, HeaderController, HeaderState},
};

use crate::{
    Route,
    common::scroll::WindowScroll,
    components::{
        icons::{Icon, IconKind},
        theme_toggle::ThemeToggle,
    },
};

// fixed site header
//
// the controller is created once per mount and subscribes to the page scroll feed;
// its observer copies every state change into a signal, which is what drives the
// re-render.  use_drop unmounts the controller, which drops the subscription
#[component]
pub fn SiteHeader() -> Element {
    let scroll = use_context::<Rc<WindowScroll>>();
    let config = use_context::<Rc<StorefrontConfig>>();

    let mut header = use_signal(HeaderState::default);

    let controller = use_hook(|| {
        Rc::new(RefCell::new(HeaderController::mount_with(
            scroll.feed(),
            config.header.scroll_threshold,
            move |state| header.set(state),
        )))
    });

    // the page may already be scrolled when we mount (reload, back navigation).
    // offset() reads 0.0 if the scroll listener never attached
    use_effect({
        let controller = controller.clone();
        let scroll = scroll.clone();
        move || {
            controller.borrow().on_scroll(scroll.offset());
        }
    });

    use_drop({
        let controller = controller.clone();
        move || controller.borrow_mut().unmount()
    });

    let toggle_menu = {
        let controller = controller.clone();
        move |_: MouseEvent| {
            controller.borrow().toggle_menu();
        }
    };

    let select_link = {
        let controller = controller.clone();
        move |_: MouseEvent| {
            controller.borrow().select_link();
        }
    };

    let state = header();

    rsx! {
        header { class: "{state.style().class()}",
            div { class: "container header-bar",
                Link { class: "brand", to: Route::Showroom {},
                    div { class: "brand-mark",
                        span { "{BRAND_MARK}" }
                    }
                    span { class: "brand-name", "{BRAND_NAME}" }
                }

                nav { class: "header-nav lg-up",
                    for link in HEADER_LINKS.iter() {
                        a { key: "{link.label}", href: link.href, "{link.label}" }
                    }
                }

                div { class: "header-tools lg-up",
                    button { class: "icon-button", r#type: "button", "aria-label": "Search",
                        Icon { kind: IconKind::Search }
                    }
                    button { class: "icon-button", r#type: "button", "aria-label": "Find a dealer",
                        Icon { kind: IconKind::MapPin }
                    }
                    ThemeToggle {}
                }

                button {
                    class: "icon-button menu-button lg-down",
                    r#type: "button",
                    "aria-label": if state.menu_open { "Close menu" } else { "Open menu" },
                    "aria-expanded": "{state.menu_open}",
                    onclick: toggle_menu,
                    if state.menu_open {
                        Icon { kind: IconKind::X, class: "icon" }
                    } else {
                        Icon { kind: IconKind::Menu, class: "icon" }
                    }
                }

                if state.menu_open {
                    div { class: "mobile-overlay lg-down",
                        for link in HEADER_LINKS.iter() {
                            a {
                                key: "{link.label}",
                                href: link.href,
                                onclick: select_link.clone(),
                                "{link.label}"
                            }
                        }
                        div { class: "overlay-tools",
                            ThemeToggle {}
                        }
                    }
                }
            }
        }
    }
}
