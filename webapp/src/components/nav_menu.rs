use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_router::prelude::*;

use storefront::{
    config::StorefrontConfig,
    menu::{Feature, LinkIcon, MenuController, NavContent, NavEntry, NavLink, Panel},
};

use crate::{
    common::viewport::viewport_width,
    components::icons::{Icon, IconKind},
};

#[derive(Clone, PartialEq, Props)]
pub struct NavMenuProps {
    taxonomy: &'static [NavEntry],
}

// two-level navigation menu
//
// the viewport is measured exactly once, when the controller is created; the
// controller decides between in-place and floating panels from that and never
// revisits it
#[component]
pub fn NavMenu(props: NavMenuProps) -> Element {
    let config = use_context::<Rc<StorefrontConfig>>();

    let mut menu = use_signal(|| {
        MenuController::mount(
            props.taxonomy,
            viewport_width(),
            config.menu.narrow_viewport_width,
        )
    });

    let mode = menu.read().mode();
    let active = menu.read().active();

    rsx! {
        nav { class: "nav-menu-shell", "aria-label": "Main",
            div { class: "{mode.class()}",
                ul { class: "nav-list",
                    for (index, entry) in props.taxonomy.iter().enumerate() {
                        li {
                            key: "{entry.label}",
                            class: if active == Some(index) { "{entry.item_class()} open" } else { "{entry.item_class()}" },
                            onmouseenter: move |_| menu.write().pointer_enter(index),
                            onmouseleave: move |_| menu.write().pointer_leave(),

                            {match entry.content {
                                NavContent::Link(href) => rsx! {
                                    Link {
                                        class: "nav-trigger",
                                        to: href,
                                        onclick: move |_| menu.write().close(),
                                        "{entry.label}"
                                    }
                                },
                                NavContent::Panel(panel) => rsx! {
                                    button {
                                        class: if active == Some(index) { "nav-trigger open" } else { "nav-trigger" },
                                        r#type: "button",
                                        "aria-expanded": "{active == Some(index)}",
                                        onclick: move |_| menu.write().tap(index),
                                        "{entry.label}"
                                        Icon { kind: IconKind::ChevronDown, class: "chevron" }
                                    }
                                    if active == Some(index) {
                                        MenuPanel { panel, on_navigate: move |_| menu.write().close() }
                                    }
                                },
                            }}
                        }
                    }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct MenuPanelProps {
    panel: Panel,
    on_navigate: EventHandler<()>,
}

#[component]
fn MenuPanel(props: MenuPanelProps) -> Element {
    let panel = props.panel;
    let on_navigate = props.on_navigate;

    rsx! {
        ul { class: "{panel.layout.class()}",
            if let Some(feature) = panel.feature {
                li {
                    FeatureCard { feature, on_navigate }
                }
            }
            for link in panel.links.iter() {
                li { key: "{link.href}",
                    MenuLink { link: *link, on_navigate }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct FeatureCardProps {
    feature: Feature,
    on_navigate: EventHandler<()>,
}

#[component]
fn FeatureCard(props: FeatureCardProps) -> Element {
    let feature = props.feature;

    rsx! {
        Link {
            class: "feature-card",
            to: feature.href,
            onclick: move |_| props.on_navigate.call(()),
            div { class: "feature-title", "{feature.title}" }
            p { class: "feature-blurb", "{feature.blurb}" }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct MenuLinkProps {
    link: NavLink,
    on_navigate: EventHandler<()>,
}

#[component]
fn MenuLink(props: MenuLinkProps) -> Element {
    let link = props.link;

    rsx! {
        Link {
            class: if link.icon.is_some() { "nav-link with-icon" } else { "nav-link" },
            to: link.href,
            onclick: move |_| props.on_navigate.call(()),
            if let Some(icon) = link.icon {
                Icon { kind: status_icon(icon), class: "icon icon-sm" }
            }
            div { class: "nav-link-title", "{link.title}" }
            if let Some(description) = link.description {
                p { class: "nav-link-description", "{description}" }
            }
        }
    }
}

fn status_icon(icon: LinkIcon) -> IconKind {
    match icon {
        LinkIcon::CircleHelp => IconKind::CircleHelp,
        LinkIcon::Circle => IconKind::Circle,
        LinkIcon::CircleCheck => IconKind::CircleCheck,
    }
}
