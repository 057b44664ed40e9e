use dioxus::prelude::*;

use crate::components::image::RemoteImage;

const HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1533473359331-0135ef1b58bf?q=80&w=1170&auto=format&fit=crop";

// full-bleed hero; the slow zoom on the backdrop is a css keyframe loop
#[component]
pub fn Hero() -> Element {
    rsx! {
        section { class: "hero",
            div { class: "hero-backdrop",
                RemoteImage {
                    src: HERO_IMAGE,
                    alt: "Luxury Car Hero",
                    width: 1170,
                    height: 780,
                    priority: true,
                }
                div { class: "hero-shade" }
            }

            div { class: "container hero-copy-wrap",
                div { class: "hero-copy",
                    span { class: "hero-eyebrow", "World Premiere" }
                    h1 { class: "hero-title", "The New Electric Concept." }
                    p { class: "hero-subtitle",
                        "Defined by luxury, driven by performance. Experience the future of automotive excellence today."
                    }
                    div { class: "hero-actions",
                        button { class: "btn btn-ghost-light", r#type: "button", "Discover More" }
                        button { class: "btn btn-primary", r#type: "button", "Configure Now" }
                    }
                }
            }
        }
    }
}
