use dioxus::prelude::*;

use storefront::menu::NAV_TAXONOMY;

use crate::components::{image::RemoteImage, nav_menu::NavMenu};

const BACKDROP_IMAGE: &str = "/front-left-side-47.avif";

#[component]
pub fn MenuDemo() -> Element {
    rsx! {
        main { class: "plain-page",
            NavMenu { taxonomy: NAV_TAXONOMY }
            Backdrop {}
        }
    }
}

// centered, rounded hero shot under the menu
#[component]
fn Backdrop() -> Element {
    rsx! {
        div { class: "backdrop image-frame",
            RemoteImage {
                src: BACKDROP_IMAGE,
                alt: "Car front left side",
                width: 1200,
                height: 600,
                priority: true,
            }
        }
    }
}
