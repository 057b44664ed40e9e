use std::rc::Rc;

use dioxus::prelude::*;
use tracing::warn;

use storefront::image::ImagePolicy;

#[derive(Clone, PartialEq, Props)]
pub struct RemoteImageProps {
    #[props(into)]
    src: String,
    #[props(into)]
    alt: String,
    width: u32,
    height: u32,
    // above-the-fold images skip lazy loading
    #[props(default)]
    priority: bool,
    #[props(into, default = String::from("image-fill"))]
    class: String,
}

// lazily loaded image with declared dimensions
//
// sources are checked against the configured allow-list first; anything that is
// not allowed renders as a labelled placeholder instead of a broken image
#[component]
pub fn RemoteImage(props: RemoteImageProps) -> Element {
    let policy = use_context::<Rc<ImagePolicy>>();

    if let Err(err) = policy.check(&props.src) {
        warn!("refusing image {}: {err:#}", props.src);

        return rsx! {
            div { class: "image-missing", role: "img", "aria-label": "{props.alt}", "{props.alt}" }
        };
    }

    rsx! {
        img {
            class: "{props.class}",
            src: "{props.src}",
            alt: "{props.alt}",
            width: "{props.width}",
            height: "{props.height}",
            loading: if props.priority { "eager" } else { "lazy" },
            decoding: "async",
        }
    }
}
