use dioxus::prelude::*;

use crate::components::{
    icons::{Icon, IconKind},
    image::RemoteImage,
};

const INTERIOR_IMAGE: &str =
    "https://images.unsplash.com/photo-1552519507-da3b142c6e3d?q=80&w=1000&auto=format&fit=crop";

const POINTS: &[(IconKind, &str)] = &[
    (IconKind::Star, "Personalized User Profiles"),
    (IconKind::Shield, "Advanced Driver Assistance"),
    (IconKind::MapPin, "Live Traffic Navigation"),
];

#[component]
pub fn Innovation() -> Element {
    rsx! {
        section { id: "electric", class: "innovation",
            div { class: "container innovation-grid",
                div {
                    span { class: "innovation-eyebrow", "Innovation" }
                    h2 { class: "innovation-title", "Digital Extras." }
                    p { class: "innovation-copy",
                        "Experience the interplay of digital and analog luxury. With MBUX (Mercedes-Benz User Experience), "
                        "you can intuitively control your vehicle with voice, touch, or gestures."
                    }

                    ul { class: "innovation-points",
                        for (kind, text) in POINTS.iter().copied() {
                            li { key: "{text}",
                                div { class: "innovation-point-icon",
                                    Icon { kind, class: "icon icon-md icon-accent" }
                                }
                                span { "{text}" }
                            }
                        }
                    }
                }

                div { class: "innovation-visual image-frame",
                    RemoteImage {
                        src: INTERIOR_IMAGE,
                        alt: "Interior Technology",
                        width: 1000,
                        height: 563,
                    }
                }
            }
        }
    }
}
