use dioxus::prelude::*;

use storefront::catalog::{Badge, CarModel};

use crate::components::{
    icons::{Icon, IconKind},
    image::RemoteImage,
};

#[derive(Clone, PartialEq, Props)]
pub struct CarCardProps {
    car: &'static CarModel,
}

#[component]
pub fn CarCard(props: CarCardProps) -> Element {
    let car = props.car;
    let badges = car.badges();

    rsx! {
        article { class: "car-card",
            div { class: "car-card-image image-frame",
                RemoteImage {
                    src: car.image,
                    alt: car.name,
                    width: 1000,
                    height: 563,
                }
                if !badges.is_empty() {
                    div { class: "badges",
                        for badge in badges {
                            span { key: "{badge.label()}", class: "{badge.class()}",
                                Icon { kind: badge_icon(badge), class: "icon icon-xs" }
                                "{badge.label()}"
                            }
                        }
                    }
                }
            }

            div { class: "car-card-body",
                div { class: "car-card-head",
                    div {
                        h3 { class: "car-card-name", "{car.name}" }
                        p { class: "car-card-category", "{car.category}" }
                    }
                    p { class: "car-card-price", "{car.price}" }
                }

                div { class: "car-card-specs",
                    span {
                        Icon { kind: IconKind::Zap, class: "icon icon-xs icon-accent" }
                        "{car.power}"
                    }
                    span {
                        Icon { kind: IconKind::ArrowRight, class: "icon icon-xs icon-accent" }
                        "{car.acceleration}"
                    }
                }

                div { class: "car-card-actions",
                    button { class: "btn btn-outline btn-sm btn-block", r#type: "button", "Configure" }
                    button { class: "btn btn-dark btn-sm btn-block", r#type: "button", "Details" }
                }
            }
        }
    }
}

fn badge_icon(badge: Badge) -> IconKind {
    match badge {
        Badge::JustAdded => IconKind::Clock,
        Badge::TopChoice => IconKind::Flame,
        Badge::MostPopular => IconKind::Star,
    }
}
