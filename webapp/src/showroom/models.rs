use dioxus::prelude::*;

use storefront::catalog::{CAR_DATA, SHELVES, Shelf};

use crate::components::{
    car_card::CarCard,
    icons::{Icon, IconKind},
};

// the models section: one horizontally scrolling strip per shelf
//
// a car may sit on more than one shelf; each strip renders its own card
#[component]
pub fn Models() -> Element {
    rsx! {
        section { id: "models", class: "models",
            div { class: "container",
                for shelf in SHELVES.iter() {
                    ShelfStrip { key: "{shelf.title}", shelf: *shelf }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct ShelfStripProps {
    shelf: Shelf,
}

#[component]
fn ShelfStrip(props: ShelfStripProps) -> Element {
    let shelf = props.shelf;
    let cars = shelf.cars(CAR_DATA);

    rsx! {
        div {
            div { class: "shelf-header",
                div { class: "section-heading",
                    h2 { "{shelf.title}" }
                    p { "{shelf.subtitle}" }
                }
                a { class: "shelf-action md-up", href: "#",
                    "{shelf.action}"
                    Icon { kind: IconKind::ArrowRight, class: "icon icon-sm" }
                }
            }

            div { class: "shelf-strip",
                for car in cars {
                    div { key: "{car.id}", class: "shelf-slot",
                        CarCard { car }
                    }
                }
            }
        }
    }
}
