use dioxus::prelude::*;

use crate::components::header::SiteHeader;

mod footer;
use footer::Footer;

mod hero;
use hero::Hero;

mod innovation;
use innovation::Innovation;

mod models;
use models::Models;

// the landing page, top to bottom
#[component]
pub fn Showroom() -> Element {
    rsx! {
        main { class: "showroom",
            SiteHeader {}
            Hero {}
            Models {}
            Innovation {}
            Footer {}
        }
    }
}
