#![allow(non_snake_case)]
use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::{Level, error};

use storefront::{config::StorefrontConfig, image::ImagePolicy};

mod common;
use common::{scroll::WindowScroll, style::STOREFRONT_STYLES, theme::StoredTheme};

mod components;

mod showroom;
use showroom::Showroom;

mod menu_demo;
use menu_demo::MenuDemo;

mod placeholder;
use placeholder::Placeholder;

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

// the taxonomy links (/cars/browse, /financing, ...) all fall through to the
// placeholder until those pages exist
#[derive(Clone, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Showroom {},
    #[route("/menu")]
    MenuDemo {},
    #[route("/:..segments")]
    Placeholder { segments: Vec<String> },
}

// the root owns everything that lives as long as the page: the parsed config,
// the image allow-list, the single window scroll listener and the theme provider.
// all of it reaches components through the context
#[component]
pub fn App() -> Element {
    let config = use_context_provider(|| Rc::new(StorefrontConfig::load()));

    use_context_provider(|| {
        let policy = config.image_policy().unwrap_or_else(|err| {
            error!("image allow-list unavailable, only local images will load: {err:#}");
            ImagePolicy::default()
        });
        Rc::new(policy)
    });

    use_context_provider(|| Rc::new(WindowScroll::attach()));

    use_context_provider(|| StoredTheme::init(&config.theme));

    rsx! {
        style { "{STOREFRONT_STYLES}" }
        Router::<Route> { config: RouterConfig::default }
    }
}
