use dioxus::prelude::*;
use dioxus_router::prelude::*;
use tracing::debug;

use crate::Route;

#[derive(Clone, PartialEq, Props)]
pub struct PlaceholderProps {
    segments: Vec<String>,
}

// every taxonomy href lands somewhere; the pages behind them are not built yet
#[component]
pub fn Placeholder(props: PlaceholderProps) -> Element {
    let path = format!("/{}", props.segments.join("/"));

    debug!(%path, "no page for route");

    rsx! {
        main { class: "plain-page",
            div { class: "container placeholder",
                h1 { "Coming soon" }
                p {
                    "There is nothing at "
                    code { "{path}" }
                    " yet."
                }
                Link { class: "btn btn-dark", to: Route::Showroom {}, "Back to the showroom" }
            }
        }
    }
}
