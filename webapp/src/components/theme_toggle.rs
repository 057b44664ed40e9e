use dioxus::prelude::*;

use storefront::theme::{self, ThemeIcon};

use crate::{
    common::theme::StoredTheme,
    components::icons::{Icon, IconKind},
};

#[component]
pub fn ThemeToggle() -> Element {
    let provider = use_context::<StoredTheme>();

    let icon = match provider.read().icon() {
        ThemeIcon::Moon => IconKind::Moon,
        ThemeIcon::Sun => IconKind::Sun,
    };

    rsx! {
        button {
            class: "icon-button",
            r#type: "button",
            "aria-label": "Toggle theme",
            onclick: move |_| {
                let mut provider = provider.clone();
                theme::toggle(&mut provider);
            },
            Icon { kind: icon }
        }
    }
}
