use std::rc::Rc;

use dioxus::prelude::*;
use tracing::{debug, warn};

use storefront::{
    config::ThemeConfig,
    theme::{ThemePreference, ThemeProvider},
};

use crate::common::storage::{get_local_storage, set_local_storage};

// the app's theme provider
//
// the preference lives in a signal owned by the root component and is handed out
// through the context, so the toggle (and anything else that cares) re-renders on
// change.  writes go to local storage and to html[data-theme], which is what the
// css palettes key on
#[derive(Clone, PartialEq)]
pub struct StoredTheme {
    value: Signal<ThemePreference>,
    storage_key: Rc<str>,
}

impl StoredTheme {
    // must run inside a component scope, since it creates the backing signal
    pub fn init(config: &ThemeConfig) -> Self {
        let initial = get_local_storage::<ThemePreference>(&config.storage_key)
            .unwrap_or(config.default);

        apply_theme(initial);

        debug!(%initial, "theme initialised");

        StoredTheme {
            value: Signal::new(initial),
            storage_key: Rc::from(config.storage_key.as_str()),
        }
    }

    // reactive read, for render paths
    pub fn read(&self) -> ThemePreference {
        (self.value)()
    }
}

impl ThemeProvider for StoredTheme {
    fn current(&self) -> ThemePreference {
        *self.value.peek()
    }

    fn set(&mut self, value: ThemePreference) {
        self.value.set(value);
        set_local_storage(&self.storage_key, value);
        apply_theme(value);
    }
}

fn apply_theme(theme: ThemePreference) {
    if let Err(err) = set_theme_attribute(theme) {
        warn!("failed to apply theme {theme}: {err:#}");
    }
}

fn set_theme_attribute(theme: ThemePreference) -> anyhow::Result<()> {
    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
        .ok_or_else(|| anyhow::Error::msg("no document element"))?;

    root.set_attribute("data-theme", theme.as_str())
        .map_err(|err| anyhow::Error::msg(format!("setAttribute failed: {err:?}")))
}
