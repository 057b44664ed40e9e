use tracing::{debug, error};
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::Window;

use storefront::signal::ScrollFeed;

// the page's one browser scroll listener
//
// components never touch window.addEventListener themselves; they subscribe to the
// feed and hold the returned guard.  this struct owns the browser-side listener and
// removes it when dropped, so the whole chain is torn down explicitly
pub struct WindowScroll {
    feed: ScrollFeed,
    listener: Option<(Window, Closure<dyn FnMut()>)>,
}

impl WindowScroll {
    pub fn attach() -> Self {
        let feed = ScrollFeed::new();

        let listener = match Self::register(&feed) {
            Ok(listener) => Some(listener),
            Err(err) => {
                error!("scroll listener unavailable, header will stay at rest: {err:#}");
                None
            }
        };

        WindowScroll { feed, listener }
    }

    fn register(feed: &ScrollFeed) -> anyhow::Result<(Window, Closure<dyn FnMut()>)> {
        let window = web_sys::window().ok_or_else(|| anyhow::Error::msg("no global window"))?;

        let callback = {
            let feed = feed.clone();
            let window = window.clone();
            Closure::<dyn FnMut()>::new(move || {
                feed.emit(&window.scroll_y().unwrap_or(0.0));
            })
        };

        window
            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            .map_err(|err| anyhow::Error::msg(format!("addEventListener failed: {err:?}")))?;

        debug!("window scroll listener attached");

        Ok((window, callback))
    }

    pub fn feed(&self) -> &ScrollFeed {
        &self.feed
    }

    // current offset, for components that mount after the page has scrolled
    pub fn offset(&self) -> f64 {
        self.listener
            .as_ref()
            .and_then(|(window, _)| window.scroll_y().ok())
            .unwrap_or(0.0)
    }
}

impl Drop for WindowScroll {
    fn drop(&mut self) {
        if let Some((window, callback)) = self.listener.take() {
            if let Err(err) = window
                .remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            {
                error!("failed to remove window scroll listener: {err:?}");
            }
            debug!("window scroll listener removed");
        }
    }
}
