use std::{
    cell::{Cell, RefCell},
    fmt,
    rc::Rc,
};

use tracing::{debug, instrument};

use crate::signal::{ScrollFeed, Subscription};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeaderLink {
    pub label: &'static str,
    pub href: &'static str,
}

// in-page anchors shown in the desktop nav and in the mobile overlay
pub const HEADER_LINKS: &[HeaderLink] = &[
    HeaderLink {
        label: "Models",
        href: "#models",
    },
    HeaderLink {
        label: "Electric",
        href: "#electric",
    },
    HeaderLink {
        label: "Buy Online",
        href: "#buy",
    },
    HeaderLink {
        label: "Consulting",
        href: "#consulting",
    },
    HeaderLink {
        label: "Services",
        href: "#services",
    },
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollState {
    pub scrolled: bool,
}

impl ScrollState {
    // strictly greater: an offset sitting exactly on the threshold is still "top of page"
    pub fn from_offset(offset: f64, threshold: f64) -> Self {
        ScrollState {
            scrolled: offset > threshold,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderStyle {
    // opaque background, reduced padding
    Solid,
    // gradient fading to transparent, larger padding
    Translucent,
}

impl HeaderStyle {
    pub fn class(self) -> &'static str {
        match self {
            HeaderStyle::Solid => "site-header solid",
            HeaderStyle::Translucent => "site-header translucent",
        }
    }
}

// header state
//
// both flags start false and are recreated on every mount
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeaderState {
    pub scroll: ScrollState,
    pub menu_open: bool,
}

impl HeaderState {
    pub fn on_scroll(&mut self, offset: f64, threshold: f64) {
        self.scroll = ScrollState::from_offset(offset, threshold);
    }

    pub fn is_solid(&self) -> bool {
        self.scroll.scrolled || self.menu_open
    }

    pub fn style(&self) -> HeaderStyle {
        if self.is_solid() {
            HeaderStyle::Solid
        } else {
            HeaderStyle::Translucent
        }
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    // following a link out of the overlay always dismisses it
    pub fn select_link(&mut self) {
        self.menu_open = false;
    }
}

// header controller
//
// owns the header state for one mounted header and the scroll subscription that
// keeps it current.  the subscription lives exactly as long as the controller, so
// dropping (or unmounting) the controller is what removes the listener.  the
// optional observer hears about every state change, which is how the webapp turns
// this into a re-render
type Observer = Box<dyn FnMut(HeaderState)>;

struct Shared {
    state: Cell<HeaderState>,
    threshold: f64,
    observer: RefCell<Option<Observer>>,
}

impl Shared {
    fn apply(&self, f: impl FnOnce(&mut HeaderState)) -> HeaderState {
        let before = self.state.get();
        let mut next = before;
        f(&mut next);
        self.state.set(next);

        if next != before {
            if let Ok(mut observer) = self.observer.try_borrow_mut() {
                if let Some(observer) = observer.as_mut() {
                    observer(next);
                }
            }
        }

        next
    }
}

pub struct HeaderController {
    shared: Rc<Shared>,
    subscription: Option<Subscription>,
}

impl HeaderController {
    pub fn mount(feed: &ScrollFeed, threshold: f64) -> Self {
        Self::build(feed, threshold, None)
    }

    pub fn mount_with<F>(feed: &ScrollFeed, threshold: f64, observer: F) -> Self
    where
        F: FnMut(HeaderState) + 'static,
    {
        Self::build(feed, threshold, Some(Box::new(observer)))
    }

    #[instrument(skip(feed, observer))]
    fn build(feed: &ScrollFeed, threshold: f64, observer: Option<Observer>) -> Self {
        let shared = Rc::new(Shared {
            state: Cell::new(HeaderState::default()),
            threshold,
            observer: RefCell::new(observer),
        });

        let subscription = {
            let shared = shared.clone();
            feed.subscribe(move |offset| {
                shared.apply(|state| state.on_scroll(*offset, shared.threshold));
            })
        };

        debug!("header mounted");

        HeaderController {
            shared,
            subscription: Some(subscription),
        }
    }

    pub fn state(&self) -> HeaderState {
        self.shared.state.get()
    }

    pub fn is_solid(&self) -> bool {
        self.state().is_solid()
    }

    // feed a scroll offset directly, used to sync with the page on mount
    pub fn on_scroll(&self, offset: f64) -> HeaderState {
        let threshold = self.shared.threshold;
        self.shared.apply(|state| state.on_scroll(offset, threshold))
    }

    pub fn toggle_menu(&self) -> HeaderState {
        self.shared.apply(HeaderState::toggle_menu)
    }

    pub fn select_link(&self) -> HeaderState {
        self.shared.apply(HeaderState::select_link)
    }

    pub fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    // explicit teardown, also what Drop ends up doing
    //
    // the observer is released first so that the reset is not reported to a
    // component that is going away
    pub fn unmount(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.cancel();
            self.shared.observer.replace(None);
            self.shared.state.set(HeaderState::default());
            debug!("header unmounted");
        }
    }
}

impl Drop for HeaderController {
    fn drop(&mut self) {
        self.unmount();
    }
}

impl fmt::Debug for HeaderController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeaderController")
            .field("state", &self.state())
            .field("mounted", &self.is_mounted())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SCROLL_THRESHOLD;

    fn solid_at(offset: f64, menu_open: bool) -> bool {
        let mut state = HeaderState {
            menu_open,
            ..Default::default()
        };
        state.on_scroll(offset, SCROLL_THRESHOLD);
        state.is_solid()
    }

    #[test]
    fn closed_menu_follows_threshold() {
        for offset in [0.0, 10.0, 49.9, 50.0, 50.1, 51.0, 400.0, 10_000.0] {
            assert_eq!(solid_at(offset, false), offset > 50.0, "offset {offset}");
        }
    }

    #[test]
    fn open_menu_is_always_solid() {
        for offset in [0.0, 25.0, 50.0, 51.0, 900.0] {
            assert!(solid_at(offset, true), "offset {offset}");
        }
    }

    #[test]
    fn style_tracks_solidity() {
        let mut state = HeaderState::default();
        assert_eq!(state.style(), HeaderStyle::Translucent);

        state.toggle_menu();
        assert_eq!(state.style(), HeaderStyle::Solid);
        assert_eq!(state.style().class(), "site-header solid");
    }

    #[test]
    fn link_selection_always_closes() {
        for start in [false, true] {
            let mut state = HeaderState {
                menu_open: start,
                ..Default::default()
            };
            state.select_link();
            assert!(!state.menu_open);
        }
    }

    #[test]
    fn toggle_flips() {
        let mut state = HeaderState::default();
        state.toggle_menu();
        assert!(state.menu_open);
        state.toggle_menu();
        assert!(!state.menu_open);
    }

    #[test]
    fn controller_follows_feed() {
        let feed = ScrollFeed::new();
        let header = HeaderController::mount(&feed, SCROLL_THRESHOLD);

        assert!(!header.is_solid());

        feed.emit(&120.0);
        assert!(header.state().scroll.scrolled);
        assert!(header.is_solid());

        feed.emit(&12.0);
        assert!(!header.is_solid());

        header.toggle_menu();
        assert!(header.is_solid());

        header.select_link();
        assert!(!header.is_solid());
    }

    #[test]
    fn controller_releases_listener() {
        let feed = ScrollFeed::new();

        let mut header = HeaderController::mount(&feed, SCROLL_THRESHOLD);
        assert_eq!(feed.listener_count(), 1);

        header.unmount();
        assert_eq!(feed.listener_count(), 0);
        assert!(!header.is_mounted());

        {
            let _again = HeaderController::mount(&feed, SCROLL_THRESHOLD);
            assert_eq!(feed.listener_count(), 1);
        }
        assert_eq!(feed.listener_count(), 0);
    }

    #[test]
    fn unmount_resets_state() {
        let feed = ScrollFeed::new();
        let mut header = HeaderController::mount(&feed, SCROLL_THRESHOLD);

        feed.emit(&300.0);
        header.toggle_menu();
        header.unmount();

        assert_eq!(header.state(), HeaderState::default());
    }

    #[test]
    fn observer_hears_only_changes() {
        let feed = ScrollFeed::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let header = {
            let seen = seen.clone();
            HeaderController::mount_with(&feed, SCROLL_THRESHOLD, move |state| {
                seen.borrow_mut().push(state.is_solid())
            })
        };

        feed.emit(&10.0);
        feed.emit(&60.0);
        feed.emit(&70.0);
        header.on_scroll(0.0);
        header.select_link();

        assert_eq!(*seen.borrow(), vec![true, false]);
    }

    #[test]
    fn observer_is_silent_after_unmount() {
        let feed = ScrollFeed::new();
        let calls = Rc::new(Cell::new(0));

        let mut header = {
            let calls = calls.clone();
            HeaderController::mount_with(&feed, SCROLL_THRESHOLD, move |_| {
                calls.set(calls.get() + 1)
            })
        };

        header.toggle_menu();
        header.unmount();
        header.toggle_menu();

        assert_eq!(calls.get(), 1);
    }
}
