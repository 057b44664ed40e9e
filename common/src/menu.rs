use tracing::{debug, instrument};

use crate::{MARKETPLACE_NAME, MEDIUM_VIEWPORT_WIDTH};

// navigation taxonomy
//
// a fixed two-level tree: top-level entries in display order, each either a
// direct link or a trigger that reveals a panel of links.  everything here is
// 'static and built at compile time; nothing mutates it
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub title: &'static str,
    pub href: &'static str,
    pub description: Option<&'static str>,
    pub icon: Option<LinkIcon>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkIcon {
    CircleHelp,
    Circle,
    CircleCheck,
}

// the large call-out card shown beside the links of the first panel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub href: &'static str,
    pub blurb: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelLayout {
    Featured,
    TwoColumn,
    Stack,
}

impl PanelLayout {
    pub fn class(self) -> &'static str {
        match self {
            PanelLayout::Featured => "nav-panel featured",
            PanelLayout::TwoColumn => "nav-panel two-column",
            PanelLayout::Stack => "nav-panel stack",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Panel {
    pub layout: PanelLayout,
    pub feature: Option<Feature>,
    pub links: &'static [NavLink],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavContent {
    Panel(Panel),
    Link(&'static str),
}

// entries marked MediumUp are hidden below the md breakpoint by css
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryVisibility {
    Always,
    MediumUp,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavEntry {
    pub label: &'static str,
    pub content: NavContent,
    pub visibility: EntryVisibility,
}

impl NavEntry {
    pub fn panel(&self) -> Option<&Panel> {
        match &self.content {
            NavContent::Panel(panel) => Some(panel),
            NavContent::Link(_) => None,
        }
    }

    pub fn visible_at(&self, width: f64) -> bool {
        match self.visibility {
            EntryVisibility::Always => true,
            EntryVisibility::MediumUp => width.is_nan() || width >= MEDIUM_VIEWPORT_WIDTH,
        }
    }

    pub fn item_class(&self) -> &'static str {
        match self.visibility {
            EntryVisibility::Always => "nav-item",
            EntryVisibility::MediumUp => "nav-item md-up",
        }
    }
}

const fn link(title: &'static str, href: &'static str, description: &'static str) -> NavLink {
    NavLink {
        title,
        href,
        description: Some(description),
        icon: None,
    }
}

const fn bare(title: &'static str, href: &'static str) -> NavLink {
    NavLink {
        title,
        href,
        description: None,
        icon: None,
    }
}

const fn with_icon(title: &'static str, href: &'static str, icon: LinkIcon) -> NavLink {
    NavLink {
        title,
        href,
        description: None,
        icon: Some(icon),
    }
}

pub const HOME_LINKS: &[NavLink] = &[
    link(
        "About Us",
        "/about",
        "Learn more about our vision and how we connect car buyers and sellers nationwide.",
    ),
    link(
        "Contact",
        "/contact",
        "Reach out for support, feedback, or business inquiries. We're here to help!",
    ),
    link(
        "Blog",
        "/blog",
        "Latest news, tips, and trends in the world of car buying and selling.",
    ),
];

pub const CAR_SECTIONS: &[NavLink] = &[
    link(
        "Browse Cars",
        "/cars/browse",
        "Explore our wide range of new and used cars suitable for all budgets and preferences.",
    ),
    link(
        "Sell Your Car",
        "/cars/sell",
        "List your car easily and reach thousands of potential buyers. Get the best offer today.",
    ),
    link(
        "How It Works",
        "/how-it-works",
        "Learn how buying and selling on CarMarketPlace is simple, secure, and fast.",
    ),
    link(
        "Financing",
        "/financing",
        "Flexible car financing options to help you drive your dream car home.",
    ),
    link(
        "Car Reviews",
        "/reviews",
        "Read reviews, ratings and insights from real car owners before you decide.",
    ),
    link(
        "FAQs",
        "/faq",
        "Find answers to common questions about buying, selling, and our services.",
    ),
];

pub const BUYER_LINKS: &[NavLink] = &[
    link(
        "Browse Cars",
        "/cars/browse",
        "Find cars by brand, model, price, and more.",
    ),
    link(
        "Financing Options",
        "/financing",
        "Flexible plans to make car buying easier for you.",
    ),
    link(
        "Support & FAQ",
        "/faq",
        "Get your questions answered before you buy.",
    ),
];

pub const SELLER_LINKS: &[NavLink] = &[
    bare("Sell Your Car", "/cars/sell"),
    bare("Pricing Guide", "/pricing"),
    bare("Selling Tips", "/guides/seller"),
];

pub const STATUS_LINKS: &[NavLink] = &[
    with_icon("My Listings", "/my-listings", LinkIcon::CircleHelp),
    with_icon("My Bids", "/my-bids", LinkIcon::Circle),
    with_icon("My Purchases", "/my-purchases", LinkIcon::CircleCheck),
];

pub static NAV_TAXONOMY: &[NavEntry] = &[
    NavEntry {
        label: "Home",
        content: NavContent::Panel(Panel {
            layout: PanelLayout::Featured,
            feature: Some(Feature {
                title: MARKETPLACE_NAME,
                href: "/",
                blurb: "Buy and sell your car easily, fast and secure.",
            }),
            links: HOME_LINKS,
        }),
        visibility: EntryVisibility::Always,
    },
    NavEntry {
        label: "Marketplace",
        content: NavContent::Panel(Panel {
            layout: PanelLayout::TwoColumn,
            feature: None,
            links: CAR_SECTIONS,
        }),
        visibility: EntryVisibility::Always,
    },
    NavEntry {
        label: "Sell Car",
        content: NavContent::Link("/cars/sell"),
        visibility: EntryVisibility::Always,
    },
    NavEntry {
        label: "For Buyers",
        content: NavContent::Panel(Panel {
            layout: PanelLayout::Stack,
            feature: None,
            links: BUYER_LINKS,
        }),
        visibility: EntryVisibility::MediumUp,
    },
    NavEntry {
        label: "For Sellers",
        content: NavContent::Panel(Panel {
            layout: PanelLayout::Stack,
            feature: None,
            links: SELLER_LINKS,
        }),
        visibility: EntryVisibility::MediumUp,
    },
    NavEntry {
        label: "Status",
        content: NavContent::Panel(Panel {
            layout: PanelLayout::Stack,
            feature: None,
            links: STATUS_LINKS,
        }),
        visibility: EntryVisibility::MediumUp,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportClass {
    Narrow,
    Wide,
}

impl ViewportClass {
    // anything that is not provably narrow (including a NaN width from a
    // confused browser) is treated as wide
    pub fn from_width(width: f64, breakpoint: f64) -> Self {
        if width < breakpoint {
            ViewportClass::Narrow
        } else {
            ViewportClass::Wide
        }
    }

    pub fn menu_mode(self) -> MenuMode {
        match self {
            ViewportClass::Narrow => MenuMode::InPlace,
            ViewportClass::Wide => MenuMode::Floating,
        }
    }
}

// how an open panel is laid out relative to the trigger row
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuMode {
    // panel expands inside the list, pushing later content down
    InPlace,
    // panel floats in a shared viewport below the trigger row
    Floating,
}

impl MenuMode {
    pub fn class(self) -> &'static str {
        match self {
            MenuMode::InPlace => "nav-menu in-place",
            MenuMode::Floating => "nav-menu floating",
        }
    }
}

// menu controller
//
// the viewport class is captured once when the menu mounts and then held for the
// lifetime of the component.  resizes are observed and logged but never change
// the captured class
#[derive(Clone, Debug, PartialEq)]
pub struct MenuController {
    taxonomy: &'static [NavEntry],
    viewport: ViewportClass,
    active: Option<(usize, OpenedBy)>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum OpenedBy {
    Hover,
    Tap,
}

impl MenuController {
    #[instrument(skip(taxonomy))]
    pub fn mount(taxonomy: &'static [NavEntry], width: f64, breakpoint: f64) -> Self {
        let viewport = ViewportClass::from_width(width, breakpoint);

        debug!(?viewport, "menu viewport captured");

        MenuController {
            taxonomy,
            viewport,
            active: None,
        }
    }

    pub fn taxonomy(&self) -> &'static [NavEntry] {
        self.taxonomy
    }

    pub fn viewport(&self) -> ViewportClass {
        self.viewport
    }

    pub fn mode(&self) -> MenuMode {
        self.viewport.menu_mode()
    }

    pub fn active(&self) -> Option<usize> {
        self.active.map(|(index, _)| index)
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.active() == Some(index)
    }

    pub fn on_resize(&self, width: f64) -> ViewportClass {
        debug!(width, captured = ?self.viewport, "resize ignored by menu");
        self.viewport
    }

    // hover only drives panels on wide viewports.  touch devices fire a synthetic
    // mouseenter right before the click, and desktop users often hover and then
    // click, so a tap on a hover-opened panel pins it rather than closing it
    pub fn pointer_enter(&mut self, index: usize) {
        if self.viewport != ViewportClass::Wide || !self.has_panel(index) {
            return;
        }

        if self.active() != Some(index) {
            self.active = Some((index, OpenedBy::Hover));
        }
    }

    pub fn pointer_leave(&mut self) {
        if self.viewport == ViewportClass::Wide {
            self.active = None;
        }
    }

    pub fn tap(&mut self, index: usize) {
        if !self.has_panel(index) {
            self.active = None;
            return;
        }

        self.active = match self.active {
            Some((current, OpenedBy::Tap)) if current == index => None,
            _ => Some((index, OpenedBy::Tap)),
        };
    }

    pub fn close(&mut self) {
        self.active = None;
    }

    fn has_panel(&self, index: usize) -> bool {
        self.taxonomy
            .get(index)
            .is_some_and(|entry| entry.panel().is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NARROW_VIEWPORT_WIDTH;

    fn narrow() -> MenuController {
        MenuController::mount(NAV_TAXONOMY, 800.0, NARROW_VIEWPORT_WIDTH)
    }

    fn wide() -> MenuController {
        MenuController::mount(NAV_TAXONOMY, 1280.0, NARROW_VIEWPORT_WIDTH)
    }

    #[test]
    fn taxonomy_order_is_declared_order() {
        let labels: Vec<_> = NAV_TAXONOMY.iter().map(|e| e.label).collect();
        assert_eq!(
            labels,
            [
                "Home",
                "Marketplace",
                "Sell Car",
                "For Buyers",
                "For Sellers",
                "Status"
            ]
        );

        let marketplace = NAV_TAXONOMY[1].panel().map(|p| p.links.len());
        assert_eq!(marketplace, Some(6));
        assert_eq!(NAV_TAXONOMY[2].content, NavContent::Link("/cars/sell"));
    }

    #[test]
    fn every_href_is_internal() {
        for entry in NAV_TAXONOMY {
            if let Some(panel) = entry.panel() {
                for link in panel.links {
                    assert!(link.href.starts_with('/'), "{}", link.title);
                }
            }
        }
    }

    #[test]
    fn medium_up_entries_hide_on_phones() {
        let visible = |width| {
            NAV_TAXONOMY
                .iter()
                .filter(|entry| entry.visible_at(width))
                .map(|entry| entry.label)
                .collect::<Vec<_>>()
        };

        assert_eq!(visible(375.0), ["Home", "Marketplace", "Sell Car"]);
        assert_eq!(visible(768.0).len(), NAV_TAXONOMY.len());
        assert_eq!(NAV_TAXONOMY[3].item_class(), "nav-item md-up");
    }

    #[test]
    fn breakpoint_is_exclusive() {
        assert_eq!(ViewportClass::from_width(1023.0, 1024.0), ViewportClass::Narrow);
        assert_eq!(ViewportClass::from_width(1024.0, 1024.0), ViewportClass::Wide);
        assert_eq!(ViewportClass::from_width(f64::NAN, 1024.0), ViewportClass::Wide);
    }

    #[test]
    fn viewport_is_captured_at_mount() {
        let menu = narrow();
        assert_eq!(menu.viewport(), ViewportClass::Narrow);
        assert_eq!(menu.mode(), MenuMode::InPlace);
        assert_eq!(menu.on_resize(1920.0), ViewportClass::Narrow);
        assert_eq!(menu.viewport(), ViewportClass::Narrow);

        let menu = wide();
        assert_eq!(menu.mode(), MenuMode::Floating);
        assert_eq!(menu.on_resize(320.0), ViewportClass::Wide);
        assert_eq!(menu.mode(), MenuMode::Floating);
    }

    #[test]
    fn wide_menu_opens_on_hover() {
        let mut menu = wide();

        menu.pointer_enter(1);
        assert!(menu.is_open(1));

        menu.pointer_enter(3);
        assert_eq!(menu.active(), Some(3));

        menu.pointer_leave();
        assert_eq!(menu.active(), None);
    }

    #[test]
    fn tap_after_hover_keeps_panel_open() {
        let mut menu = wide();

        menu.pointer_enter(1);
        menu.tap(1);
        assert_eq!(menu.active(), Some(1));

        // a second tap is a deliberate close
        menu.tap(1);
        assert_eq!(menu.active(), None);

        menu.tap(0);
        menu.pointer_enter(0);
        menu.tap(0);
        assert_eq!(menu.active(), None);

        menu.pointer_enter(3);
        menu.tap(3);
        menu.pointer_leave();
        assert_eq!(menu.active(), None);
    }

    #[test]
    fn narrow_menu_ignores_hover() {
        let mut menu = narrow();

        menu.pointer_enter(0);
        assert_eq!(menu.active(), None);

        menu.tap(0);
        menu.pointer_leave();
        assert!(menu.is_open(0));

        menu.tap(0);
        assert_eq!(menu.active(), None);
    }

    #[test]
    fn tap_switches_between_panels() {
        let mut menu = narrow();

        menu.tap(0);
        menu.tap(1);
        assert_eq!(menu.active(), Some(1));
    }

    #[test]
    fn direct_links_never_open() {
        let mut menu = wide();

        menu.pointer_enter(2);
        assert_eq!(menu.active(), None);

        menu.tap(0);
        menu.tap(2);
        assert_eq!(menu.active(), None);

        menu.tap(42);
        assert_eq!(menu.active(), None);
    }
}
