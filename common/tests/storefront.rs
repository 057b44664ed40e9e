use common::{
    NARROW_VIEWPORT_WIDTH, SCROLL_THRESHOLD,
    catalog::{CAR_DATA, recently_added, top_bought},
    header::{HeaderController, HeaderState},
    menu::{MenuController, MenuMode, NAV_TAXONOMY, ViewportClass},
    signal::ScrollFeed,
    theme::{self, MemoryTheme, ThemeIcon, ThemePreference, ThemeProvider},
};

#[test]
fn header_is_solid_past_threshold_with_menu_closed() {
    let mut offset = 0.0;
    while offset <= 200.0 {
        let mut state = HeaderState::default();
        state.on_scroll(offset, SCROLL_THRESHOLD);
        assert_eq!(state.is_solid(), offset > 50.0, "offset {offset}");
        offset += 0.5;
    }
}

#[test]
fn header_is_solid_whenever_menu_is_open() {
    let feed = ScrollFeed::new();
    let header = HeaderController::mount(&feed, SCROLL_THRESHOLD);

    header.toggle_menu();

    for offset in [0.0, 50.0, 75.0, 5_000.0, 3.0] {
        feed.emit(&offset);
        assert!(header.is_solid(), "offset {offset}");
    }
}

#[test]
fn theme_toggle_round_trips() {
    for start in [ThemePreference::Light, ThemePreference::Dark] {
        let mut provider = MemoryTheme::new(start);

        theme::toggle(&mut provider);
        assert_ne!(provider.current(), start);

        theme::toggle(&mut provider);
        assert_eq!(provider.current(), start);
    }
}

#[test]
fn theme_icon_points_at_target() {
    assert_eq!(ThemePreference::Light.icon(), ThemeIcon::Moon);
    assert_eq!(ThemePreference::Dark.icon(), ThemeIcon::Sun);
}

#[test]
fn overlay_link_always_dismisses() {
    let feed = ScrollFeed::new();
    let header = HeaderController::mount(&feed, SCROLL_THRESHOLD);

    assert!(!header.select_link().menu_open);

    header.toggle_menu();
    assert!(header.state().menu_open);
    assert!(!header.select_link().menu_open);
}

#[test]
fn catalog_partitions_overlap() {
    let recent: Vec<_> = recently_added(CAR_DATA).iter().map(|car| car.id).collect();
    let top: Vec<_> = top_bought(CAR_DATA).iter().map(|car| car.id).collect();

    assert_eq!(CAR_DATA.len(), 5);
    assert_eq!(recent, ["1", "2", "4"]);
    assert_eq!(top, ["1", "3", "5"]);
    assert!(recent.contains(&"1") && top.contains(&"1"));
}

#[test]
fn viewport_decision_is_fixed_at_mount() {
    let narrow = MenuController::mount(NAV_TAXONOMY, 800.0, NARROW_VIEWPORT_WIDTH);
    assert_eq!(narrow.viewport(), ViewportClass::Narrow);
    assert_eq!(narrow.mode(), MenuMode::InPlace);

    let wide = MenuController::mount(NAV_TAXONOMY, 1280.0, NARROW_VIEWPORT_WIDTH);
    assert_eq!(wide.viewport(), ViewportClass::Wide);
    assert_eq!(wide.mode(), MenuMode::Floating);

    narrow.on_resize(1280.0);
    wide.on_resize(800.0);

    assert_eq!(narrow.viewport(), ViewportClass::Narrow);
    assert_eq!(wide.viewport(), ViewportClass::Wide);
}

#[test]
fn unmounted_header_leaves_no_listeners() {
    let feed = ScrollFeed::new();

    let headers: Vec<_> = (0..3)
        .map(|_| HeaderController::mount(&feed, SCROLL_THRESHOLD))
        .collect();
    assert_eq!(feed.listener_count(), 3);

    drop(headers);
    assert_eq!(feed.listener_count(), 0);
}
