use dioxus::prelude::*;

// inline line icons (24x24, stroked with currentColor)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconKind {
    ArrowRight,
    ChevronDown,
    Circle,
    CircleCheck,
    CircleHelp,
    Clock,
    Flame,
    MapPin,
    Menu,
    Moon,
    Search,
    Shield,
    Star,
    Sun,
    X,
    Zap,
}

#[derive(Clone, PartialEq, Props)]
pub struct IconProps {
    kind: IconKind,
    #[props(into, default = String::from("icon"))]
    class: String,
}

#[component]
pub fn Icon(props: IconProps) -> Element {
    rsx! {
        svg {
            class: "{props.class}",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            match props.kind {
                IconKind::ArrowRight => rsx! {
                    path { d: "M5 12h14" }
                    path { d: "m12 5 7 7-7 7" }
                },
                IconKind::ChevronDown => rsx! {
                    path { d: "m6 9 6 6 6-6" }
                },
                IconKind::Circle => rsx! {
                    circle { cx: "12", cy: "12", r: "10" }
                },
                IconKind::CircleCheck => rsx! {
                    circle { cx: "12", cy: "12", r: "10" }
                    path { d: "m9 12 2 2 4-4" }
                },
                IconKind::CircleHelp => rsx! {
                    circle { cx: "12", cy: "12", r: "10" }
                    path { d: "M9.09 9a3 3 0 0 1 5.83 1c0 2-3 3-3 3" }
                    path { d: "M12 17h.01" }
                },
                IconKind::Clock => rsx! {
                    circle { cx: "12", cy: "12", r: "10" }
                    polyline { points: "12 6 12 12 16 14" }
                },
                IconKind::Flame => rsx! {
                    path { d: "M8.5 14.5A2.5 2.5 0 0 0 11 12c0-1.38-.5-2-1-3-1.072-2.143-.224-4.054 2-6 .5 2.5 2 4.9 4 6.5 2 1.6 3 3.5 3 5.5a7 7 0 1 1-14 0c0-1.153.433-2.294 1-3a2.5 2.5 0 0 0 2.5 2.5z" }
                },
                IconKind::MapPin => rsx! {
                    path { d: "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z" }
                    circle { cx: "12", cy: "10", r: "3" }
                },
                IconKind::Menu => rsx! {
                    line { x1: "4", x2: "20", y1: "12", y2: "12" }
                    line { x1: "4", x2: "20", y1: "6", y2: "6" }
                    line { x1: "4", x2: "20", y1: "18", y2: "18" }
                },
                IconKind::Moon => rsx! {
                    path { d: "M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z" }
                },
                IconKind::Search => rsx! {
                    circle { cx: "11", cy: "11", r: "8" }
                    path { d: "m21 21-4.3-4.3" }
                },
                IconKind::Shield => rsx! {
                    path { d: "M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z" }
                },
                IconKind::Star => rsx! {
                    polygon { points: "12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2" }
                },
                IconKind::Sun => rsx! {
                    circle { cx: "12", cy: "12", r: "4" }
                    path { d: "M12 2v2" }
                    path { d: "M12 20v2" }
                    path { d: "m4.93 4.93 1.41 1.41" }
                    path { d: "m17.66 17.66 1.41 1.41" }
                    path { d: "M2 12h2" }
                    path { d: "M20 12h2" }
                    path { d: "m6.34 17.66-1.41 1.41" }
                    path { d: "m19.07 4.93-1.41 1.41" }
                },
                IconKind::X => rsx! {
                    path { d: "M18 6 6 18" }
                    path { d: "m6 6 12 12" }
                },
                IconKind::Zap => rsx! {
                    polygon { points: "13 2 3 14 12 14 11 22 21 10 12 10 13 2" }
                },
            }
        }
    }
}
