use dioxus::prelude::*;

const COLUMNS: &[(&str, &[&str])] = &[
    ("Purchase", &["Build Your Car", "Book a Test Drive"]),
    ("Owners", &["Service Booking", "Roadside Assistance"]),
    ("About Us", &["Sustainability", "Careers"]),
];

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { id: "services", class: "site-footer",
            div { class: "container",
                div { class: "footer-grid",
                    for (heading, items) in COLUMNS.iter().copied() {
                        div { key: "{heading}",
                            h4 { "{heading}" }
                            ul {
                                for item in items.iter() {
                                    li { key: "{item}", "{item}" }
                                }
                            }
                        }
                    }

                    div {
                        h4 { "Stay Connected" }
                        // no backend behind this; the form is presentational
                        form {
                            class: "newsletter",
                            onsubmit: move |event| event.prevent_default(),
                            input {
                                r#type: "email",
                                name: "email",
                                placeholder: "Email Address",
                                "aria-label": "Email Address",
                            }
                            button { r#type: "submit", "Go" }
                        }
                    }
                }

                div { class: "footer-legal",
                    p { "© 2024 Project Clone. For educational purposes only." }
                }
            }
        }
    }
}
