use constcat::concat;

mod components;
mod header;
mod menu;
mod showroom;
mod variables;

use components::BASE_COMPONENTS;
use header::HEADER_STYLES;
use menu::MENU_STYLES;
use showroom::SHOWROOM_STYLES;
use variables::CSS_VARIABLES;

// everything the app injects at the root, in cascade order
pub const STOREFRONT_STYLES: &str = concat!(
    r#"
/* Global resets and base styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

body {
  font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
  color: var(--text-primary);
  background-color: var(--background);
  line-height: 1.5;
  transition: background-color var(--transition-normal) var(--easing-standard),
              color var(--transition-normal) var(--easing-standard);
}

a {
  color: var(--primary);
  text-decoration: none;
}

a:hover {
  text-decoration: underline;
}
"#,
    CSS_VARIABLES,
    BASE_COMPONENTS,
    HEADER_STYLES,
    MENU_STYLES,
    SHOWROOM_STYLES
);
