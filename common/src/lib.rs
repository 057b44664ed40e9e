pub mod catalog;
pub mod config;
pub mod header;
pub mod image;
pub mod menu;
pub mod signal;
pub mod theme;

// layout constants
//
// these are the defaults baked into storefront.toml; the webapp reads the
// configured values, but the tests and the pure state modules lean on these
pub const SCROLL_THRESHOLD: f64 = 50.0;
pub const NARROW_VIEWPORT_WIDTH: f64 = 1024.0;
pub const MEDIUM_VIEWPORT_WIDTH: f64 = 768.0;

pub const BRAND_NAME: &str = "MERCEDES-BENZ";
pub const BRAND_MARK: &str = "M";
pub const MARKETPLACE_NAME: &str = "CarMarketPlace";
