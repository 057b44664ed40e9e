pub mod car_card;
pub mod header;
pub mod icons;
pub mod image;
pub mod nav_menu;
pub mod theme_toggle;
