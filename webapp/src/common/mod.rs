pub mod scroll;
pub mod storage;
pub mod style;
pub mod theme;
pub mod viewport;
