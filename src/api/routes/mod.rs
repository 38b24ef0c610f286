pub mod meta;
pub mod navigation;
pub mod standings;
