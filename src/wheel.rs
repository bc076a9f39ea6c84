pub mod engine;
pub mod sector;

pub use engine::WheelEngine;
pub use sector::sector_width;
