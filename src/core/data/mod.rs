pub mod colour;
pub mod pixel_rect;
pub mod point;
pub mod texture;
