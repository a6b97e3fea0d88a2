pub mod atlas;
pub mod png;
pub mod texture;
