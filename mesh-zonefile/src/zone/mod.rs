pub mod builder;
pub mod render;
