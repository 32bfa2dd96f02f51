pub mod profile;
pub mod rankings;
pub mod resolver;
