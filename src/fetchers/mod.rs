pub mod profile;
pub mod remainder;
pub mod roster;
pub mod top100;
