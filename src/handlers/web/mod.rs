pub mod home;
pub mod placeholder;

pub use home::*;
