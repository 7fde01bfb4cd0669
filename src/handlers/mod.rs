pub mod agenda;
pub mod conference_info;
pub mod countdown;
pub mod health;
pub mod partners;
pub mod registrations;
pub mod speakers;
pub mod web;

pub use agenda::*;
pub use conference_info::*;
pub use countdown::*;
pub use health::*;
pub use partners::*;
pub use registrations::*;
pub use speakers::*;
