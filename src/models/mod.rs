pub mod agenda;
pub mod conference_info;
pub mod countdown;
pub mod partner;
pub mod registration;
pub mod speaker;

pub use agenda::*;
pub use conference_info::*;
pub use countdown::*;
pub use partner::*;
pub use registration::*;
pub use speaker::*;
