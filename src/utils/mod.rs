pub mod countdown;
pub mod schedule;
pub mod validate;

pub use countdown::compute_countdown;
pub use schedule::day_bounds;
pub use validate::{require_email, require_non_empty, require_optional_url, require_url};
