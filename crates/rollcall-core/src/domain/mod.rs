pub mod email;
pub mod registration;

pub use email::{is_valid_email, normalize_email};
pub use registration::Registration;
