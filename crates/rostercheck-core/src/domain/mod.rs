pub mod contact;
pub mod email;
pub mod name;
pub mod phone;

pub use contact::{CanonicalContact, RawContact};
pub use email::normalize_email;
pub use name::normalize_name;
pub use phone::normalize_phone;
