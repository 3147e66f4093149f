//! Pure validators and decoders for contact fields.
//!
//! None of these fail: malformed input yields `false` or `None`.

pub mod email;
pub mod flags;
pub mod phone;

pub use email::is_valid_email;
pub use flags::{decode_invisible, decode_see_all};
pub use phone::{format_phone_national, is_valid_phone};
