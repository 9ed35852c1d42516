//! Reusable UI components

mod contact_section;
mod toast;

pub use contact_section::*;
pub use toast::*;
