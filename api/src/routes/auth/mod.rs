//! Authentication route handlers
//!
//! - `login`: issue and email a one-time code
//! - `verify`: check a submitted code

pub mod login;
pub mod verify;

pub use login::login;
pub use verify::verify;
