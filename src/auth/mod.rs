//! Authentication
//!
//! Password hashing (Argon2id) and cookie-carried session tokens. The
//! session is the capability check for every page and audio fetch; handlers
//! take a [`CurrentUser`] extractor and anonymous requests are redirected
//! to the login page.

pub mod password;
pub mod session;

pub use session::{AuthRedirect, Claims, CurrentUser, SESSION_COOKIE};
