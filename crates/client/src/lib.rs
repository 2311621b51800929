//! Clients for the MEATER cloud
//!
//! - [`MeaterClient`] talks to the private API used by the mobile app. It
//!   presents itself as the iOS app, persists its access token and device id
//!   in a [`SessionStore`], and returns the full cook history.
//! - [`PublicClient`] talks to the documented public API, which only reports
//!   live device state.

pub mod cloud;
pub mod credentials;
pub mod error;
mod http;
pub mod public;
pub mod session;

pub use cloud::MeaterClient;
pub use credentials::Credentials;
pub use error::{ClientError, Result};
pub use public::PublicClient;
pub use session::{Session, SessionError, SessionStore};
