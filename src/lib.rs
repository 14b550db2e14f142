//! Client-side core for an HR administration console: typed contracts for
//! submission and user records, thin HTTP-client glue over the HR REST API,
//! the user edit-form reconciler, and the sidebar shell state.

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod form;
pub mod logging;
pub mod model;
pub mod nav;

pub use api::ApiClient;
pub use auth::{AuthSession, CurrentUser};
pub use config::Config;
pub use error::ApiError;
pub use form::{EditUserForm, FormPhase, UserField};
