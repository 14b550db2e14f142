pub mod edit_user;

pub use edit_user::{EditUserForm, FormPhase, UserField};
