//! Admin authentication module

pub mod context;
pub mod login_form;

pub use context::{
    AdminAuthContext, AdminAuthProvider, AdminGate, GateHandle, use_admin_auth, use_is_admin,
};
pub use login_form::{LoginForm, LogoutButton};
