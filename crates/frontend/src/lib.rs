pub mod app;
pub mod auth;
pub mod auth_guard;
pub mod logging;
pub mod storage;

pub use app::AdminApp;
pub use auth::{AdminAuthContext, AdminAuthProvider, GateHandle};
pub use storage::BrowserStore;
