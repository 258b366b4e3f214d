//! Admin session gate: a single-pair credential check and a tab-scoped
//! authenticated flag

pub mod config;
pub mod credentials;
pub mod error;
pub mod gate;
pub mod store;

pub use config::GateConfig;
pub use credentials::Credentials;
pub use error::{StoreError, StoreResult};
pub use gate::{AuthStatus, SessionGate, SubscriptionId};
pub use store::{MemoryStore, SessionStore};
