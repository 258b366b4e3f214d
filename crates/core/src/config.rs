//! Session gate configuration

/// Admin session configuration
pub struct GateConfig;

impl GateConfig {
    /// Session storage key holding the authenticated flag
    pub const STORAGE_KEY: &'static str = "admin_authenticated";

    /// Stored value meaning "authenticated". Anything else reads as anonymous.
    pub const AUTHENTICATED_VALUE: &'static str = "true";

    /// Built-in admin username
    pub const ADMIN_USERNAME: &'static str = "admin";

    /// Built-in admin password. Shipped in the artifact, so not a secret.
    pub const ADMIN_PASSWORD: &'static str = "admin123";
}
