//! Admin authentication context and provider

use crate::storage::BrowserStore;
use session_gate_core::{AuthStatus, Credentials, SessionGate};
use std::ops::Deref;
use std::rc::Rc;
use yew::prelude::*;

/// The gate used by the admin UI
pub type AdminGate = SessionGate<BrowserStore>;

/// Shared handle to the admin gate, built once by the composition root
#[derive(Clone, Debug)]
pub struct GateHandle(Rc<AdminGate>);

impl GateHandle {
    pub fn new(gate: AdminGate) -> Self {
        Self(Rc::new(gate))
    }

    /// Gate over this tab's sessionStorage with the built-in admin pair
    pub fn from_session_storage() -> Self {
        Self::new(SessionGate::new(BrowserStore::session()))
    }

    pub fn with_credentials(store: BrowserStore, credentials: Credentials) -> Self {
        Self::new(SessionGate::with_credentials(store, credentials))
    }
}

impl Deref for GateHandle {
    type Target = AdminGate;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PartialEq for GateHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Authentication context handed to components
#[derive(Clone, Debug, PartialEq)]
pub struct AdminAuthContext {
    gate: GateHandle,
    status: AuthStatus,
}

impl AdminAuthContext {
    pub fn status(&self) -> AuthStatus {
        self.status
    }

    pub fn is_authenticated(&self) -> bool {
        self.status.is_authenticated()
    }

    /// Returns `false` when the pair is rejected
    pub fn login(&self, username: &str, password: &str) -> bool {
        self.gate.login(username, password)
    }

    pub fn logout(&self) {
        self.gate.logout();
    }
}

/// Auth provider props
#[derive(Properties, PartialEq)]
pub struct AdminAuthProviderProps {
    pub gate: GateHandle,
    pub children: Children,
}

/// Mirrors the gate status into component state so consumers re-render
#[function_component(AdminAuthProvider)]
pub fn admin_auth_provider(props: &AdminAuthProviderProps) -> Html {
    let status = use_state(|| props.gate.status());

    {
        let status = status.clone();
        use_effect_with(props.gate.clone(), move |gate| {
            let id = gate.subscribe(move |next| status.set(next));

            let gate = gate.clone();
            move || {
                gate.unsubscribe(id);
            }
        });
    }

    let context = AdminAuthContext {
        gate: props.gate.clone(),
        status: *status,
    };

    html! {
        <ContextProvider<AdminAuthContext> context={context}>
            {props.children.clone()}
        </ContextProvider<AdminAuthContext>>
    }
}

/// Hook to use the admin auth context
#[hook]
pub fn use_admin_auth() -> AdminAuthContext {
    use_context::<AdminAuthContext>()
        .expect("AdminAuthContext not found. Make sure to wrap your component with AdminAuthProvider")
}

/// Hook to check if the admin is logged in
#[hook]
pub fn use_is_admin() -> bool {
    let auth = use_admin_auth();
    auth.is_authenticated()
}
