use crate::auth::{AdminAuthProvider, GateHandle, LogoutButton};
use crate::auth_guard::RequireAdmin;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AdminAppProps {
    pub gate: GateHandle,
}

/// Composition root: owns nothing itself, the gate is handed in by `main`
#[function_component(AdminApp)]
pub fn admin_app(props: &AdminAppProps) -> Html {
    html! {
        <AdminAuthProvider gate={props.gate.clone()}>
            <RequireAdmin>
                <AdminDashboard />
            </RequireAdmin>
        </AdminAuthProvider>
    }
}

#[function_component(AdminDashboard)]
fn admin_dashboard() -> Html {
    html! {
        <div class="min-h-screen bg-gray-50 dark:bg-gray-900">
            <nav class="bg-white dark:bg-gray-800 border-b border-gray-200 dark:border-gray-700">
                <div class="max-w-7xl mx-auto px-4 flex justify-between h-16 items-center">
                    <h1 class="text-2xl font-bold text-gray-900 dark:text-white">{"Admin"}</h1>
                    <LogoutButton />
                </div>
            </nav>
            <main class="max-w-7xl mx-auto p-6">
                <p class="text-gray-600 dark:text-gray-400">{"You are signed in for this browser tab."}</p>
            </main>
        </div>
    }
}
