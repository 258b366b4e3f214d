//! Authentication guard for the admin screens

use crate::auth::{LoginForm, use_is_admin};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RequireAdminProps {
    pub children: Children,
}

/// Shows the login form until the admin is authenticated
#[function_component(RequireAdmin)]
pub fn require_admin(props: &RequireAdminProps) -> Html {
    let is_admin = use_is_admin();

    if is_admin {
        return html! { <>{ props.children.clone() }</> };
    }

    html! {
        <div class="min-h-screen bg-gray-50 dark:bg-gray-900 flex items-center justify-center px-4">
            <div class="bg-white dark:bg-gray-800 rounded-lg shadow-lg p-8">
                <LoginForm />
            </div>
        </div>
    }
}
