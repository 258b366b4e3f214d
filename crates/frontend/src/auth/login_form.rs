//! Username/password form for the admin area

use crate::auth::use_admin_auth;
use yew::prelude::*;

pub const REJECTED_MESSAGE: &str = "Invalid username or password";

#[function_component(LoginForm)]
pub fn login_form() -> Html {
    let auth = use_admin_auth();
    let username = use_state(String::new);
    let password = use_state(String::new);
    let rejected = use_state(|| false);

    let on_username_input = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            username.set(input.value());
        })
    };

    let on_password_input = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let username = username.clone();
        let password = password.clone();
        let rejected = rejected.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if auth.login(&username, &password) {
                rejected.set(false);
            } else {
                rejected.set(true);
                password.set(String::new());
            }
        })
    };

    html! {
        <form class="space-y-4 w-full max-w-sm" onsubmit={on_submit}>
            <h2 class="text-xl font-semibold text-center text-gray-900 dark:text-white">{"Admin sign in"}</h2>

            if *rejected {
                <div class="bg-red-500/20 border border-red-500/30 rounded-lg p-3 text-center">
                    <p class="text-red-600 dark:text-red-200 text-sm">{REJECTED_MESSAGE}</p>
                </div>
            }

            <input
                type="text"
                autocomplete="username"
                class="w-full px-4 py-3 border border-gray-300 dark:border-gray-600 rounded-lg focus:outline-none focus:border-blue-400"
                placeholder="Username"
                value={(*username).clone()}
                oninput={on_username_input}
            />
            <input
                type="password"
                autocomplete="current-password"
                class="w-full px-4 py-3 border border-gray-300 dark:border-gray-600 rounded-lg focus:outline-none focus:border-blue-400"
                placeholder="Password"
                value={(*password).clone()}
                oninput={on_password_input}
            />
            <button
                type="submit"
                class="w-full px-4 py-3 bg-blue-600 hover:bg-blue-700 text-white rounded-lg font-medium transition-all disabled:opacity-50"
                disabled={username.is_empty()}
            >
                {"Sign In"}
            </button>
        </form>
    }
}

/// Ends the admin session
#[function_component(LogoutButton)]
pub fn logout_button() -> Html {
    let auth = use_admin_auth();

    let on_logout = Callback::from(move |_| {
        auth.logout();
    });

    html! {
        <button onclick={on_logout} class="text-sm text-gray-600 dark:text-gray-400 hover:text-gray-900 dark:hover:text-gray-100">
            {"Sign Out"}
        </button>
    }
}
