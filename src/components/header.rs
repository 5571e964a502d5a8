//! Header Component

use leptos::prelude::*;

use super::AuthButton;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="app-header">
            <div>
                <ul>
                    <li>"目標管理"</li>
                </ul>
            </div>
            <AuthButton />
        </header>
    }
}
