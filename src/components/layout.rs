//! Layout Component
//!
//! Header above a centered, fixed-width content column.

use leptos::prelude::*;

use super::Header;

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="layout">
            <Header />
            <main class="layout-main">{children()}</main>
        </div>
    }
}
