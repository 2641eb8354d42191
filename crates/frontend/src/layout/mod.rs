pub mod center;
pub mod global_context;
pub mod header;
pub mod left;

use global_context::AppGlobalContext;
use leptos::prelude::*;

/// Application shell.
///
/// ```text
/// +------------------------------------------+
/// |                 Header                   |
/// +------------------------------------------+
/// |  Left (navbar)  |        Center          |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    // Runs once when the shell is created.
    ctx.init_router_integration();

    view! {
        <div class="app-layout">
            <header::Header />
            <div class="app-body">
                <left::Left>
                    <left::navbar::Navbar />
                </left::Left>
                <div class="app-main">
                    <center::Center />
                </div>
            </div>
        </div>
    }
}
