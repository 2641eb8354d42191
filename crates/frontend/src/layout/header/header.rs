use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <header data-zone="header" class="header">
            <div class="header__actions">
                <button
                    class="button button--ghost"
                    aria-label="Ẩn/hiện menu"
                    on:click=move |_| ctx.toggle_left()
                >
                    {icon("menu")}
                </button>
            </div>
            <div class="header__content">
                <span class="header__title">"Quản lý bán hàng"</span>
            </div>
        </header>
    }
}
