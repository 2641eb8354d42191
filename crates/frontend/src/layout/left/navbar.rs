use crate::layout::global_context::{menu_entries, AppGlobalContext};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <nav class="main-nav-bar">
            <ul>
                {menu_entries().into_iter().map(|entry| {
                    let key_for_class = entry.key.clone();
                    let key_for_click = entry.key.clone();
                    view! {
                        <li
                            class:active=move || ctx.active.get() == key_for_class
                            on:click=move |_| ctx.activate(&key_for_click)
                        >
                            {icon(entry.icon)}
                            <span>{entry.title}</span>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </nav>
    }
}
