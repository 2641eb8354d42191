use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::shared::modal_stack::{ModalHost, ModalStackService};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    // Modal stack for create/edit dialogs
    provide_context(ModalStackService::new());

    view! {
        <Shell />
        <ModalHost />
    }
}
