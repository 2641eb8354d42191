use crate::domain::a001_customer_address::ui::list::CustomerAddressList;
use crate::layout::global_context::AppGlobalContext;
use contracts::domain::a001_customer_address::aggregate::CustomerAddress;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;

/// Renders the page selected in the navigation.
#[component]
pub fn Center() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let addresses_key = CustomerAddress::full_name();

    view! {
        <div data-zone="center" class="app-content" style="flex: 1; overflow: auto;">
            {move || {
                let active = ctx.active.get();
                if active == addresses_key {
                    view! { <CustomerAddressList /> }.into_any()
                } else {
                    view! { <div class="placeholder">{format!("Trang '{}' không tồn tại", active)}</div> }.into_any()
                }
            }}
        </div>
    }
}
