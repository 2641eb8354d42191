use leptos::prelude::*;

/// Labelled `<select>` over plain string options.
///
/// The empty value is rendered as the `placeholder` entry. When `value` is
/// not among `options` (a record loaded with stale data) it is still shown
/// as an extra entry so the user sees what is stored.
#[component]
pub fn Select(
    #[prop(optional, into)]
    label: MaybeProp<String>,
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<String>,
    #[prop(into)]
    options: Signal<Vec<String>>,
    #[prop(optional, into)]
    placeholder: String,
    #[prop(into)]
    disabled: Signal<bool>,
    #[prop(optional)]
    required: bool,
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let select_id = move || id.get().unwrap_or_default();

    let entries = move || {
        let current = value.get();
        let mut entries = options.get();
        if !current.is_empty() && !entries.contains(&current) {
            entries.insert(0, current);
        }
        entries
    };

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=select_id>
                    {l}
                    {required.then(|| view! { <span class="form__required">" *"</span> })}
                </label>
            })}
            <select
                id=select_id
                class="form__select"
                disabled=move || disabled.get()
                required=required
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value="" selected=move || value.get().is_empty()>
                    {placeholder}
                </option>
                <For
                    each=entries
                    key=|val| val.clone()
                    children=move |val| {
                        let val_clone = val.clone();
                        let is_selected = move || value.get() == val_clone;
                        view! {
                            <option value=val.clone() selected=is_selected>
                                {val.clone()}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}
