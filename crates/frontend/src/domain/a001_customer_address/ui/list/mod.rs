pub mod state;

use crate::domain::a001_customer_address::api;
use crate::domain::a001_customer_address::ui::details::AddressDetails;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table_checkbox::TableCheckbox;
use crate::shared::config::config;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    get_sort_class, get_sort_indicator, highlight_matches, toggle_sort, SearchInput,
};
use crate::shared::modal_stack::ModalStackService;
use contracts::domain::a001_customer_address::aggregate::{CustomerAddress, CustomerId};
use contracts::domain::common::AggregateRoot;
use contracts::shared::list_query::StatusFilter;
use leptos::prelude::*;
use leptos::task::spawn_local;
use state::{create_state, delete_outcome_message, AddressRow};
use std::collections::HashSet;
use thaw::*;

const MODAL_STYLE: &str = "max-width: min(760px, 95vw); width: min(760px, 95vw);";

#[component]
pub fn CustomerAddressList() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let list_config = &config().list;
    let page_size_options = list_config.page_size_options.clone();
    let state = create_state(list_config.default_page_size);

    let all_rows: RwSignal<Vec<AddressRow>> = RwSignal::new(Vec::new());
    let default_address: RwSignal<Option<CustomerAddress>> = RwSignal::new(None);
    let selected: RwSignal<HashSet<String>> = RwSignal::new(HashSet::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let customer_input = RwSignal::new(String::new());

    let refresh_view = move || {
        let rows = all_rows.get_untracked();
        state.update(|s| s.apply(&rows));
    };

    let load_default = move |ticket: u64, customer_id: Option<CustomerId>| {
        default_address.set(None);
        let Some(customer_id) = customer_id else {
            return;
        };
        spawn_local(async move {
            let result = api::fetch_default(customer_id).await;
            if !state.with_untracked(|s| s.is_current_load(ticket)) {
                return;
            }
            match result {
                Ok(address) => default_address.set(address),
                Err(e) => log::warn!("Default address of customer {}: {}", customer_id, e),
            }
        });
    };

    // `notice` replaces the error banner once the reload is done, so the
    // outcome of the action that triggered the reload stays visible.
    let load_data_with = move |notice: Option<String>| {
        set_loading.set(true);
        let (ticket, customer_filter) = state
            .try_update(|s| (s.begin_load(), s.customer_filter))
            .unwrap_or_default();
        spawn_local(async move {
            let result = match customer_filter {
                Some(customer_id) => api::fetch_by_customer(customer_id).await,
                None => api::fetch_all().await,
            };
            if !state.with_untracked(|s| s.is_current_load(ticket)) {
                log::debug!("Dropping stale address list response #{}", ticket);
                return;
            }
            match result {
                Ok(data) => {
                    log::debug!("Loaded {} addresses", data.len());
                    all_rows.set(data.into_iter().map(AddressRow::from).collect());
                    selected.set(HashSet::new());
                    state.update(|s| s.is_loaded = true);
                    refresh_view();
                    set_error.set(notice);
                }
                Err(e) => set_error.set(Some(format!("Không tải được danh sách địa chỉ: {}", e))),
            }
            set_loading.set(false);
        });
        load_default(ticket, customer_filter);
    };

    let load_data = move || load_data_with(None);

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_data();
        }
    });

    let open_details_modal = move |existing: Option<CustomerAddress>| {
        let default_customer_id = state.with_untracked(|s| s.customer_filter);
        modal_stack.push_with_frame(
            Some(MODAL_STYLE.to_string()),
            Some("address-modal".to_string()),
            move |handle| {
                view! {
                    <AddressDetails
                        existing=existing.clone()
                        default_customer_id=default_customer_id
                        on_saved=Callback::new({
                            let handle = handle.clone();
                            move |_| {
                                handle.close();
                                load_data();
                            }
                        })
                        on_cancel=Callback::new({
                            let handle = handle.clone();
                            move |_| handle.close()
                        })
                    />
                }
                .into_any()
            },
        );
    };

    let delete_selected = move || {
        let keys = selected.get_untracked();
        let targets: Vec<CustomerAddress> = all_rows.with_untracked(|rows| {
            rows.iter()
                .filter(|r| keys.contains(&r.key))
                .map(|r| r.address.clone())
                .collect()
        });
        if targets.is_empty() {
            return;
        }

        let confirmed = web_sys::window()
            .and_then(|win| {
                win.confirm_with_message(&format!(
                    "Xóa {} địa chỉ đã chọn?",
                    targets.len()
                ))
                .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        spawn_local(async move {
            let mut results = Vec::with_capacity(targets.len());
            for address in &targets {
                let Some(id) = address.id else {
                    continue;
                };
                let result = api::delete(id, address.customer_id).await;
                if let Err(e) = &result {
                    log::warn!("Delete of address {} failed: {}", id.value(), e);
                }
                results.push(result);
            }
            let notice = delete_outcome_message(&results);
            if notice.is_none() {
                log::info!("Deleted {} addresses", results.len());
            }
            load_data_with(notice);
        });
    };

    let make_default = move |address: CustomerAddress| {
        let Some(id) = address.id else {
            return;
        };
        spawn_local(async move {
            match api::set_default(id, address.customer_id).await {
                Ok(()) => load_data(),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let on_search = move |query: String| {
        state.update(|s| {
            s.search_query = query;
            s.page = 0;
        });
        refresh_view();
    };

    let apply_customer_filter = move || {
        let text = customer_input.get_untracked();
        let text = text.trim();
        let filter = if text.is_empty() {
            None
        } else {
            match text.parse::<CustomerId>() {
                Ok(id) if id > 0 => Some(id),
                _ => {
                    set_error.set(Some("Mã khách hàng phải là số nguyên dương".to_string()));
                    return;
                }
            }
        };
        state.update(|s| {
            s.customer_filter = filter;
            s.page = 0;
        });
        load_data();
    };

    let sort_by = move |field: &'static str| {
        move |_| {
            state.update(|s| {
                let (sort_field, ascending) = toggle_sort(&s.sort_field, s.sort_ascending, field);
                s.sort_field = sort_field;
                s.sort_ascending = ascending;
            });
            refresh_view();
        }
    };

    let header = move |field: &'static str, title: &'static str| {
        view! {
            <TableHeaderCell>
                <div class="table__sortable-header" style="cursor: pointer;" on:click=sort_by(field)>
                    {title}
                    <span class=move || state.with(|s| get_sort_class(&s.sort_field, field))>
                        {move || state.with(|s| get_sort_indicator(&s.sort_field, field, s.sort_ascending))}
                    </span>
                </div>
            </TableHeaderCell>
        }
    };

    let go_to_page = move |page: usize| {
        state.update(|s| s.page = page);
        refresh_view();
    };

    let change_page_size = move |size: usize| {
        state.update(|s| {
            s.page_size = size;
            s.page = 0;
        });
        refresh_view();
    };

    let all_on_page_selected = move || {
        let items = state.with(|s| s.items.clone());
        let sel = selected.get();
        !items.is_empty() && items.iter().all(|r| sel.contains(&r.key))
    };

    let toggle_all = move |check_all: bool| {
        let keys: Vec<String> = state.with_untracked(|s| s.items.iter().map(|r| r.key.clone()).collect());
        selected.update(|sel| {
            for key in keys {
                if check_all {
                    sel.insert(key);
                } else {
                    sel.remove(&key);
                }
            }
        });
    };

    let search_value = Signal::derive(move || state.with(|s| s.search_query.clone()));

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    {icon("map-pin")}
                    <h1 class="page__title">{CustomerAddress::list_name()}</h1>
                    <Badge>{move || state.with(|s| s.total_count).to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| open_details_modal(None)>
                        {icon("plus")}
                        " Thêm mới"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| delete_selected()
                        disabled=Signal::derive(move || selected.with(|s| s.is_empty()))
                    >
                        {icon("delete")}
                        {move || format!(" Xóa ({})", selected.with(|s| s.len()))}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_data()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Đang tải..." } else { " Làm mới" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="filter-panel">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <SearchInput
                            value=search_value
                            on_change=Callback::new(on_search)
                            placeholder="Tên, số điện thoại hoặc địa chỉ..."
                        />
                        <select
                            class="form__select"
                            prop:value=move || state.with(|s| s.status.as_str().to_string())
                            on:change=move |ev| {
                                let status = StatusFilter::parse(&event_target_value(&ev));
                                state.update(|s| {
                                    s.status = status;
                                    s.page = 0;
                                });
                                refresh_view();
                            }
                        >
                            <option value="all">"Tất cả trạng thái"</option>
                            <option value="active">"Hoạt động"</option>
                            <option value="inactive">"Không hoạt động"</option>
                        </select>
                        <label class="form__checkbox">
                            <input
                                type="checkbox"
                                prop:checked=move || state.with(|s| s.default_only)
                                on:change=move |ev| {
                                    let checked = event_target_checked(&ev);
                                    state.update(|s| {
                                        s.default_only = checked;
                                        s.page = 0;
                                    });
                                    refresh_view();
                                }
                            />
                            " Chỉ địa chỉ mặc định"
                        </label>
                        <div style="max-width: 160px;">
                            <Input value=customer_input placeholder="Mã khách hàng" />
                        </div>
                        <Button appearance=ButtonAppearance::Primary on_click=move |_| apply_customer_filter()>
                            "Lọc"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| {
                                customer_input.set(String::new());
                                apply_customer_filter();
                            }
                        >
                            "Bỏ lọc"
                        </Button>
                        <PaginationControls
                            current_page=Signal::derive(move || state.with(|s| s.page))
                            total_pages=Signal::derive(move || state.with(|s| s.total_pages))
                            total_count=Signal::derive(move || state.with(|s| s.total_count))
                            page_size=Signal::derive(move || state.with(|s| s.page_size))
                            on_page_change=Callback::new(go_to_page)
                            on_page_size_change=Callback::new(change_page_size)
                            page_size_options=page_size_options
                        />
                    </Flex>
                </div>

                {move || state.with(|s| s.customer_filter).map(|customer_id| {
                    let text = default_address
                        .get()
                        .map(|a| a.full_address())
                        .unwrap_or_else(|| "Chưa có địa chỉ mặc định".to_string());
                    view! {
                        <div class="alert alert--info">
                            {icon("star")}
                            {format!(" Khách hàng #{}: {}", customer_id, text)}
                        </div>
                    }
                })}

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <th class="table__cell table__cell--checkbox">
                                    <input
                                        type="checkbox"
                                        class="table__checkbox"
                                        prop:checked=all_on_page_selected
                                        on:change=move |ev| toggle_all(event_target_checked(&ev))
                                    />
                                </th>
                                {header("recipient", "Người nhận")}
                                {header("phone", "Số điện thoại")}
                                {header("address", "Địa chỉ")}
                                {header("customer", "Khách hàng")}
                                {header("is_default", "Mặc định")}
                                {header("is_active", "Trạng thái")}
                                {header("created_at", "Ngày tạo")}
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || state.with(|s| s.items.clone())
                                key=|row| (row.key.clone(), row.address.updated_at.clone(), row.address.is_default)
                                children=move |row| {
                                    let key = row.key.clone();
                                    let key_for_check = row.key.clone();
                                    let for_edit = row.address.clone();
                                    let for_default = row.address.clone();
                                    let is_default = row.address.is_default;
                                    let query = move || state.with(|s| s.search_query.clone());
                                    let recipient = row.recipient.clone();
                                    let phone = row.phone.clone();
                                    let full_address = row.full_address.clone();
                                    let default_label = row.address.default_label();
                                    let status_label = row.address.status_label();
                                    view! {
                                        <TableRow>
                                            <TableCheckbox
                                                checked=Signal::derive(move || selected.with(|s| s.contains(&key_for_check)))
                                                on_change=Callback::new(move |checked: bool| {
                                                    let key = key.clone();
                                                    selected.update(|s| {
                                                        if checked { s.insert(key); } else { s.remove(&key); }
                                                    });
                                                })
                                            />
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {move || highlight_matches(&recipient, &query())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{move || highlight_matches(&phone, &query())}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {move || highlight_matches(&full_address, &query())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format!("#{}", row.address.customer_id)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class={if is_default { "badge badge--warning" } else { "badge badge--neutral" }}>
                                                        {default_label}
                                                    </span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class={if row.address.is_active { "badge badge--success" } else { "badge badge--error" }}>
                                                        {status_label}
                                                    </span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{row.created_at.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| open_details_modal(Some(for_edit.clone()))
                                                    attr:title="Sửa"
                                                >
                                                    {icon("edit")}
                                                </Button>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| make_default(for_default.clone())
                                                    disabled=is_default
                                                    attr:title="Đặt làm mặc định"
                                                >
                                                    {icon("star")}
                                                </Button>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>
            </div>
        </div>
    }
}
