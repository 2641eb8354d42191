use super::view_model::AddressDetailsViewModel;
use crate::shared::components::ui::Select;
use crate::shared::icons::icon;
use contracts::domain::a001_customer_address::aggregate::{
    CustomerAddress, CustomerAddressDto, CustomerId,
};
use contracts::domain::a001_customer_address::form::AddressFormState;
use contracts::shared::cascade::Level;
use leptos::prelude::*;
use thaw::*;

/// Create/edit form for one address.
///
/// `existing` is `None` in create mode. The saved record (as returned by the
/// backend) is handed to `on_saved`; closing the modal is up to the caller.
#[component]
pub fn AddressDetails(
    existing: Option<CustomerAddress>,
    default_customer_id: Option<CustomerId>,
    on_saved: Callback<CustomerAddress>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = AddressDetailsViewModel::new(existing, default_customer_id);

    let text_field = move |id: &'static str,
                           label: &'static str,
                           placeholder: &'static str,
                           get: fn(&CustomerAddressDto) -> String,
                           set: fn(&mut AddressFormState, String)| {
        view! {
            <div class="form__group">
                <label class="form__label" for=id>
                    {label}
                    <span class="form__required">" *"</span>
                </label>
                <input
                    type="text"
                    id=id
                    class="form__input"
                    placeholder=placeholder
                    prop:value=move || vm.form.with(|f| get(f.record()))
                    prop:disabled=move || vm.saving.get()
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        vm.form.update(|f| set(f, value));
                    }
                />
            </div>
        }
    };

    let level_select = move |level: Level, id: &'static str, label: &'static str, placeholder: &'static str| {
        view! {
            <Select
                id=id
                label=label
                placeholder=placeholder
                required=true
                value=Signal::derive(move || vm.form.with(|f| f.selector().value(level).to_string()))
                options=Signal::derive(move || vm.form.with(|f| f.selector().options(level).to_vec()))
                disabled=Signal::derive(move || {
                    vm.saving.get() || !vm.form.with(|f| f.selector().level_enabled(level))
                })
                on_change=Callback::new(move |value: String| vm.set_level(level, value))
            />
        }
    };

    view! {
        <div class="details-container address-details">
            <div class="modal-header">
                <h2 class="modal-title">
                    {if vm.is_edit_mode() { "Cập nhật địa chỉ" } else { "Thêm địa chỉ mới" }}
                </h2>
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_cancel.run(())>
                    {icon("x")}
                </Button>
            </div>

            <div class="modal-body">
                {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="form__group">
                    <label class="form__label" for="address-customer-id">
                        "Mã khách hàng"
                        <span class="form__required">" *"</span>
                    </label>
                    <input
                        type="number"
                        min="1"
                        id="address-customer-id"
                        class="form__input"
                        prop:value=move || vm.customer_id.get()
                        prop:disabled=move || vm.is_edit_mode() || vm.saving.get()
                        on:input=move |ev| vm.customer_id.set(event_target_value(&ev))
                    />
                </div>

                <div class="form__row">
                    {text_field("address-recipient", "Tên người nhận", "Họ và tên", |r| r.recipient_name.clone(), |f, v| f.set_recipient_name(v))}
                    {text_field("address-phone", "Số điện thoại", "0901234567", |r| r.phone.clone(), |f, v| f.set_phone(v))}
                </div>

                {text_field("address-detail", "Địa chỉ chi tiết", "Số nhà, tên đường", |r| r.detail.clone(), |f, v| f.set_detail(v))}

                <div class="form__row">
                    {level_select(Level::A, "address-province", "Tỉnh/Thành phố", "-- Chọn tỉnh/thành phố --")}
                    {level_select(Level::B, "address-district", "Quận/Huyện", "-- Chọn quận/huyện --")}
                    {level_select(Level::C, "address-ward", "Phường/Xã", "-- Chọn phường/xã --")}
                </div>

                <div class="form__row">
                    <label class="form__checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || vm.form.with(|f| f.record().is_default)
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                vm.form.update(|f| f.set_default(checked));
                            }
                        />
                        " Đặt làm địa chỉ mặc định"
                    </label>
                    <label class="form__checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || vm.form.with(|f| f.record().is_active)
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                vm.form.update(|f| f.set_active(checked));
                            }
                        />
                        " Hoạt động"
                    </label>
                </div>
            </div>

            <div class="modal-footer">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_cancel.run(())
                    disabled=Signal::derive(move || vm.saving.get())
                >
                    "Hủy"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| vm.save_command(on_saved)
                    disabled=Signal::derive(move || !vm.can_save())
                >
                    {icon("save")}
                    {move || {
                        if vm.saving.get() {
                            " Đang lưu..."
                        } else if vm.is_edit_mode() {
                            " Cập nhật"
                        } else {
                            " Thêm mới"
                        }
                    }}
                </Button>
            </div>
        </div>
    }
}
