use crate::domain::a001_customer_address::api;
use crate::shared::address_catalog::hierarchy;
use contracts::domain::a001_customer_address::aggregate::{
    CustomerAddress, CustomerAddressId, CustomerId,
};
use contracts::domain::a001_customer_address::form::AddressFormState;
use contracts::shared::cascade::Level;
use leptos::prelude::*;

/// State of one open address form.
#[derive(Clone, Copy)]
pub struct AddressDetailsViewModel {
    pub form: RwSignal<AddressFormState>,
    /// Raw text of the customer id input (create mode only)
    pub customer_id: RwSignal<String>,
    pub address_id: Option<CustomerAddressId>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl AddressDetailsViewModel {
    pub fn new(existing: Option<CustomerAddress>, default_customer_id: Option<CustomerId>) -> Self {
        let (form, customer_id, address_id) = match existing {
            Some(address) => (
                AddressFormState::from_dto(hierarchy(), address.to_dto()),
                address.customer_id.to_string(),
                address.id,
            ),
            None => (
                AddressFormState::new(hierarchy()),
                default_customer_id.map(|id| id.to_string()).unwrap_or_default(),
                None,
            ),
        };
        Self {
            form: RwSignal::new(form),
            customer_id: RwSignal::new(customer_id),
            address_id,
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.address_id.is_some()
    }

    pub fn can_save(&self) -> bool {
        !self.saving.get() && self.form.with(|f| f.is_complete())
    }

    pub fn set_level(&self, level: Level, value: String) {
        self.form.update(|f| {
            let transition = f.set_level(level, value.clone());
            if !transition.is_applied() {
                log::warn!("{:?} value '{}' rejected; level cleared", level, value);
            }
        });
    }

    pub fn save_command(&self, on_saved: Callback<CustomerAddress>) {
        let request = self
            .form
            .with_untracked(|f| build_request(self.address_id, &self.customer_id.get_untracked(), f));
        let body = match request {
            Ok(body) => body,
            Err(msg) => {
                self.error.set(Some(msg));
                return;
            }
        };

        let address_id = self.address_id;
        let error = self.error;
        let saving = self.saving;
        saving.set(true);
        error.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            let result = match address_id {
                Some(id) => api::update(id, &body).await,
                None => api::create(&body).await,
            };
            saving.set(false);
            match result {
                Ok(saved) => {
                    log::info!("Address saved: {}", saved.key());
                    on_saved.run(saved);
                }
                Err(e) => error.set(Some(e)),
            }
        });
    }
}

pub fn parse_customer_id(text: &str) -> Result<CustomerId, &'static str> {
    let text = text.trim();
    if text.is_empty() {
        return Err("Vui lòng nhập mã khách hàng");
    }
    match text.parse::<CustomerId>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err("Mã khách hàng phải là số nguyên dương"),
    }
}

/// Request body for the form, or the first message that blocks saving.
pub fn build_request(
    address_id: Option<CustomerAddressId>,
    customer_id_text: &str,
    form: &AddressFormState,
) -> Result<CustomerAddress, String> {
    let customer_id = parse_customer_id(customer_id_text)?;
    form.validate()?;
    let dto = form.submit().ok_or("Biểu mẫu chưa hợp lệ")?;
    Ok(CustomerAddress::from_dto(address_id, customer_id, &dto))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::address_catalog::AddressCatalog;
    use std::sync::Arc;

    fn filled_form() -> AddressFormState {
        let map = Arc::new(AddressCatalog::builtin().unwrap().into_hierarchy());
        let mut form = AddressFormState::new(map);
        form.set_recipient_name("Võ Thị Sáu");
        form.set_phone("0987654321");
        form.set_detail("45 Lê Duẩn");
        form.set_province("TP. Hồ Chí Minh");
        form.set_district("Quận 1");
        form.set_ward("Phường Bến Nghé");
        form
    }

    #[test]
    fn test_parse_customer_id() {
        assert_eq!(parse_customer_id(" 12 "), Ok(12));
        assert!(parse_customer_id("").is_err());
        assert!(parse_customer_id("0").is_err());
        assert!(parse_customer_id("abc").is_err());
    }

    #[test]
    fn test_build_request_for_create() {
        let body = build_request(None, "5", &filled_form()).unwrap();
        assert_eq!(body.id, None);
        assert_eq!(body.customer_id, 5);
        assert_eq!(body.ward, "Phường Bến Nghé");
        assert_eq!(body.recipient_name.as_deref(), Some("Võ Thị Sáu"));
    }

    #[test]
    fn test_build_request_reports_first_problem() {
        let err = build_request(None, "", &filled_form()).unwrap_err();
        assert_eq!(err, "Vui lòng nhập mã khách hàng");

        let mut form = filled_form();
        form.set_province("Hà Nội");
        let err = build_request(Some(CustomerAddressId(3)), "5", &form).unwrap_err();
        assert_eq!(err, "Vui lòng chọn quận/huyện");
    }
}
