//! Typed state of the address form.
//!
//! One update function per field. Province, district and ward go through a
//! [`CascadingSelector`] so the record can never hold a ward without its
//! district or a district without its province (except a record loaded that
//! way, until its first edit).

use super::aggregate::CustomerAddressDto;
use crate::shared::cascade::{CascadingSelector, HierarchyMap, Level, Transition};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct AddressFormState {
    record: CustomerAddressDto,
    selector: CascadingSelector,
}

impl AddressFormState {
    /// Blank form.
    pub fn new(hierarchy: Arc<HierarchyMap>) -> Self {
        Self {
            record: CustomerAddressDto::default(),
            selector: CascadingSelector::new(hierarchy),
        }
    }

    /// Form prefilled from an existing record.
    pub fn from_dto(hierarchy: Arc<HierarchyMap>, dto: CustomerAddressDto) -> Self {
        let selector = CascadingSelector::with_initial(
            hierarchy,
            dto.province.clone(),
            dto.district.clone(),
            dto.ward.clone(),
        );
        Self {
            record: dto,
            selector,
        }
    }

    pub fn record(&self) -> &CustomerAddressDto {
        &self.record
    }

    pub fn selector(&self) -> &CascadingSelector {
        &self.selector
    }

    pub fn set_recipient_name(&mut self, value: impl Into<String>) {
        self.record.recipient_name = value.into();
    }

    pub fn set_phone(&mut self, value: impl Into<String>) {
        self.record.phone = value.into();
    }

    pub fn set_detail(&mut self, value: impl Into<String>) {
        self.record.detail = value.into();
    }

    pub fn set_province(&mut self, value: impl Into<String>) -> Transition {
        self.set_level(Level::A, value)
    }

    pub fn set_district(&mut self, value: impl Into<String>) -> Transition {
        self.set_level(Level::B, value)
    }

    pub fn set_ward(&mut self, value: impl Into<String>) -> Transition {
        self.set_level(Level::C, value)
    }

    pub fn set_default(&mut self, value: bool) {
        self.record.is_default = value;
    }

    pub fn set_active(&mut self, value: bool) {
        self.record.is_active = value;
    }

    pub fn set_level(&mut self, level: Level, value: impl Into<String>) -> Transition {
        let transition = self.selector.set_level(level, value);
        self.record.province = self.selector.a().to_string();
        self.record.district = self.selector.b().to_string();
        self.record.ward = self.selector.c().to_string();
        transition
    }

    /// Every mandatory field is a non-empty string. Whitespace counts as
    /// filled here; [`validate`](Self::validate) is the stricter check run on save.
    pub fn is_complete(&self) -> bool {
        let r = &self.record;
        !r.recipient_name.is_empty()
            && !r.phone.is_empty()
            && !r.detail.is_empty()
            && self.selector.is_complete()
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        let r = &self.record;
        if r.recipient_name.trim().is_empty() {
            return Err("Vui lòng nhập tên người nhận");
        }
        if r.phone.trim().is_empty() {
            return Err("Vui lòng nhập số điện thoại");
        }
        if !is_valid_phone(&r.phone) {
            return Err("Số điện thoại phải gồm 10 hoặc 11 chữ số");
        }
        if r.detail.trim().is_empty() {
            return Err("Vui lòng nhập địa chỉ chi tiết");
        }
        if self.selector.a().is_empty() {
            return Err("Vui lòng chọn tỉnh/thành phố");
        }
        if self.selector.b().is_empty() {
            return Err("Vui lòng chọn quận/huyện");
        }
        if self.selector.c().is_empty() {
            return Err("Vui lòng chọn phường/xã");
        }
        Ok(())
    }

    /// The record to hand to the container on save, or `None` while the
    /// form is not valid.
    pub fn submit(&self) -> Option<CustomerAddressDto> {
        self.validate().ok().map(|_| self.record.clone())
    }
}

/// 10 or 11 ASCII digits, surrounding whitespace ignored.
pub fn is_valid_phone(value: &str) -> bool {
    let value = value.trim();
    (10..=11).contains(&value.len()) && value.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn hierarchy() -> Arc<HierarchyMap> {
        let a_to_b = HashMap::from([(
            "TP. Hồ Chí Minh".to_string(),
            vec!["Quận 1".to_string(), "Quận 3".to_string()],
        )]);
        let b_to_c = HashMap::from([(
            "Quận 1".to_string(),
            vec!["Phường Bến Nghé".to_string(), "Phường Đa Kao".to_string()],
        )]);
        Arc::new(HierarchyMap::new(
            vec!["Hà Nội".to_string(), "TP. Hồ Chí Minh".to_string()],
            a_to_b,
            b_to_c,
        ))
    }

    fn filled() -> AddressFormState {
        let mut form = AddressFormState::new(hierarchy());
        form.set_recipient_name("Lê Mai Anh");
        form.set_phone("0934567890");
        form.set_detail("12 Nguyễn Huệ");
        form.set_province("TP. Hồ Chí Minh");
        form.set_district("Quận 1");
        form.set_ward("Phường Bến Nghé");
        form
    }

    #[test]
    fn test_blank_form_is_blocked() {
        let form = AddressFormState::new(hierarchy());
        assert!(!form.is_complete());
        assert!(form.submit().is_none());
        assert!(form.record().is_active);
        assert!(!form.record().is_default);
    }

    #[test]
    fn test_filled_form_submits_full_record() {
        let mut form = filled();
        form.set_default(true);
        assert!(form.is_complete());

        let dto = form.submit().unwrap();
        assert_eq!(dto.province, "TP. Hồ Chí Minh");
        assert_eq!(dto.district, "Quận 1");
        assert_eq!(dto.ward, "Phường Bến Nghé");
        assert_eq!(dto.recipient_name, "Lê Mai Anh");
        assert!(dto.is_default);
    }

    #[test]
    fn test_province_change_clears_record_fields() {
        let mut form = filled();
        form.set_province("Hà Nội");
        assert_eq!(form.record().district, "");
        assert_eq!(form.record().ward, "");
        assert!(form.selector().filtered_b().is_empty());
        assert!(!form.is_complete());
        assert_eq!(form.validate(), Err("Vui lòng chọn quận/huyện"));
    }

    #[test]
    fn test_district_change_clears_ward() {
        let mut form = filled();
        form.set_district("Quận 3");
        assert_eq!(form.record().ward, "");
        assert_eq!(form.validate(), Err("Vui lòng chọn phường/xã"));
    }

    #[test]
    fn test_sibling_fields_are_mandatory() {
        let mut form = filled();
        form.set_detail("");
        assert!(!form.is_complete());
        assert_eq!(form.validate(), Err("Vui lòng nhập địa chỉ chi tiết"));

        let mut form = filled();
        form.set_recipient_name("");
        assert!(!form.is_complete());
        assert!(form.submit().is_none());
    }

    #[test]
    fn test_whitespace_is_complete_but_not_valid() {
        let mut form = filled();
        form.set_detail(" ");
        assert!(form.is_complete());
        assert_eq!(form.validate(), Err("Vui lòng nhập địa chỉ chi tiết"));
        assert!(form.submit().is_none());
    }

    #[test]
    fn test_phone_pattern() {
        let mut form = filled();
        form.set_phone("09345");
        assert!(form.is_complete());
        assert_eq!(form.validate(), Err("Số điện thoại phải gồm 10 hoặc 11 chữ số"));

        assert!(is_valid_phone("0934567890"));
        assert!(is_valid_phone(" 09345678901 "));
        assert!(!is_valid_phone("093456789012"));
        assert!(!is_valid_phone("09345-67890"));
    }

    #[test]
    fn test_loaded_record_keeps_values() {
        let dto = CustomerAddressDto {
            recipient_name: "Phạm Đức Long".into(),
            phone: "0923456789".into(),
            detail: "8 Pasteur".into(),
            province: "TP. Hồ Chí Minh".into(),
            district: "Quận 1".into(),
            ward: "Phường Đa Kao".into(),
            is_default: false,
            is_active: true,
        };
        let form = AddressFormState::from_dto(hierarchy(), dto.clone());
        assert_eq!(form.selector().filtered_b().len(), 2);
        assert_eq!(form.selector().filtered_c().len(), 2);
        assert_eq!(form.submit(), Some(dto));
    }

    #[test]
    fn test_rejected_district_keeps_record_in_sync() {
        let mut form = AddressFormState::new(hierarchy());
        assert_eq!(form.set_district("Quận 1"), Transition::Rejected);
        assert_eq!(form.record().district, "");
        assert!(form.selector().is_downward_closed());
    }
}
