use crate::shared::date_utils::format_optional;
use crate::shared::list_utils::{sort_list, Sortable};
use contracts::domain::a001_customer_address::aggregate::{CustomerAddress, CustomerId};
use contracts::shared::list_query::{matches_query, paginate, Page, StatusFilter};
use leptos::prelude::*;
use std::cmp::Ordering;

/// Table row: the record plus its display strings.
#[derive(Clone, Debug, PartialEq)]
pub struct AddressRow {
    pub key: String,
    pub address: CustomerAddress,
    pub recipient: String,
    pub phone: String,
    pub full_address: String,
    pub created_at: String,
}

impl From<CustomerAddress> for AddressRow {
    fn from(address: CustomerAddress) -> Self {
        Self {
            key: address.key(),
            recipient: address.recipient_name.clone().unwrap_or_default(),
            phone: address.phone.clone().unwrap_or_default(),
            full_address: address.full_address(),
            created_at: format_optional(address.created_at.as_deref()),
            address,
        }
    }
}

impl Sortable for AddressRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "recipient" => self
                .recipient
                .to_lowercase()
                .cmp(&other.recipient.to_lowercase()),
            "phone" => self.phone.cmp(&other.phone),
            "address" => self
                .full_address
                .to_lowercase()
                .cmp(&other.full_address.to_lowercase()),
            "customer" => self.address.customer_id.cmp(&other.address.customer_id),
            "is_default" => self.address.is_default.cmp(&other.address.is_default),
            "is_active" => self.address.is_active.cmp(&other.address.is_active),
            // raw ISO strings sort chronologically
            "created_at" => self.address.created_at.cmp(&other.address.created_at),
            _ => self.key.cmp(&other.key),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AddressListState {
    pub items: Vec<AddressRow>,
    pub search_query: String,
    pub status: StatusFilter,
    pub default_only: bool,
    /// Load only this customer's addresses
    pub customer_filter: Option<CustomerId>,
    pub sort_field: String,
    pub sort_ascending: bool,
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
    pub is_loaded: bool,
    /// Ticket of the latest load request; older responses are dropped
    pub load_generation: u64,
}

impl AddressListState {
    pub fn new(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            search_query: String::new(),
            status: StatusFilter::All,
            default_only: false,
            customer_filter: None,
            sort_field: "created_at".to_string(),
            sort_ascending: false,
            page: 0,
            page_size,
            total_count: 0,
            total_pages: 1,
            is_loaded: false,
            load_generation: 0,
        }
    }

    /// Filter, sort and cut the current page out of `all`.
    pub fn apply(&mut self, all: &[AddressRow]) {
        let mut data: Vec<AddressRow> = all
            .iter()
            .filter(|row| self.accepts(row))
            .cloned()
            .collect();
        sort_list(&mut data, &self.sort_field, self.sort_ascending);

        let Page {
            items,
            page,
            total_count,
            total_pages,
            ..
        } = paginate(&data, self.page, self.page_size);
        self.items = items;
        self.page = page;
        self.total_count = total_count;
        self.total_pages = total_pages;
    }

    /// Starts a new load and returns its ticket.
    pub fn begin_load(&mut self) -> u64 {
        self.load_generation += 1;
        self.load_generation
    }

    /// Whether a response for `ticket` is still the one to show.
    pub fn is_current_load(&self, ticket: u64) -> bool {
        self.load_generation == ticket
    }

    fn accepts(&self, row: &AddressRow) -> bool {
        self.status.matches(row.address.is_active)
            && (!self.default_only || row.address.is_default)
            && matches_query(
                &[&row.recipient, &row.phone, &row.full_address],
                &self.search_query,
            )
    }
}

/// Message for the error banner after a batch delete; `None` when every
/// delete succeeded.
pub fn delete_outcome_message(results: &[Result<(), String>]) -> Option<String> {
    let failed: Vec<&String> = results.iter().filter_map(|r| r.as_ref().err()).collect();
    match failed.as_slice() {
        [] => None,
        [only] if results.len() == 1 => Some(format!("Không xóa được địa chỉ: {}", only)),
        _ => Some(format!(
            "Không xóa được {}/{} địa chỉ: {}",
            failed.len(),
            results.len(),
            failed[0]
        )),
    }
}

pub fn create_state(page_size: usize) -> RwSignal<AddressListState> {
    RwSignal::new(AddressListState::new(page_size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_customer_address::aggregate::CustomerAddressId;

    fn row(id: i64, name: &str, district: &str, active: bool, default: bool, created: &str) -> AddressRow {
        AddressRow::from(CustomerAddress {
            id: Some(CustomerAddressId(id)),
            recipient_name: Some(name.to_string()),
            phone: Some(format!("09000000{:02}", id)),
            detail: format!("{} Trần Hưng Đạo", id),
            province: "TP. Hồ Chí Minh".to_string(),
            district: district.to_string(),
            ward: String::new(),
            is_default: default,
            is_active: active,
            created_at: Some(created.to_string()),
            updated_at: None,
            customer_id: 1,
        })
    }

    fn sample() -> Vec<AddressRow> {
        vec![
            row(1, "An", "Quận 1", true, true, "2024-01-05T08:00:00"),
            row(2, "Bình", "Quận 3", true, false, "2024-02-05T08:00:00"),
            row(3, "Cường", "Quận 1", false, false, "2024-03-05T08:00:00"),
            row(4, "Dũng", "Quận 5", true, false, "2024-04-05T08:00:00"),
        ]
    }

    #[test]
    fn test_row_display_fields() {
        let r = &sample()[0];
        assert_eq!(r.key, "1");
        assert_eq!(r.full_address, "1 Trần Hưng Đạo, Quận 1, TP. Hồ Chí Minh");
        assert_eq!(r.created_at, "05/01/2024 08:00");
    }

    #[test]
    fn test_default_order_is_newest_first() {
        let mut state = AddressListState::new(10);
        state.apply(&sample());
        let keys: Vec<_> = state.items.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["4", "3", "2", "1"]);
        assert_eq!(state.total_count, 4);
    }

    #[test]
    fn test_filters_combine() {
        let mut state = AddressListState::new(10);
        state.search_query = "quận 1".to_string();
        state.apply(&sample());
        assert_eq!(state.total_count, 2);

        state.status = StatusFilter::Active;
        state.apply(&sample());
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].recipient, "An");

        state.search_query.clear();
        state.status = StatusFilter::All;
        state.default_only = true;
        state.apply(&sample());
        assert_eq!(state.items.len(), 1);
        assert!(state.items[0].address.is_default);
    }

    #[test]
    fn test_page_clamped_when_filter_shrinks() {
        let mut state = AddressListState::new(2);
        state.sort_field = "recipient".to_string();
        state.sort_ascending = true;
        state.page = 1;
        state.apply(&sample());
        assert_eq!(state.total_pages, 2);
        assert_eq!(state.items[0].recipient, "Cường");

        state.status = StatusFilter::Inactive;
        state.apply(&sample());
        assert_eq!(state.page, 0);
        assert_eq!(state.total_pages, 1);
    }

    #[test]
    fn test_only_latest_load_is_current() {
        let mut state = AddressListState::new(10);
        let first = state.begin_load();
        let second = state.begin_load();
        assert!(!state.is_current_load(first));
        assert!(state.is_current_load(second));
    }

    #[test]
    fn test_delete_outcome_message() {
        assert_eq!(delete_outcome_message(&[Ok(()), Ok(())]), None);
        assert_eq!(delete_outcome_message(&[]), None);
        assert_eq!(
            delete_outcome_message(&[Err("HTTP 500".to_string())]).unwrap(),
            "Không xóa được địa chỉ: HTTP 500"
        );
        assert_eq!(
            delete_outcome_message(&[Ok(()), Err("HTTP 409".to_string()), Err("HTTP 500".to_string())])
                .unwrap(),
            "Không xóa được 2/3 địa chỉ: HTTP 409"
        );
    }
}
