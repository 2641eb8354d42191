use crate::domain::common::{AggregateId, AggregateRoot};
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Types
// ============================================================================

/// Customer id as issued by the backend
pub type CustomerId = i64;

/// Unique id of a customer address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerAddressId(pub i64);

impl CustomerAddressId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl AggregateId for CustomerAddressId {
    fn as_string(&self) -> String {
        self.0.as_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        i64::from_string(s).map(CustomerAddressId)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Delivery address of a customer.
///
/// Field names on the wire follow the backend service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerAddress {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<CustomerAddressId>,

    #[serde(rename = "tenNguoiNhan", default)]
    pub recipient_name: Option<String>,

    #[serde(rename = "soDienThoai", default)]
    pub phone: Option<String>,

    /// House number, street, area
    #[serde(rename = "diaChiChiTiet")]
    pub detail: String,

    #[serde(rename = "tinhThanh")]
    pub province: String,

    #[serde(rename = "quanHuyen")]
    pub district: String,

    #[serde(rename = "phuongXa")]
    pub ward: String,

    #[serde(rename = "macDinh", default)]
    pub is_default: bool,

    #[serde(rename = "trangThai", default = "default_true")]
    pub is_active: bool,

    #[serde(rename = "ngayTao", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(rename = "ngayCapNhat", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,

    #[serde(rename = "khachHangId")]
    pub customer_id: CustomerId,
}

fn default_true() -> bool {
    true
}

impl CustomerAddress {
    /// Request body for create/update built from a submitted form.
    pub fn from_dto(
        id: Option<CustomerAddressId>,
        customer_id: CustomerId,
        dto: &CustomerAddressDto,
    ) -> Self {
        Self {
            id,
            recipient_name: non_blank(&dto.recipient_name),
            phone: non_blank(&dto.phone),
            detail: dto.detail.trim().to_string(),
            province: dto.province.clone(),
            district: dto.district.clone(),
            ward: dto.ward.clone(),
            is_default: dto.is_default,
            is_active: dto.is_active,
            created_at: None,
            updated_at: None,
            customer_id,
        }
    }

    /// Editable part of the record.
    pub fn to_dto(&self) -> CustomerAddressDto {
        CustomerAddressDto {
            recipient_name: self.recipient_name.clone().unwrap_or_default(),
            phone: self.phone.clone().unwrap_or_default(),
            detail: self.detail.clone(),
            province: self.province.clone(),
            district: self.district.clone(),
            ward: self.ward.clone(),
            is_default: self.is_default,
            is_active: self.is_active,
        }
    }

    /// "detail, ward, district, province"; blank parts are skipped.
    pub fn full_address(&self) -> String {
        [
            self.detail.as_str(),
            self.ward.as_str(),
            self.district.as_str(),
            self.province.as_str(),
        ]
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
    }

    pub fn status_label(&self) -> &'static str {
        if self.is_active {
            "Hoạt động"
        } else {
            "Không hoạt động"
        }
    }

    pub fn default_label(&self) -> &'static str {
        if self.is_default {
            "Mặc định"
        } else {
            "Không mặc định"
        }
    }

    /// Stable string key for tables and selection sets.
    pub fn key(&self) -> String {
        self.id
            .map(|id| id.as_string())
            .unwrap_or_else(|| format!("new-{}", self.customer_id))
    }
}

impl AggregateRoot for CustomerAddress {
    type Id = CustomerAddressId;

    fn id(&self) -> Option<Self::Id> {
        self.id
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "customer_address"
    }

    fn element_name() -> &'static str {
        "Địa chỉ khách hàng"
    }

    fn list_name() -> &'static str {
        "Địa chỉ khách hàng"
    }
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Record edited by the address form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerAddressDto {
    pub recipient_name: String,
    pub phone: String,
    pub detail: String,
    pub province: String,
    pub district: String,
    pub ward: String,
    pub is_default: bool,
    pub is_active: bool,
}

impl Default for CustomerAddressDto {
    fn default() -> Self {
        Self {
            recipient_name: String::new(),
            phone: String::new(),
            detail: String::new(),
            province: String::new(),
            district: String::new(),
            ward: String::new(),
            is_default: false,
            is_active: true,
        }
    }
}
