use contracts::domain::a001_customer_address::aggregate::{
    CustomerAddress, CustomerAddressId, CustomerId,
};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use crate::shared::api_utils::api_url;

const RESOURCE: &str = "/api/dia-chi-khach-hang";

fn collection_path() -> String {
    RESOURCE.to_string()
}

fn item_path(id: CustomerAddressId) -> String {
    format!("{}/{}", RESOURCE, id.value())
}

fn customer_path(customer_id: CustomerId) -> String {
    format!("{}/khach-hang/{}", RESOURCE, customer_id)
}

fn customer_default_path(customer_id: CustomerId) -> String {
    format!("{}/mac-dinh", customer_path(customer_id))
}

fn owned_item_path(id: CustomerAddressId, customer_id: CustomerId) -> String {
    format!("{}/khach-hang/{}", item_path(id), customer_id)
}

fn owned_default_path(id: CustomerAddressId, customer_id: CustomerId) -> String {
    format!("{}/mac-dinh", owned_item_path(id, customer_id))
}

async fn read_json<T: DeserializeOwned>(response: Response, action: &str) -> Result<T, String> {
    if !response.ok() {
        log::warn!("{} failed: HTTP {}", action, response.status());
        return Err(format!("{} thất bại: HTTP {}", action, response.status()));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| format!("Không đọc được phản hồi: {}", e))
}

fn expect_ok(response: &Response, action: &str) -> Result<(), String> {
    if !response.ok() {
        log::warn!("{} failed: HTTP {}", action, response.status());
        return Err(format!("{} thất bại: HTTP {}", action, response.status()));
    }
    Ok(())
}

fn send_error(e: gloo_net::Error) -> String {
    format!("Không gửi được yêu cầu: {}", e)
}

/// All addresses of all customers
pub async fn fetch_all() -> Result<Vec<CustomerAddress>, String> {
    let response = Request::get(&api_url(&collection_path()))
        .send()
        .await
        .map_err(send_error)?;
    read_json(response, "Tải danh sách địa chỉ").await
}

pub async fn fetch_by_customer(customer_id: CustomerId) -> Result<Vec<CustomerAddress>, String> {
    let response = Request::get(&api_url(&customer_path(customer_id)))
        .send()
        .await
        .map_err(send_error)?;
    read_json(response, "Tải địa chỉ của khách hàng").await
}

/// Default address of a customer; `Ok(None)` when the customer has none.
pub async fn fetch_default(customer_id: CustomerId) -> Result<Option<CustomerAddress>, String> {
    let response = Request::get(&api_url(&customer_default_path(customer_id)))
        .send()
        .await
        .map_err(send_error)?;
    if response.status() == 404 || response.status() == 204 {
        return Ok(None);
    }
    read_json(response, "Tải địa chỉ mặc định").await.map(Some)
}

pub async fn create(address: &CustomerAddress) -> Result<CustomerAddress, String> {
    let response = Request::post(&api_url(&collection_path()))
        .json(address)
        .map_err(|e| format!("Không tạo được yêu cầu: {}", e))?
        .send()
        .await
        .map_err(send_error)?;
    read_json(response, "Thêm địa chỉ").await
}

pub async fn update(id: CustomerAddressId, address: &CustomerAddress) -> Result<CustomerAddress, String> {
    let response = Request::put(&api_url(&item_path(id)))
        .json(address)
        .map_err(|e| format!("Không tạo được yêu cầu: {}", e))?
        .send()
        .await
        .map_err(send_error)?;
    read_json(response, "Cập nhật địa chỉ").await
}

pub async fn delete(id: CustomerAddressId, customer_id: CustomerId) -> Result<(), String> {
    let response = Request::delete(&api_url(&owned_item_path(id, customer_id)))
        .send()
        .await
        .map_err(send_error)?;
    expect_ok(&response, "Xóa địa chỉ")
}

pub async fn set_default(id: CustomerAddressId, customer_id: CustomerId) -> Result<(), String> {
    let response = Request::put(&api_url(&owned_default_path(id, customer_id)))
        .send()
        .await
        .map_err(send_error)?;
    expect_ok(&response, "Đặt địa chỉ mặc định")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        let id = CustomerAddressId::new(15);
        assert_eq!(collection_path(), "/api/dia-chi-khach-hang");
        assert_eq!(item_path(id), "/api/dia-chi-khach-hang/15");
        assert_eq!(customer_path(4), "/api/dia-chi-khach-hang/khach-hang/4");
        assert_eq!(
            customer_default_path(4),
            "/api/dia-chi-khach-hang/khach-hang/4/mac-dinh"
        );
        assert_eq!(
            owned_item_path(id, 4),
            "/api/dia-chi-khach-hang/15/khach-hang/4"
        );
        assert_eq!(
            owned_default_path(id, 4),
            "/api/dia-chi-khach-hang/15/khach-hang/4/mac-dinh"
        );
    }
}
