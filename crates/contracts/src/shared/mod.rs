pub mod address_catalog;
pub mod cascade;
pub mod list_query;
