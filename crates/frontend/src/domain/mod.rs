pub mod a001_customer_address;
