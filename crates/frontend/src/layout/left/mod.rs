mod left;
pub mod navbar;

pub use left::Left;
