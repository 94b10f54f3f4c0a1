pub mod api;
pub mod filter;
