pub mod placeholder_service;

pub use placeholder_service::fetch_placeholder;
