pub mod api_client;
pub mod api_error;
pub mod services;
