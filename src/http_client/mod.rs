pub mod error;
pub mod http_client;
pub mod reqwest_http_client;
pub mod request;
