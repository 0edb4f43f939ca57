pub mod binary;
pub mod error;
pub mod headers;
pub mod response;
pub mod status;
pub mod structure;
pub mod transport_info;
