pub mod http_client;
pub mod response_record;

pub use response_record::{
    binary::is_binary_response, error::Error, headers::ResponseHeaders,
    response::ResponseRecord, structure::ResponseStructure, transport_info::TransportInfo,
};
