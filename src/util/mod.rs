pub mod errors;
pub mod http;
pub mod json;
