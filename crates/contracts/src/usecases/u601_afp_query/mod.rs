pub mod request;
pub mod response;

pub use request::QueryRequest;
pub use response::QueryResponse;
