pub mod request_type;
pub mod role;
pub mod source;

pub use request_type::RequestType;
pub use role::Role;
pub use source::Source;
