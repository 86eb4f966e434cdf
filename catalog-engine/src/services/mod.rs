pub mod query;
pub mod session;
pub mod source;
