pub mod command;
pub mod encoding;
pub mod offset;
pub mod ops;
pub mod overflow;

pub type Error = Box<dyn std::error::Error + Send + Sync>;
pub type Result<T> = std::result::Result<T, Error>;
