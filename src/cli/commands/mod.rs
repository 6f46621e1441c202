pub mod fields;
pub mod init;
pub mod render;
pub mod resolve;
mod session;

pub use session::FormSession;
