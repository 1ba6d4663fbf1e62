pub mod session;
pub mod storage;

pub use session::SessionState;
pub use storage::{browser_storage, SessionStorage};
