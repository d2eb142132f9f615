pub mod error;
pub mod storage;
pub mod store;

pub use error::AuthError;
pub use storage::SessionStorage;
pub use store::{profile_template, SessionStore};
