pub mod api;
pub mod error;
pub mod login;
pub mod route;
pub mod session;

#[cfg(test)]
mod mock;

pub use api::{InventoryClient, bearer_value};
pub use error::{Error, Result};
pub use login::{LoginFlow, LoginState};
pub use route::Route;
pub use session::Session;
