pub mod auth;
pub mod error;
pub mod inventory;
pub mod location;
pub mod validators;
