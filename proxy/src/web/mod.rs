pub mod handler;
pub mod middleware;
pub mod params;
pub mod response;
pub mod routes;

#[cfg(test)]
mod mock;

pub use routes::build_app;
