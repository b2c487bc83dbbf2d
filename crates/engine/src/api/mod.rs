pub mod routes;
pub mod handlers;
pub mod server;

pub use server::{serve, start_server};
