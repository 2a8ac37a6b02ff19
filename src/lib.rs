//! Terminal client for the Clarity code correction service.

pub mod app;
pub mod cli;
pub mod config;
pub mod correction;
pub mod endpoint;
pub mod health;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod shell;
pub mod workbench;

pub use app::App;
pub use config::schema::ClientConfig;
pub use lifecycle::Shutdown;
