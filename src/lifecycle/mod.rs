//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (app.rs):
//!     Load config → Build client → Initial health check → Spawn monitor
//!
//! Shutdown (shutdown.rs):
//!     Ctrl+C or :quit → latched flag → monitor loop exits → shell returns
//! ```

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
