//! System orchestration, startup, and shutdown logic.

pub mod error;
pub mod reservation_system;
pub mod telemetry;

pub use error::*;
pub use reservation_system::*;
pub use telemetry::*;
