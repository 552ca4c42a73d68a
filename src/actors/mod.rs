//! Services that own state and answer requests over channels.

mod reservation_service;

pub use reservation_service::*;
