//! Cloneable handles for talking to services.

mod reservation_client;

pub use reservation_client::*;
