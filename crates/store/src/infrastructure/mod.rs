//! External dependency implementations: the backend port and the
//! in-memory reference backend.

pub mod memory;
pub mod ports;
