//! Domain Layer - Pure types with no I/O
//!
//! This module contains:
//! - Network variants and the compiled-in seed lists
//! - Negotiated network settings and fee schedule
//! - Wire records exchanged with Ark peers
//! - Broadcast outcomes
//! - The client error taxonomy

pub mod entities;
pub mod errors;
pub mod messages;
pub mod seeds;
pub mod value_objects;

pub use entities::*;
pub use errors::*;
pub use messages::*;
pub use seeds::*;
pub use value_objects::*;
