//! Identity provider implementations
//!
//! Concrete backends for the IdentityProvider trait: the hosted identity
//! REST API and an offline local registry.

pub mod firebase;
pub mod local;

pub use firebase::*;
pub use local::*;
