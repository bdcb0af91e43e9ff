//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `episodes`, `voices`) so pages and
//! components can depend on small focused models. The upload wizard itself
//! lives in the `podcast` crate so the CLI shares its rules.

pub mod auth;
pub mod episodes;
pub mod voices;
