//! Public API types

// Re-export public types from each route

pub mod availability {
    pub use crate::api::routes::availability::public::*;
}

pub mod events {
    pub use crate::api::routes::events::public::*;
}
