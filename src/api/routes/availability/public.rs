//! Public types for the availability API
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
pub struct AvailabilityQuery {
    pub query: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AvailabilityResponse {
    pub available: bool,
    pub summary: String,
}
