//! Authenticated access to the CrewPlan backend.

mod client;

pub use client::{ApiClient, ClientError};
