//! Wire models shared between the admin console and the affiliate backend.
//!
//! - `model`: records the backend returns (products, category rankings, config).
//! - `requests`: payloads sent to the backend and the envelopes it answers with.

pub mod model;
pub mod requests;

mod serde_helpers;
