//! Remote service plumbing: authentication, the REST client context, and the
//! serde models of the wire format.

pub mod auth;
pub mod client;
pub mod types;
