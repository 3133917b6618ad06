//! Endpoint file handling and endpoint selection
//!
//! This library provides:
//! - Loading of the JSON endpoint file into an ordered list
//! - Selection of endpoints by matching the last segment of their host

pub mod endpoint;
pub mod error;
pub mod join;

pub use endpoint::{load_endpoints, EndpointFile};
pub use error::{CoreError, Result};
pub use join::{join_endpoints, JoinReport};
