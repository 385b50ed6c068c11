//! HTTP access and list derivations for the squad portal content API.

mod error;
pub mod fetch;
pub mod http;
pub mod services;
pub mod session;
pub mod url;
pub mod views;

pub use portal_api_types as types;

pub use crate::error::{ApiError, NetworkFailure, Result};
pub use crate::fetch::{FetchState, RequestSequence, Ticket};
pub use crate::http::{ApiResponse, HttpClient, RequestBody, RequestOptions};
pub use crate::session::Session;
