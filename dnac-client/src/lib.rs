//! DNA Center Client - HTTP bindings for the intent API
//!
//! Provides typed, stateless calls to the northbound REST API of a Cisco
//! DNA Center controller. Each endpoint family lives in its own service
//! under [`intent`]; services share one pre-configured [`RestClient`].

pub mod config;
pub mod error;
pub mod http;
pub mod intent;

pub use config::ClientConfig;
pub use error::{ApiErrorResponse, ClientError, ClientResult};
pub use http::{RestClient, RestResponse};

// Endpoint services
pub use intent::issues::IssuesService;
