//! Endpoint families of the intent API
//!
//! One service per family; each holds a shared [`RestClient`](crate::RestClient)
//! and exposes one method per API operation.

pub mod issues;
