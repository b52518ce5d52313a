//! Inspection of the form parameters in outgoing HTTP request bodies.
//!
//! [`params::parse`] turns a url-encoded or multipart body into a
//! `name -> value` map without consuming the body. [`PostParamsLayer`] runs
//! it for every request going through a [`service::Service`] stack.

pub mod client;
pub mod error;
pub mod http;
pub mod middleware;
pub mod params;
pub mod service;

pub use client::{Client, new_client};
pub use error::{Error, Result};
pub use middleware::{LogLayer, PostParamsLayer};
pub use params::{ParsedParams, RequestParams, parse};
