//! Blocking API client core for the karyawan (employee) service.
//!
//! # Overview
//! `ResourceClient` maps the five CRUD operations on the employee resource
//! onto HTTP requests and interprets the backend's uniform
//! `{success, data, message}` envelope. Every failure, whether an HTTP
//! status, a rejected envelope, an unparseable body or a transport error,
//! comes back as one `ApiError`.
//!
//! # Design
//! - `ResourceClient` is stateless: it holds only its `ClientConfig` and a
//!   `Transport`.
//! - Each operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response); the operation itself is one
//!   `Transport::execute` call between them.
//! - `UreqTransport` is the default transport (10 s connect timeout, 15 s
//!   per request). Tests plug in their own.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod envelope;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use client::{ResourceClient, RESOURCE_PATH};
pub use config::ClientConfig;
pub use envelope::Envelope;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use transport::UreqTransport;
pub use types::{EmployeeRecord, EmployeeRequest};
