//! Blocking client for the karyawan (employee) resource.
//!
//! # Design
//! Each operation is split into a `build_*` method that produces an
//! `HttpRequest`, one `Transport::execute` call, and a `parse_*` method that
//! consumes the `HttpResponse`. The build and parse halves never touch the
//! network, so they are tested directly; the operation methods only glue
//! them together. `ResourceClient` keeps no state between calls.

use serde::de::{DeserializeOwned, IgnoredAny};
use tracing::debug;

use crate::config::ClientConfig;
use crate::envelope::{error_message, Envelope};
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport};
use crate::transport::UreqTransport;
use crate::types::{EmployeeRecord, EmployeeRequest};

/// Collection path appended to the configured base URL.
pub const RESOURCE_PATH: &str = "karyawan";

/// Synchronous, stateless client for the karyawan REST resource.
///
/// Every operation issues exactly one request and either returns a typed
/// result or an `ApiError`. Nothing is retried.
#[derive(Debug, Clone)]
pub struct ResourceClient<T = UreqTransport> {
    config: ClientConfig,
    transport: T,
}

impl ResourceClient<UreqTransport> {
    pub fn new(config: ClientConfig) -> Self {
        let transport = UreqTransport::new(&config);
        Self { config, transport }
    }
}

impl Default for ResourceClient<UreqTransport> {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}

impl<T: Transport> ResourceClient<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetch every employee, in server order.
    pub fn list_all(&self) -> Result<Vec<EmployeeRecord>, ApiError> {
        let response = self.send(self.build_list_all())?;
        self.parse_list_all(response)
    }

    pub fn find_by_id(&self, id: i64) -> Result<EmployeeRecord, ApiError> {
        let response = self.send(self.build_find_by_id(id))?;
        self.parse_find_by_id(response)
    }

    /// Create `record` on the server and return the stored version, with its
    /// assigned `id`. Any `id` already on `record` is not sent.
    pub fn create(&self, record: &EmployeeRecord) -> Result<EmployeeRecord, ApiError> {
        let response = self.send(self.build_create(record)?)?;
        self.echo(&response);
        self.parse_create(response)
    }

    /// Replace the stored employee addressed by `record.id`.
    pub fn update(&self, record: &EmployeeRecord) -> Result<EmployeeRecord, ApiError> {
        let response = self.send(self.build_update(record)?)?;
        self.echo(&response);
        self.parse_update(response)
    }

    pub fn delete_by_id(&self, id: i64) -> Result<(), ApiError> {
        let response = self.send(self.build_delete_by_id(id))?;
        self.echo(&response);
        self.parse_delete_by_id(response)
    }

    pub fn build_list_all(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.collection_url(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_find_by_id(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.item_url(id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create(&self, record: &EmployeeRecord) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: self.collection_url(),
            headers: json_headers(),
            body: Some(encode(record)?),
        })
    }

    pub fn build_update(&self, record: &EmployeeRecord) -> Result<HttpRequest, ApiError> {
        let id = record.id.ok_or(ApiError::MissingId)?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: self.item_url(id),
            headers: json_headers(),
            body: Some(encode(record)?),
        })
    }

    pub fn build_delete_by_id(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: self.item_url(id),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Only an exact 200 is accepted; other statuses report the raw body.
    pub fn parse_list_all(&self, response: HttpResponse) -> Result<Vec<EmployeeRecord>, ApiError> {
        if response.status != 200 {
            return Err(ApiError::Http {
                status: response.status,
                message: response.body,
            });
        }
        Envelope::<Vec<EmployeeRecord>>::from_body(&response.body)?.into_data()
    }

    pub fn parse_find_by_id(&self, response: HttpResponse) -> Result<EmployeeRecord, ApiError> {
        parse_data(&response)
    }

    pub fn parse_create(&self, response: HttpResponse) -> Result<EmployeeRecord, ApiError> {
        parse_data(&response)
    }

    pub fn parse_update(&self, response: HttpResponse) -> Result<EmployeeRecord, ApiError> {
        parse_data(&response)
    }

    pub fn parse_delete_by_id(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)?;
        Envelope::<IgnoredAny>::from_body(&response.body)?;
        Ok(())
    }

    fn collection_url(&self) -> String {
        format!("{}/{RESOURCE_PATH}", self.config.base_url)
    }

    fn item_url(&self, id: i64) -> String {
        format!("{}/{RESOURCE_PATH}/{id}", self.config.base_url)
    }

    fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let method = request.method.as_str();
        debug!(method, url = %request.path, "sending request");
        let response = self.transport.execute(request)?;
        debug!(method, status = response.status, "received response");
        Ok(response)
    }

    /// Diagnostic echo of write responses, independent of their outcome.
    fn echo(&self, response: &HttpResponse) {
        if self.config.echo_responses {
            println!("Raw response:");
            println!("{}", response.body);
            println!();
        }
    }
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

fn encode(record: &EmployeeRecord) -> Result<String, ApiError> {
    serde_json::to_string(&EmployeeRequest::from(record))
        .map_err(|e| ApiError::Serialization(e.to_string()))
}

/// Map statuses outside `[200, 300)` to `ApiError::Http`.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::Http {
        status: response.status,
        message: error_message(&response.body),
    })
}

fn parse_data<D: DeserializeOwned>(response: &HttpResponse) -> Result<D, ApiError> {
    check_status(response)?;
    Envelope::<D>::from_body(&response.body)?.into_data()
}
