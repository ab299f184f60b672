//! Basic-auth HTTP client for the DHIS2 metadata API.
//!
//! The client is an explicitly constructed value that is passed into the
//! provisioning sequences, never module-level state. One underlying
//! [`reqwest::blocking::Client`] is reused for every request in a run, so
//! persistent connections are shared across calls.
//!
//! Creation calls never treat a rejection as an `Err`: HTTP 201 yields
//! `Ok(Some(uid))`, any other status is logged with the verbatim response
//! body and yields `Ok(None)`. Only transport and decode failures are errors.

use crate::constants::{DATA_ELEMENTS_ENDPOINT, ORG_UNITS_ENDPOINT};
use crate::metadata::{
    data_element_to_wire, org_unit_to_wire, CreateResponseWire, DataElement, OrgUnit,
};
use crate::{ProvisionError, ProvisionResult};
use reqwest::StatusCode;
use serde::Serialize;

/// Server-assigned opaque identifier for a created DHIS2 object.
pub type Uid = String;

/// Metadata creation operations against a DHIS2 instance.
///
/// The provisioning sequences are written against this trait so tests can
/// substitute an in-memory transport for the real HTTP client.
pub trait Dhis2Api {
    /// Create an organisation unit.
    ///
    /// Returns `Ok(Some(uid))` when the server accepted the unit,
    /// `Ok(None)` when it rejected it, and `Err` on transport failure.
    fn create_org_unit(&self, org_unit: &OrgUnit) -> ProvisionResult<Option<Uid>>;

    /// Create a data element. Same contract as [`Self::create_org_unit`].
    fn create_data_element(&self, element: &DataElement) -> ProvisionResult<Option<Uid>>;
}

/// HTTP client for DHIS2 metadata operations.
#[derive(Debug)]
pub struct Dhis2Client {
    base_url: String,
    username: String,
    password: String,
    http: reqwest::blocking::Client,
}

impl Dhis2Client {
    /// Create a new `Dhis2Client`.
    ///
    /// A trailing slash on `base_url` is stripped so endpoint paths can be
    /// joined uniformly.
    ///
    /// # Errors
    ///
    /// Returns [`ProvisionError::InvalidInput`] if `base_url` is empty and
    /// [`ProvisionError::HttpClientBuild`] if the underlying HTTP client
    /// cannot be constructed.
    pub fn new(base_url: &str, username: &str, password: &str) -> ProvisionResult<Self> {
        let base_url = base_url.trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(ProvisionError::InvalidInput(
                "dhis2_url cannot be empty".into(),
            ));
        }

        let http = reqwest::blocking::Client::builder()
            .build()
            .map_err(ProvisionError::HttpClientBuild)?;

        Ok(Self {
            base_url,
            username: username.to_string(),
            password: password.to_string(),
            http,
        })
    }

    /// Create a client from loaded configuration.
    pub fn from_config(config: &crate::Dhis2Config) -> ProvisionResult<Self> {
        Self::new(&config.dhis2_url, &config.username, &config.password)
    }

    /// Base URL with any trailing slash removed.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST a metadata payload and extract the created uid.
    ///
    /// Shared by both creation operations; `kind` only labels log lines.
    fn post_metadata<P: Serialize>(
        &self,
        endpoint: &str,
        payload: &P,
        kind: &str,
        name: &str,
    ) -> ProvisionResult<Option<Uid>> {
        let url = format!("{}/{}", self.base_url, endpoint);
        let response = self
            .http
            .post(&url)
            .basic_auth(&self.username, Some(&self.password))
            .json(payload)
            .send()
            .map_err(ProvisionError::Http)?;

        let status = response.status();
        if status == StatusCode::CREATED {
            let decoded: CreateResponseWire =
                response.json().map_err(ProvisionError::ResponseDecode)?;
            Ok(Some(decoded.response.uid))
        } else {
            let body = response.text().unwrap_or_default();
            tracing::warn!(%status, body = %body, "failed to create {kind} {name:?}");
            Ok(None)
        }
    }
}

impl Dhis2Api for Dhis2Client {
    fn create_org_unit(&self, org_unit: &OrgUnit) -> ProvisionResult<Option<Uid>> {
        let payload = org_unit_to_wire(org_unit);
        self.post_metadata(
            ORG_UNITS_ENDPOINT,
            &payload,
            "organisation unit",
            &org_unit.name,
        )
    }

    fn create_data_element(&self, element: &DataElement) -> ProvisionResult<Option<Uid>> {
        let payload = data_element_to_wire(element);
        self.post_metadata(DATA_ELEMENTS_ENDPOINT, &payload, "data element", &element.name)
    }
}
