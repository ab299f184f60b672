//! # DHIS2 Core
//!
//! Core logic for provisioning reference data into a DHIS2 instance.
//!
//! This crate contains everything the provisioning binary needs apart from
//! argument parsing:
//! - Configuration loading from `config/config.json`
//! - A basic-auth HTTP client for the DHIS2 metadata API
//! - Wire models for organisation units and data elements
//! - Name→uid mapping persistence for later provisioning steps
//! - The fixed org-unit and data-element provisioning sequences
//!
//! **No CLI concerns**: argument parsing, exit codes and the user-facing
//! summary belong in the `dhis2-cli` crate.

pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod mapping;
pub mod metadata;
pub mod provision;

pub use client::{Dhis2Api, Dhis2Client, Uid};
pub use config::Dhis2Config;
pub use error::{ProvisionError, ProvisionResult};
pub use mapping::IdMapping;
pub use metadata::{AggregationType, DataElement, OrgUnit, ValueType};
pub use provision::data_elements::{provision_data_elements, DataElementsOutcome};
pub use provision::org_units::{provision_org_units, OrgUnitsOutcome};
