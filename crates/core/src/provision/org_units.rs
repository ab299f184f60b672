//! Organisation unit provisioning: the Kenya root and its 47 counties.
//!
//! The run is strictly ordered: the root must be accepted before any county
//! is attempted, because every county references the root uid as its parent.
//! A rejected root aborts the run before the mapping file is touched. County
//! rejections are logged and skipped; the mapping is saved even when some
//! counties failed, so accepted uids are never lost.

use crate::client::{Dhis2Api, Uid};
use crate::constants::MAX_SHORT_NAME_LEN;
use crate::mapping::IdMapping;
use crate::metadata::{truncate_chars, OrgUnit};
use crate::{ProvisionError, ProvisionResult};
use chrono::NaiveDate;
use std::path::Path;

/// Name of the root organisation unit.
pub const ROOT_NAME: &str = "Kenya";

/// Short name of the root organisation unit.
pub const ROOT_SHORT_NAME: &str = "KE";

/// Opening date recorded on every provisioned organisation unit.
pub const OPENING_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2018, 1, 1) {
    Some(date) => date,
    None => panic!("invalid opening date"),
};

/// The 47 Kenyan counties, in provisioning order.
pub const COUNTIES: [&str; 47] = [
    "Baringo",
    "Bomet",
    "Bungoma",
    "Busia",
    "Elgeyo Marakwet",
    "Embu",
    "Garissa",
    "Homa Bay",
    "Isiolo",
    "Kajiado",
    "Kakamega",
    "Kericho",
    "Kiambu",
    "Kilifi",
    "Kirinyaga",
    "Kisii",
    "Kisumu",
    "Kitui",
    "Kwale",
    "Laikipia",
    "Lamu",
    "Machakos",
    "Makueni",
    "Mandera",
    "Marsabit",
    "Meru",
    "Migori",
    "Mombasa",
    "Muranga",
    "Nairobi",
    "Nakuru",
    "Nandi",
    "Narok",
    "Nyamira",
    "Nyandarua",
    "Nyeri",
    "Samburu",
    "Siaya",
    "Taita Taveta",
    "Tana River",
    "Tharaka Nithi",
    "Trans Nzoia",
    "Turkana",
    "Uasin Gishu",
    "Vihiga",
    "Wajir",
    "West Pokot",
];

/// Result of an organisation unit provisioning run.
#[derive(Clone, Debug)]
pub struct OrgUnitsOutcome {
    /// Uid assigned to the root unit.
    pub root_uid: Uid,
    /// Number of counties the server accepted.
    pub created: usize,
    /// Number of counties attempted (always 47).
    pub total: usize,
    /// Full-name→uid mapping of the accepted counties.
    pub mapping: IdMapping,
}

impl OrgUnitsOutcome {
    /// Whether every county was accepted.
    pub fn complete(&self) -> bool {
        self.created == self.total
    }
}

/// Provision the Kenya root and all 47 counties.
///
/// The accepted-county mapping is saved to `mapping_path` unconditionally
/// once the county loop has finished, even when some counties were rejected.
///
/// # Errors
///
/// Returns [`ProvisionError::RootOrgUnitRejected`] when the server rejects
/// the root unit; in that case no county call is made and no mapping file is
/// written. Transport failures and mapping-write failures are propagated.
pub fn provision_org_units<A: Dhis2Api>(
    api: &A,
    mapping_path: &Path,
) -> ProvisionResult<OrgUnitsOutcome> {
    let root = OrgUnit {
        name: ROOT_NAME.to_string(),
        short_name: ROOT_SHORT_NAME.to_string(),
        opening_date: OPENING_DATE,
        parent_id: None,
    };

    tracing::info!("creating root organisation unit {ROOT_NAME:?}");
    let root_uid = api
        .create_org_unit(&root)?
        .ok_or(ProvisionError::RootOrgUnitRejected)?;
    tracing::info!(uid = %root_uid, "created root organisation unit");

    let total = COUNTIES.len();
    let mut mapping = IdMapping::new();
    let mut created = 0usize;

    for (index, county) in COUNTIES.iter().enumerate() {
        let full_name = format!("{county} County");
        let unit = OrgUnit {
            name: full_name.clone(),
            short_name: truncate_chars(county, MAX_SHORT_NAME_LEN),
            opening_date: OPENING_DATE,
            parent_id: Some(root_uid.clone()),
        };

        match api.create_org_unit(&unit)? {
            Some(uid) => {
                created += 1;
                tracing::info!(uid = %uid, "[{created}/{total}] created {full_name}");
                mapping.insert(full_name, uid);
            }
            None => {
                tracing::warn!("[{attempt}/{total}] rejected {full_name}", attempt = index + 1);
            }
        }
    }

    mapping.save(mapping_path)?;

    Ok(OrgUnitsOutcome {
        root_uid,
        created,
        total,
        mapping,
    })
}
