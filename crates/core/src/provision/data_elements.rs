//! Data element provisioning: the malaria commodity metrics.
//!
//! Flat list, no ordering dependency between items. The mapping is keyed by
//! element code rather than name, since codes are the stable handles later
//! provisioning steps use.

use crate::client::Dhis2Api;
use crate::mapping::IdMapping;
use crate::metadata::{AggregationType, DataElement, ValueType};
use crate::ProvisionResult;
use std::path::Path;

/// The fixed malaria commodity data elements, in provisioning order.
pub fn malaria_commodity_elements() -> Vec<DataElement> {
    vec![
        DataElement {
            name: "MAL - RDT Dispensed".to_string(),
            short_name: "RDT Dispensed".to_string(),
            code: "MAL_RDT_DISP".to_string(),
            value_type: ValueType::Integer,
            aggregation_type: AggregationType::Sum,
        },
        DataElement {
            name: "MAL - RDT Stock on Hand".to_string(),
            short_name: "RDT Stock".to_string(),
            code: "MAL_RDT_SOH".to_string(),
            value_type: ValueType::Integer,
            aggregation_type: AggregationType::Average,
        },
        DataElement {
            name: "MAL - RDT Predicted Demand (AI)".to_string(),
            short_name: "RDT Predicted".to_string(),
            code: "MAL_RDT_PRED".to_string(),
            value_type: ValueType::Integer,
            aggregation_type: AggregationType::Sum,
        },
    ]
}

/// Result of a data element provisioning run.
#[derive(Clone, Debug)]
pub struct DataElementsOutcome {
    /// Number of elements the server accepted.
    pub created: usize,
    /// Number of elements attempted (always 3).
    pub total: usize,
    /// Code→uid mapping of the accepted elements.
    pub mapping: IdMapping,
}

impl DataElementsOutcome {
    /// Whether every element was accepted.
    pub fn complete(&self) -> bool {
        self.created == self.total
    }
}

/// Provision the malaria commodity data elements.
///
/// The code→uid mapping is saved to `mapping_path` unconditionally, even
/// when some elements were rejected.
///
/// # Errors
///
/// Transport failures and mapping-write failures are propagated; per-element
/// rejections are not errors.
pub fn provision_data_elements<A: Dhis2Api>(
    api: &A,
    mapping_path: &Path,
) -> ProvisionResult<DataElementsOutcome> {
    let elements = malaria_commodity_elements();
    let total = elements.len();
    let mut mapping = IdMapping::new();
    let mut created = 0usize;

    for (index, element) in elements.iter().enumerate() {
        match api.create_data_element(element)? {
            Some(uid) => {
                created += 1;
                tracing::info!(uid = %uid, "[{created}/{total}] created {name}", name = element.name);
                mapping.insert(element.code.clone(), uid);
            }
            None => {
                tracing::warn!(
                    "[{attempt}/{total}] rejected {name}",
                    attempt = index + 1,
                    name = element.name
                );
            }
        }
    }

    mapping.save(mapping_path)?;

    Ok(DataElementsOutcome {
        created,
        total,
        mapping,
    })
}
