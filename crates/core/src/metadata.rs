//! DHIS2 metadata wire models and translation helpers.
//!
//! This module provides domain-level types for the two metadata objects the
//! provisioning runs create, plus the exact wire structs POSTed to the DHIS2
//! metadata API.
//!
//! Responsibilities:
//! - Define public domain-level types (`OrgUnit`, `DataElement`)
//! - Define strict wire models for request serialisation
//! - Provide translation from domain types to the wire model
//! - Decode the creation response envelope (`response.uid`)
//!
//! Notes:
//! - `parent` is serialised only when a parent uid is present
//! - `domainType` and `zeroIsSignificant` are fixed at the wire boundary;
//!   every element this repo provisions is an aggregate element

use crate::client::Uid;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// Public domain-level types
// ============================================================================

/// A node in the DHIS2 organisation hierarchy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrgUnit {
    /// Full display name, e.g. `"Nairobi County"`.
    pub name: String,
    /// Short name; DHIS2 caps this at 50 characters.
    pub short_name: String,
    /// Date the unit opened.
    pub opening_date: NaiveDate,
    /// Uid of the parent unit; `None` for the hierarchy root.
    pub parent_id: Option<Uid>,
}

/// A DHIS2 data element describing a measurable quantity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataElement {
    pub name: String,
    pub short_name: String,
    /// Stable code used as the mapping key, e.g. `"MAL_RDT_DISP"`.
    pub code: String,
    pub value_type: ValueType,
    pub aggregation_type: AggregationType,
}

/// Value type of a data element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValueType {
    Integer,
    Number,
    Text,
    Boolean,
}

/// How DHIS2 aggregates a data element over time and hierarchy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AggregationType {
    Sum,
    Average,
    Count,
    None,
}

// ============================================================================
// Wire types (internal to the client)
// ============================================================================

/// Wire representation of an organisation unit creation request.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub(crate) struct OrgUnitWire {
    pub name: String,

    #[serde(rename = "shortName")]
    pub short_name: String,

    #[serde(rename = "openingDate")]
    pub opening_date: NaiveDate,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<ParentRefWire>,
}

/// Wire reference to a parent organisation unit.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub(crate) struct ParentRefWire {
    pub id: Uid,
}

/// Wire representation of a data element creation request.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub(crate) struct DataElementWire {
    pub name: String,

    #[serde(rename = "shortName")]
    pub short_name: String,

    pub code: String,

    #[serde(rename = "valueType")]
    pub value_type: ValueType,

    #[serde(rename = "aggregationType")]
    pub aggregation_type: AggregationType,

    #[serde(rename = "domainType")]
    pub domain_type: &'static str,

    #[serde(rename = "zeroIsSignificant")]
    pub zero_is_significant: bool,
}

/// Envelope DHIS2 returns on successful creation (HTTP 201).
#[derive(Clone, Debug, Deserialize)]
pub(crate) struct CreateResponseWire {
    pub response: CreatedReferenceWire,
}

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct CreatedReferenceWire {
    pub uid: Uid,
}

// ============================================================================
// Translation helpers
// ============================================================================

pub(crate) fn org_unit_to_wire(org_unit: &OrgUnit) -> OrgUnitWire {
    OrgUnitWire {
        name: org_unit.name.clone(),
        short_name: org_unit.short_name.clone(),
        opening_date: org_unit.opening_date,
        parent: org_unit
            .parent_id
            .as_ref()
            .map(|id| ParentRefWire { id: id.clone() }),
    }
}

pub(crate) fn data_element_to_wire(element: &DataElement) -> DataElementWire {
    DataElementWire {
        name: element.name.clone(),
        short_name: element.short_name.clone(),
        code: element.code.clone(),
        value_type: element.value_type,
        aggregation_type: element.aggregation_type,
        domain_type: "AGGREGATE",
        zero_is_significant: false,
    }
}

/// Truncate a string to at most `max_chars` characters, respecting character
/// boundaries.
pub fn truncate_chars(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opening_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2018, 1, 1).unwrap()
    }

    #[test]
    fn root_org_unit_omits_parent_on_the_wire() {
        let root = OrgUnit {
            name: "Kenya".to_string(),
            short_name: "KE".to_string(),
            opening_date: opening_date(),
            parent_id: None,
        };

        let json = serde_json::to_value(org_unit_to_wire(&root)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Kenya",
                "shortName": "KE",
                "openingDate": "2018-01-01"
            })
        );
    }

    #[test]
    fn child_org_unit_references_parent_by_id() {
        let county = OrgUnit {
            name: "Nairobi County".to_string(),
            short_name: "Nairobi".to_string(),
            opening_date: opening_date(),
            parent_id: Some("kenYa123456".to_string()),
        };

        let json = serde_json::to_value(org_unit_to_wire(&county)).unwrap();
        assert_eq!(json["parent"], serde_json::json!({"id": "kenYa123456"}));
    }

    #[test]
    fn data_element_wire_fixes_domain_type_and_zero_significance() {
        let element = DataElement {
            name: "MAL - RDT Dispensed".to_string(),
            short_name: "RDT Dispensed".to_string(),
            code: "MAL_RDT_DISP".to_string(),
            value_type: ValueType::Integer,
            aggregation_type: AggregationType::Sum,
        };

        let json = serde_json::to_value(data_element_to_wire(&element)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "MAL - RDT Dispensed",
                "shortName": "RDT Dispensed",
                "code": "MAL_RDT_DISP",
                "valueType": "INTEGER",
                "aggregationType": "SUM",
                "domainType": "AGGREGATE",
                "zeroIsSignificant": false
            })
        );
    }

    #[test]
    fn aggregation_types_serialise_in_screaming_snake_case() {
        assert_eq!(
            serde_json::to_value(AggregationType::Average).unwrap(),
            serde_json::json!("AVERAGE")
        );
        assert_eq!(
            serde_json::to_value(ValueType::Integer).unwrap(),
            serde_json::json!("INTEGER")
        );
    }

    #[test]
    fn creation_response_envelope_decodes_uid() {
        let wire: CreateResponseWire =
            serde_json::from_str(r#"{"response": {"uid": "abcDEF12345"}}"#).unwrap();
        assert_eq!(wire.response.uid, "abcDEF12345");
    }

    #[test]
    fn truncate_chars_is_a_noop_for_short_strings() {
        assert_eq!(truncate_chars("Nairobi", 50), "Nairobi");
    }

    #[test]
    fn truncate_chars_respects_character_boundaries() {
        assert_eq!(truncate_chars("Muranga", 3), "Mur");
        // Multi-byte characters count as one character each.
        assert_eq!(truncate_chars("Naïrobi", 3), "Naï");
    }
}
