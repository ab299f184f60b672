//! Constants used throughout the DHIS2 core crate.
//!
//! Path and endpoint constants live here so the client, the provisioning
//! sequences and the CLI agree on them.

/// Default path of the JSON configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "config/config.json";

/// Default path of the county name→uid mapping file.
pub const COUNTY_MAPPING_PATH: &str = "data/mappings/county_id_map.json";

/// Default path of the data-element code→uid mapping file.
pub const DATA_ELEMENT_MAPPING_PATH: &str = "data/mappings/dataelement_map.json";

/// API endpoint for organisation unit creation, relative to the base URL.
pub const ORG_UNITS_ENDPOINT: &str = "api/organisationUnits";

/// API endpoint for data element creation, relative to the base URL.
pub const DATA_ELEMENTS_ENDPOINT: &str = "api/dataElements";

/// Maximum length of an organisation unit short name accepted by DHIS2.
pub const MAX_SHORT_NAME_LEN: usize = 50;
