#[derive(Debug, thiserror::Error)]
pub enum ProvisionError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("failed to read config file: {0}")]
    ConfigRead(std::io::Error),
    #[error("failed to parse config file: {0}")]
    ConfigParse(serde_json::Error),
    #[error("failed to build HTTP client: {0}")]
    HttpClientBuild(reqwest::Error),
    #[error("HTTP request failed: {0}")]
    Http(reqwest::Error),
    #[error("failed to decode DHIS2 response: {0}")]
    ResponseDecode(reqwest::Error),
    #[error("root organisation unit was rejected by DHIS2")]
    RootOrgUnitRejected,
    #[error("failed to serialise id mapping: {0}")]
    MappingSerialisation(serde_json::Error),
    #[error("failed to write id mapping file: {0}")]
    MappingWrite(std::io::Error),
}

pub type ProvisionResult<T> = std::result::Result<T, ProvisionError>;
