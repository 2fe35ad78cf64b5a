/// Application configuration, provided once through context at the root.
///
/// Service roots are opaque to the rest of the app; the persistence flag
/// resolves the historically inconsistent alignment behavior explicitly
/// instead of hard-coding one of the observed variants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the record store's OData endpoint.
    pub dataverse_root: String,
    /// Base URL of the directory connector.
    pub connectors_root: String,
    /// Whether page alignment preferences survive reloads.
    pub persist_alignment: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dataverse_root: "/api/data/v9.2".to_string(),
            connectors_root: "/api/connectors/office365users".to_string(),
            persist_alignment: false,
        }
    }
}
