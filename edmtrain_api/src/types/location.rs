use serde::Serialize;

/// A city or region events can be searched in.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: i64,
    pub city: Option<String>,
    pub state: Option<String>,
    /// Two-letter state abbreviation.
    pub state_code: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub link: Option<String>,
}
