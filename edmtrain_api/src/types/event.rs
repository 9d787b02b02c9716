use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use super::{Artist, Venue};

/// An event listed on EDMTrain.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i64,

    /// EDMTrain page for the event.
    pub link: String,

    pub ticket_link: Option<String>,

    pub name: Option<String>,

    /// Age restriction as free text, e.g. `"18+"`.
    pub ages: Option<String>,

    pub is_festival: bool,

    pub is_electronic: bool,

    pub is_other_genre: bool,

    /// Local date the event takes place.
    pub date: NaiveDate,

    /// When the event was added to EDMTrain.
    pub created: DateTime<Utc>,

    pub venue: Venue,

    /// Performers in the order the service lists them. May be empty.
    pub artists: Vec<Artist>,
}

impl Event {
    /// Name of the event, falling back to the comma-joined artist names
    /// when the service sends none.
    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => self
                .artists
                .iter()
                .map(|a| a.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}
