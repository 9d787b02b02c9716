use serde::Serialize;

/// A performer listed on an event.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Artist {
    pub id: i64,
    pub name: String,
}
