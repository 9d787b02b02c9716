use serde::Serialize;

/// `location` value the service uses for online-only events.
pub const VIRTUAL_LOCATION: &str = "Virtual";

/// Address and state reported for virtual venues.
pub const ONLINE_PLACEHOLDER: &str = "Online";

/// Where an event takes place.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Venue {
    pub id: i64,
    pub name: String,
    /// General location, e.g. `"Chicago, IL"` or [`VIRTUAL_LOCATION`].
    pub location: String,
    pub address: String,
    /// US state of the venue, `"None"` when the service omits it.
    pub state: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Venue {
    /// Builds the normalized record for an online-only venue. Address and
    /// state are [`ONLINE_PLACEHOLDER`] and the coordinates are `(0.0, 0.0)`.
    pub fn online(id: i64, name: String) -> Self {
        Self {
            id,
            name,
            location: VIRTUAL_LOCATION.to_string(),
            address: ONLINE_PLACEHOLDER.to_string(),
            state: ONLINE_PLACEHOLDER.to_string(),
            latitude: 0.0,
            longitude: 0.0,
        }
    }

    pub fn is_virtual(&self) -> bool {
        self.location == VIRTUAL_LOCATION
    }
}
