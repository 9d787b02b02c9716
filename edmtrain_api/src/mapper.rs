//! Maps the service's JSON envelope onto the domain types in [`crate::types`].
//!
//! Every element is decoded into a raw struct whose fields are all optional,
//! then converted field by field so that defaults (`ticketLink`, venue
//! `state`, ...) and required fields are decided in one place. A single bad
//! element fails the whole response.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::Value;

use crate::{
    errors::{Error, MappingError},
    types::{Artist, Event, Location, Venue, VIRTUAL_LOCATION},
};

const DATE_FORMAT: &str = "%Y-%m-%d";
const CREATED_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";
const CREATED_OFFSET_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%z";
const DEFAULT_VENUE_STATE: &str = "None";

/// Top-level wrapper around every response.
#[derive(Deserialize, Debug)]
pub(crate) struct Envelope {
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: Option<Value>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEvent {
    id: Option<i64>,
    link: Option<String>,
    ticket_link: Option<String>,
    name: Option<String>,
    ages: Option<String>,
    festival_ind: Option<bool>,
    electronic_genre_ind: Option<bool>,
    other_genre_ind: Option<bool>,
    date: Option<String>,
    created_date: Option<String>,
    venue: Option<RawVenue>,
    artist_list: Option<Vec<RawArtist>>,
}

/// Address fields stay untyped until the venue is known not to be virtual.
#[derive(Deserialize)]
struct RawVenue {
    id: Option<i64>,
    name: Option<String>,
    location: Option<String>,
    address: Option<Value>,
    state: Option<Value>,
    latitude: Option<Value>,
    longitude: Option<Value>,
}

#[derive(Deserialize)]
struct RawArtist {
    id: Option<i64>,
    name: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawLocation {
    id: Option<i64>,
    city: Option<String>,
    state: Option<String>,
    state_code: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    link: Option<String>,
}

pub(crate) fn decode_envelope(body: &str) -> Result<Envelope, MappingError> {
    Ok(serde_json::from_str(body)?)
}

/// Parses a raw `/events` response body.
pub fn parse_events(body: &str) -> Result<Vec<Event>, Error> {
    events_from_envelope(decode_envelope(body)?)
}

/// Parses a raw `/locations` response body.
pub fn parse_locations(body: &str) -> Result<Vec<Location>, Error> {
    locations_from_envelope(decode_envelope(body)?)
}

pub(crate) fn events_from_envelope(envelope: Envelope) -> Result<Vec<Event>, Error> {
    let events = into_data(envelope)?
        .into_iter()
        .map(|value| map_event(serde_json::from_value(value)?))
        .collect::<Result<Vec<_>, MappingError>>()?;
    Ok(events)
}

pub(crate) fn locations_from_envelope(envelope: Envelope) -> Result<Vec<Location>, Error> {
    let locations = into_data(envelope)?
        .into_iter()
        .map(|value| map_location(serde_json::from_value(value)?))
        .collect::<Result<Vec<_>, MappingError>>()?;
    Ok(locations)
}

/// Checks `success` before anything else is looked at.
fn into_data(envelope: Envelope) -> Result<Vec<Value>, Error> {
    if !envelope.success {
        let message = envelope
            .message
            .unwrap_or_else(|| "unknown error".to_string());
        tracing::warn!("API reported failure: {}", message);
        return Err(Error::Api(message));
    }
    let data = envelope
        .data
        .ok_or(MappingError::MissingField("data"))?;
    Ok(serde_json::from_value(data).map_err(MappingError::from)?)
}

fn required<T>(value: Option<T>, field: &'static str) -> Result<T, MappingError> {
    value.ok_or(MappingError::MissingField(field))
}

/// Types a field left as raw JSON. `null` counts as absent.
fn typed<T: DeserializeOwned>(value: Option<Value>) -> Result<Option<T>, MappingError> {
    value
        .filter(|v| !v.is_null())
        .map(serde_json::from_value)
        .transpose()
        .map_err(MappingError::from)
}

fn map_event(raw: RawEvent) -> Result<Event, MappingError> {
    let date = required(raw.date, "date")?;
    let created = required(raw.created_date, "createdDate")?;
    let artists = required(raw.artist_list, "artistList")?
        .into_iter()
        .map(map_artist)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Event {
        id: required(raw.id, "id")?,
        link: required(raw.link, "link")?,
        ticket_link: raw.ticket_link,
        name: raw.name,
        ages: raw.ages,
        is_festival: required(raw.festival_ind, "festivalInd")?,
        is_electronic: required(raw.electronic_genre_ind, "electronicGenreInd")?,
        is_other_genre: required(raw.other_genre_ind, "otherGenreInd")?,
        date: parse_date(&date)?,
        created: parse_created(&created)?,
        venue: map_venue(required(raw.venue, "venue")?)?,
        artists,
    })
}

fn map_venue(raw: RawVenue) -> Result<Venue, MappingError> {
    let id = required(raw.id, "venue.id")?;
    let name = required(raw.name, "venue.name")?;
    let location = required(raw.location, "venue.location")?;

    // Online events carry no usable address or coordinates.
    if location == VIRTUAL_LOCATION {
        return Ok(Venue::online(id, name));
    }

    Ok(Venue {
        id,
        name,
        location,
        address: required(typed(raw.address)?, "venue.address")?,
        state: typed(raw.state)?.unwrap_or_else(|| DEFAULT_VENUE_STATE.to_string()),
        latitude: required(typed(raw.latitude)?, "venue.latitude")?,
        longitude: required(typed(raw.longitude)?, "venue.longitude")?,
    })
}

fn map_artist(raw: RawArtist) -> Result<Artist, MappingError> {
    Ok(Artist {
        id: required(raw.id, "artist.id")?,
        name: required(raw.name, "artist.name")?,
    })
}

fn map_location(raw: RawLocation) -> Result<Location, MappingError> {
    Ok(Location {
        id: required(raw.id, "id")?,
        city: raw.city,
        state: raw.state,
        state_code: raw.state_code,
        latitude: required(raw.latitude, "latitude")?,
        longitude: required(raw.longitude, "longitude")?,
        link: raw.link,
    })
}

fn parse_date(value: &str) -> Result<NaiveDate, MappingError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|source| MappingError::InvalidDate {
        field: "date",
        value: value.to_string(),
        source,
    })
}

/// Accepts RFC 3339 (`Z` or `±HH:MM`), basic `±HHMM` offsets and bare local
/// timestamps, which are read as UTC.
fn parse_created(value: &str) -> Result<DateTime<Utc>, MappingError> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Ok(ts.with_timezone(&Utc));
    }
    if let Ok(ts) = DateTime::parse_from_str(value, CREATED_OFFSET_FORMAT) {
        return Ok(ts.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(value, CREATED_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|source| MappingError::InvalidDate {
            field: "createdDate",
            value: value.to_string(),
            source,
        })
}
