use chrono::NaiveDate;

use crate::{mapper, types::Event, Client, Error};

use super::common::{Query, QueryArgs};

/// Builder for `/events` requests. Obtained from [`Client::query_for_events`].
#[derive(Clone, Debug)]
pub struct EventQuery<'a> {
    client: &'a Client,
    args: QueryArgs,
}

impl Query for EventQuery<'_> {
    fn endpoint(&self) -> &'static str {
        "events"
    }
    fn args(&self) -> &QueryArgs {
        &self.args
    }
    fn client(&self) -> &Client {
        self.client
    }
}

impl<'a> EventQuery<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self {
            client,
            args: QueryArgs::default(),
        }
    }

    /// Matches events by name.
    pub fn with_event_name(mut self, name: &str) -> Self {
        self.args.set("eventName", name);
        self
    }

    pub fn with_artist_ids(mut self, artist_ids: &[i64]) -> Self {
        self.args.set_ids("artistIds", artist_ids);
        self
    }

    pub fn with_venue_ids(mut self, venue_ids: &[i64]) -> Self {
        self.args.set_ids("venueIds", venue_ids);
        self
    }

    pub fn with_location_ids(mut self, location_ids: &[i64]) -> Self {
        self.args.set_ids("locationIds", location_ids);
        self
    }

    /// Events on or after this local date. The service only returns future events.
    pub fn with_start_date(mut self, start_date: NaiveDate) -> Self {
        self.args.set_date("startDate", start_date);
        self
    }

    /// Events on or before this local date.
    pub fn with_end_date(mut self, end_date: NaiveDate) -> Self {
        self.args.set_date("endDate", end_date);
        self
    }

    /// Events added to EDMTrain on or after this UTC date.
    pub fn with_created_start_date(mut self, created_start_date: NaiveDate) -> Self {
        self.args.set_date("createdStartDate", created_start_date);
        self
    }

    /// Events added to EDMTrain on or before this UTC date.
    pub fn with_created_end_date(mut self, created_end_date: NaiveDate) -> Self {
        self.args.set_date("createdEndDate", created_end_date);
        self
    }

    /// Only festivals (`true`) or only non-festivals (`false`). Unset returns both.
    pub fn with_festival(mut self, is_festival: bool) -> Self {
        self.args.set_flag("festivalInd", is_festival);
        self
    }

    /// Include electronic shows. The service defaults to `true`.
    pub fn with_electronic_genre(mut self, include: bool) -> Self {
        self.args.set_flag("includeElectronicGenreInd", include);
        self
    }

    /// Include non-electronic shows. The service defaults to `false`.
    pub fn with_other_genre(mut self, include: bool) -> Self {
        self.args.set_flag("includeOtherGenreInd", include);
        self
    }

    /// Sends the query and maps every returned event.
    pub async fn execute(&self) -> Result<Vec<Event>, Error> {
        let envelope = self.client.get(self).await?;
        let events = mapper::events_from_envelope(envelope)?;
        tracing::debug!("Fetched {} events", events.len());
        Ok(events)
    }
}
