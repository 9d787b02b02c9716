use crate::{mapper, types::Location, Client, Error};

use super::common::{Query, QueryArgs};

/// Builder for `/locations` requests. Obtained from [`Client::query_for_locations`].
///
/// The service requires `state` whenever `city` is given; that is not
/// checked here and comes back as [`Error::Api`].
#[derive(Clone, Debug)]
pub struct LocationQuery<'a> {
    client: &'a Client,
    args: QueryArgs,
}

impl Query for LocationQuery<'_> {
    fn endpoint(&self) -> &'static str {
        "locations"
    }
    fn args(&self) -> &QueryArgs {
        &self.args
    }
    fn client(&self) -> &Client {
        self.client
    }
}

impl<'a> LocationQuery<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self {
            client,
            args: QueryArgs::default(),
        }
    }

    /// State or province, e.g. `"California"`.
    pub fn with_state(mut self, state: &str) -> Self {
        self.args.set("state", state);
        self
    }

    pub fn with_city(mut self, city: &str) -> Self {
        self.args.set("city", city);
        self
    }

    pub async fn execute(&self) -> Result<Vec<Location>, Error> {
        let envelope = self.client.get(self).await?;
        let locations = mapper::locations_from_envelope(envelope)?;
        tracing::debug!("Fetched {} locations", locations.len());
        Ok(locations)
    }
}
