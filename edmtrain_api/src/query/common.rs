//! Shared query infrastructure: the [`Query`] trait and the [`QueryArgs`] parameter map.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use url::Url;

use crate::{Client, Error};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Trait implemented by both query builders. Provides URL assembly on top of
/// the builder's endpoint and accumulated parameters.
pub trait Query {
    /// Resource path below the client's base URL, e.g. `events`.
    fn endpoint(&self) -> &'static str;

    /// Parameters set so far.
    fn args(&self) -> &QueryArgs;

    /// Client the query was created from.
    fn client(&self) -> &Client;

    /// Assembles the full request URL, ending with the client token.
    fn url(&self) -> Result<Url, Error> {
        let client = self.client();
        Ok(self
            .args()
            .to_url(client.base_url(), self.endpoint(), client.token())?)
    }
}

/// Query parameters keyed by their API name. Setting a key again replaces
/// the previous value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryArgs {
    args: BTreeMap<&'static str, String>,
}

impl QueryArgs {
    pub fn set(&mut self, key: &'static str, value: impl Into<String>) {
        self.args.insert(key, value.into());
    }

    pub fn set_ids(&mut self, key: &'static str, ids: &[i64]) {
        let joined = ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",");
        self.set(key, joined);
    }

    pub fn set_date(&mut self, key: &'static str, date: NaiveDate) {
        self.set(key, date.format(DATE_FORMAT).to_string());
    }

    pub fn set_flag(&mut self, key: &'static str, flag: bool) {
        self.set(key, flag.to_string());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.args.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.args.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Builds `<base>/<endpoint>?key=value&...&client=<token>`.
    ///
    /// Values only have spaces escaped before the string is handed to
    /// [`Url::parse`], which percent-encodes any remaining characters that
    /// are not valid in a query (quotes, `<`, non-ASCII). Delimiters such as
    /// `&` and `=` pass through and must not appear in values.
    pub fn to_url(&self, base_url: &str, endpoint: &str, token: &str) -> Result<Url, url::ParseError> {
        let mut url = format!("{}/{}?", base_url.trim_end_matches('/'), endpoint);
        for (key, value) in self.iter() {
            url.push_str(key);
            url.push('=');
            url.push_str(&encode_value(value));
            url.push('&');
        }
        url.push_str("client=");
        url.push_str(token);
        Url::parse(&url)
    }
}

/// Percent-encodes spaces. No other characters are touched here.
pub fn encode_value(value: &str) -> String {
    value.replace(' ', "%20")
}
