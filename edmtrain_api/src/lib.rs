mod client;
mod errors;
mod mapper;
mod query;
pub mod types;
pub use self::client::{Client, ClientBuilder, DEFAULT_BASE_URL};
pub use self::errors::{Error, MappingError};
pub use self::mapper::{parse_events, parse_locations};
pub use self::query::{EventQuery, LocationQuery, Query, QueryArgs};
