mod common;
pub use self::common::{Query, QueryArgs};

mod event;
pub use self::event::EventQuery;

mod location;
pub use self::location::LocationQuery;
