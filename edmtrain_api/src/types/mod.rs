mod artist;
pub use self::artist::Artist;

mod venue;
pub use self::venue::{Venue, ONLINE_PLACEHOLDER, VIRTUAL_LOCATION};

mod event;
pub use self::event::Event;

mod location;
pub use self::location::Location;
