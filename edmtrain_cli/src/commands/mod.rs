pub mod events;
pub mod locations;
