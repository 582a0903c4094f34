pub mod dispatch;
pub mod disciplines;
pub mod epreuves;
pub mod events;
pub mod shared;
pub mod venues;
