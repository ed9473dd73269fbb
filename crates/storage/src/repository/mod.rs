pub mod entry;
pub mod participant;
pub mod player;
pub mod standing;
pub mod week;
