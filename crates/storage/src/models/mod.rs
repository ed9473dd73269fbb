pub mod player;
pub mod pro;
pub mod season_standing;
pub mod week;
pub mod week_entry;
pub mod week_participant;

pub use player::Player;
pub use pro::Pro;
pub use season_standing::SeasonStanding;
pub use week::Week;
pub use week_entry::WeekEntry;
pub use week_participant::WeekParticipant;
