pub mod member;
pub mod weekday;

pub use member::{DayAvailability, NewMember, TeamMember, TimeWindow};
pub use weekday::Weekday;
