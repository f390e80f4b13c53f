pub mod direction;
pub mod event;
pub mod shift;
pub mod summary;

pub use direction::Direction;
pub use event::PunchEvent;
pub use shift::{Shift, ShiftRow};
pub use summary::ShiftSummary;
