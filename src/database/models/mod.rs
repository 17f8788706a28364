pub mod class;
pub mod time_slot;

pub use class::{Class, ClassRow, NewClass};
pub use time_slot::TimeSlot;
