pub mod field;
pub mod selection;
pub mod service;
pub mod slot;

pub use field::{FieldKind, FieldSpec};
pub use selection::BookingSelection;
pub use service::ServiceItem;
pub use slot::{DayPart, GroupedSlots, TimeSlot};
