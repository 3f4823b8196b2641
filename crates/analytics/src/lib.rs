pub mod handler;
pub mod projection;
pub mod safe_save;
pub mod weekly;

pub use projection::{daily_safe_save, project, Confidence, Projection};
pub use safe_save::{instant_recommendation, SafeSave};
pub use weekly::{weekly_breakdown, DayTotals};
