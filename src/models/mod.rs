pub mod category;
pub mod debt;
pub mod event;
pub mod expense;
pub mod marker;
pub mod session;
pub mod simulation;
pub mod summary;

pub use category::Category;
pub use debt::Debt;
pub use event::{Event, Recurrence};
pub use expense::{Expense, Payment};
pub use marker::{ColorTag, Marker};
pub use session::{Profile, Session};
pub use simulation::{ShiftEconomics, Simulation};
pub use summary::{BaseValues, Summary};
