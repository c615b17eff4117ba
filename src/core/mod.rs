pub mod dispatcher;
pub mod formatters;
pub mod templates;

pub use crate::domain::model::{DeliveryOutcome, DispatchReport, DispatchStats, RecipientKind};
pub use crate::domain::ports::{AutomationDriver, Transport};
pub use crate::utils::error::Result;
