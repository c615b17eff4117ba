pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::app::{EmailMessenger, WhatsAppMessenger};
pub use crate::config::{EmailSettings, Settings, WhatsAppSettings};
pub use crate::core::dispatcher::Dispatcher;
pub use crate::domain::model::{
    ClientInquiry, CustomerInterest, DeliveryOutcome, DispatchReport, DispatchStats,
    RecipientKind, UnitDetails, UnitInfo,
};
pub use crate::domain::ports::{AutomationDriver, Transport};
pub use crate::utils::error::{MessengerError, Result};
