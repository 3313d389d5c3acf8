#![forbid(unsafe_code)]

pub mod app_services;
pub mod enrollment_service;
pub mod error;
pub mod session_service;

pub use edulearn_core::Clock;

pub use app_services::AppServices;
pub use enrollment_service::{CompleteResult, EnrollResult, EnrollmentService};
pub use error::{AccountError, AppServicesError, EnrollmentError};
pub use session_service::SessionService;
