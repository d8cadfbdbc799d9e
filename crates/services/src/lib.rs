#![forbid(unsafe_code)]

pub mod encouragement;
pub mod error;
pub mod notifier;
pub mod quiz_service;
pub mod tutorial_service;

pub use coach_core::Clock;

pub use encouragement::EncouragementPicker;
pub use error::CoachServiceError;
pub use notifier::{Notification, Notifier};
pub use quiz_service::QuizService;
pub use tutorial_service::{ProgressSnapshot, TutorialService};
