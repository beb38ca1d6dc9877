pub mod errors;
pub mod id;
pub mod notifications;
pub mod types;

pub use errors::{ApiError, ConsoleError, FieldError, ThemeError, VariationError};
pub use id::{new_correlation_id, new_id, ThemeId};
pub use notifications::{Notification, NotificationLevel, NotificationQueue};
pub use types::{mix, Color};

pub type Result<T> = std::result::Result<T, ConsoleError>;
