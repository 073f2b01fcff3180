//! Domain services for the Mapu tourism directory.

pub mod geography_service;
pub mod password_service;
pub mod place_service;
pub mod profile_service;
pub mod schedule_service;
pub mod session_service;
pub mod validation_service;

pub use geography_service::GeographyService;
pub use password_service::PasswordService;
pub use place_service::PlaceDirectory;
pub use profile_service::ProfileService;
pub use schedule_service::ScheduleService;
pub use session_service::SessionService;
pub use validation_service::ValidationService;
