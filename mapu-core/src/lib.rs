//! # Mapu Core
//!
//! Domain layer for the Mapu tourism directory. This crate holds the
//! business logic behind the (excluded) mobile screens: form validation,
//! password strength, business-hours normalization, coordinate-to-department
//! resolution and named-place search, plus the port traits for the external
//! identity/document/blob/key-value backends.
//!
//! Everything in [`domain`] outside the profile and session services is a
//! pure, synchronous computation over in-memory data; the I/O lives behind
//! the traits in [`storage`].

pub mod domain;
pub mod storage;

pub use domain::geography_service::{GeographyService, UNSPECIFIED_DEPARTMENT};
pub use domain::password_service::PasswordService;
pub use domain::place_service::PlaceDirectory;
pub use domain::profile_service::ProfileService;
pub use domain::schedule_service::ScheduleService;
pub use domain::session_service::SessionService;
pub use domain::validation_service::ValidationService;
pub use storage::traits::{AuthError, BlobStore, DocumentStore, IdentityGateway, KeyValueStore};

/// Aggregate of the stateless domain services, wired once by the app shell.
#[derive(Clone, Default)]
pub struct MapuServices {
    pub validation: ValidationService,
    pub passwords: PasswordService,
    pub schedule: ScheduleService,
    pub geography: GeographyService,
    pub places: PlaceDirectory,
}

impl MapuServices {
    pub fn new() -> Self {
        Self::default()
    }
}
