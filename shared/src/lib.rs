use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Error for schedule values that violate their documented ranges.
///
/// Out-of-range time components are rejected at construction rather than
/// clamped, so everything downstream can assume valid hours and minutes.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScheduleError {
    #[error("hour must be between 0 and 23, got {0}")]
    HourOutOfRange(u8),
    #[error("minute must be between 0 and 59, got {0}")]
    MinuteOutOfRange(u8),
    #[error("invalid time string: '{0}' (expected HH:MM)")]
    InvalidTimeString(String),
}

/// A time of day as stored for a business schedule.
///
/// Serialized as zero-padded 24-hour `"HH:MM"` (see [`TimeOfDay::to_storage`]);
/// the 12-hour display form is produced by the schedule service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeOfDay {
    pub hour: u8,
    pub minute: u8,
}

impl Serialize for TimeOfDay {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_storage())
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        TimeOfDay::from_storage(&value).map_err(serde::de::Error::custom)
    }
}

impl TimeOfDay {
    /// Create a time of day, rejecting out-of-range components.
    pub fn new(hour: u8, minute: u8) -> Result<Self, ScheduleError> {
        if hour > 23 {
            return Err(ScheduleError::HourOutOfRange(hour));
        }
        if minute > 59 {
            return Err(ScheduleError::MinuteOutOfRange(minute));
        }
        Ok(Self { hour, minute })
    }

    /// Parse the `"HH:MM"` storage form.
    pub fn from_storage(value: &str) -> Result<Self, ScheduleError> {
        let parsed = NaiveTime::parse_from_str(value, "%H:%M")
            .map_err(|_| ScheduleError::InvalidTimeString(value.to_string()))?;
        Ok(Self {
            hour: parsed.hour() as u8,
            minute: parsed.minute() as u8,
        })
    }

    /// Render the zero-padded 24-hour storage form, e.g. `"09:00"`.
    pub fn to_storage(&self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }
}

/// AM/PM marker for 12-hour display times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    pub fn label(&self) -> &'static str {
        match self {
            Meridiem::Am => "AM",
            Meridiem::Pm => "PM",
        }
    }
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Weekday in the fixed Monday-first order the schedule grouping relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All weekdays in traversal order (Monday first).
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Spanish display name as shown in the schedule text.
    pub fn display_name(&self) -> &'static str {
        match self {
            Weekday::Monday => "Lunes",
            Weekday::Tuesday => "Martes",
            Weekday::Wednesday => "Miércoles",
            Weekday::Thursday => "Jueves",
            Weekday::Friday => "Viernes",
            Weekday::Saturday => "Sábado",
            Weekday::Sunday => "Domingo",
        }
    }
}

/// Opening hours for a single weekday.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayHours {
    pub open: TimeOfDay,
    pub close: TimeOfDay,
    pub enabled: bool,
}

impl Default for DayHours {
    fn default() -> Self {
        Self {
            open: TimeOfDay { hour: 9, minute: 0 },
            close: TimeOfDay { hour: 18, minute: 0 },
            enabled: true,
        }
    }
}

/// A full week of opening hours, always holding all 7 days in
/// Monday-first order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklySchedule {
    days: [DayHours; 7],
}

impl WeeklySchedule {
    /// Build a schedule from explicit per-day hours, Monday first.
    pub fn from_days(days: [DayHours; 7]) -> Self {
        Self { days }
    }

    pub fn day(&self, weekday: Weekday) -> &DayHours {
        &self.days[weekday as usize]
    }

    pub fn day_mut(&mut self, weekday: Weekday) -> &mut DayHours {
        &mut self.days[weekday as usize]
    }

    /// Iterate the week in Monday-first order.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &DayHours)> {
        Weekday::ALL.iter().map(move |day| (*day, &self.days[*day as usize]))
    }
}

impl Default for WeeklySchedule {
    /// 09:00–18:00 every day, Monday through Saturday enabled,
    /// Sunday disabled.
    fn default() -> Self {
        let mut days = [DayHours::default(); 7];
        days[Weekday::Sunday as usize].enabled = false;
        Self { days }
    }
}

/// A geographic coordinate pair (degrees).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// A map viewport: center point plus span in each axis (degrees).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapRegion {
    pub center: GeoPoint,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

/// Category of an entry in the named-place directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PlaceKind {
    Department,
    City,
    Island,
}

/// A named place in the static search directory.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NamedPlace {
    pub name: &'static str,
    pub coordinates: GeoPoint,
    pub kind: PlaceKind,
}

/// Axis-aligned bounding box approximating one administrative department.
///
/// Boxes in the resolver table may overlap; resolution is first-match in
/// declared order, so the order of the table is part of the contract.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DepartmentBounds {
    pub name: &'static str,
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl DepartmentBounds {
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        latitude >= self.south
            && latitude <= self.north
            && longitude >= self.west
            && longitude <= self.east
    }
}

/// Result of validating a single form field.
///
/// `message` is empty when the field is valid, otherwise it carries the
/// Spanish text shown directly to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldValidation {
    pub is_valid: bool,
    pub message: String,
}

impl FieldValidation {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            message: String::new(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            message: message.into(),
        }
    }
}

/// The five independent password rules, each evaluated on the raw string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordChecks {
    pub min_length: bool,
    pub uppercase: bool,
    pub lowercase: bool,
    pub digit: bool,
    pub special: bool,
}

impl PasswordChecks {
    pub fn passed(&self) -> u8 {
        [
            self.min_length,
            self.uppercase,
            self.lowercase,
            self.digit,
            self.special,
        ]
        .iter()
        .filter(|check| **check)
        .count() as u8
    }
}

/// Strength category derived from the number of satisfied password rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PasswordStrength {
    MuyDebil,
    Debil,
    Media,
    Fuerte,
}

impl PasswordStrength {
    /// Spanish label as shown in the strength meter.
    pub fn label(&self) -> &'static str {
        match self {
            PasswordStrength::MuyDebil => "Muy débil",
            PasswordStrength::Debil => "Débil",
            PasswordStrength::Media => "Media",
            PasswordStrength::Fuerte => "Fuerte",
        }
    }

    /// Display hint for the strength meter bar.
    pub fn color(&self) -> &'static str {
        match self {
            PasswordStrength::MuyDebil => "#e53935",
            PasswordStrength::Debil => "#fb8c00",
            PasswordStrength::Media => "#fdd835",
            PasswordStrength::Fuerte => "#43a047",
        }
    }
}

/// Full password evaluation shown by the registration form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PasswordSecurityReport {
    pub checks: PasswordChecks,
    pub strength: PasswordStrength,
    pub color: String,
    pub percentage: u8,
    pub passed_checks: u8,
    pub total_checks: u8,
}

/// Account role chosen at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountRole {
    Tourist,
    Business,
}

impl AccountRole {
    /// Document collection this role's profile records live under.
    pub fn collection(&self) -> &'static str {
        match self {
            AccountRole::Tourist => "turistas",
            AccountRole::Business => "centros_turisticos",
        }
    }
}

/// Sign-in credentials kept on device when the user opts into
/// "remember me".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RememberedCredentials {
    pub email: String,
    pub password: String,
}

/// Authenticated session as returned by the identity backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthSession {
    pub uid: String,
    pub email: String,
}

/// Canonical tourist profile record.
///
/// Legacy records mix Spanish and English field names; the profile service
/// normalizes them into this one schema at the storage boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TouristProfile {
    pub uid: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub nationality: String,
    pub residence: String,
    pub document_type: String,
    pub document_number: String,
    pub photo_url: Option<String>,
    pub location: Option<GeoPoint>,
}

/// Canonical tourist-business (centro turístico) profile record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessProfile {
    pub uid: String,
    pub name: String,
    pub description: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub location: Option<GeoPoint>,
    pub schedule: WeeklySchedule,
    pub logo_url: Option<String>,
    pub cover_url: Option<String>,
}

/// Checkpoint of the multi-step registration wizard, persisted through the
/// key-value port so an interrupted sign-up can resume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationProgress {
    pub role: AccountRole,
    pub step: u8,
    pub form: serde_json::Value,
}
