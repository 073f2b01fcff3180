//! Profile loading, saving and record normalization.
//!
//! Legacy profile records name their fields inconsistently across Spanish
//! and English synonyms (`nombres` vs `firstName`, `telefono` vs `phone`),
//! and older business records store the weekly schedule as a per-day map
//! keyed by Spanish day names. This service normalizes every record into
//! the canonical `shared` schema right at the storage boundary, so nothing
//! past this point has to know about the synonyms. Saving always emits the
//! canonical schema.

use anyhow::Result;
use log::{debug, info};
use serde_json::Value;

use crate::domain::geography_service::{GeographyService, UNSPECIFIED_DEPARTMENT};
use crate::storage::traits::DocumentStore;
use shared::{AccountRole, BusinessProfile, GeoPoint, TimeOfDay, TouristProfile, Weekday, WeeklySchedule};

/// Service for reading and writing profile records through the document
/// store port.
pub struct ProfileService<D: DocumentStore> {
    documents: D,
    geography: GeographyService,
}

impl<D: DocumentStore> ProfileService<D> {
    pub fn new(documents: D) -> Self {
        Self {
            documents,
            geography: GeographyService::new(),
        }
    }

    /// Load and normalize a tourist profile, `Ok(None)` when no record
    /// exists for the uid.
    pub fn load_tourist(&self, uid: &str) -> Result<Option<TouristProfile>> {
        debug!("Loading tourist profile: {}", uid);
        let record = self.documents.get_document(AccountRole::Tourist.collection(), uid)?;
        Ok(record.map(|value| Self::normalize_tourist_record(uid, &value)))
    }

    /// Persist a tourist profile in the canonical schema.
    pub fn save_tourist(&self, profile: &TouristProfile) -> Result<()> {
        info!("Saving tourist profile: {}", profile.uid);
        let record = serde_json::to_value(profile)?;
        self.documents
            .set_document(AccountRole::Tourist.collection(), &profile.uid, record)
    }

    /// Load and normalize a centro turístico profile.
    pub fn load_business(&self, uid: &str) -> Result<Option<BusinessProfile>> {
        debug!("Loading business profile: {}", uid);
        let record = self.documents.get_document(AccountRole::Business.collection(), uid)?;
        Ok(record.map(|value| self.normalize_business_record(uid, &value)))
    }

    /// Persist a centro turístico profile in the canonical schema.
    pub fn save_business(&self, profile: &BusinessProfile) -> Result<()> {
        info!("Saving business profile: {}", profile.uid);
        let record = serde_json::to_value(profile)?;
        self.documents
            .set_document(AccountRole::Business.collection(), &profile.uid, record)
    }

    /// Map a raw tourist record onto the canonical schema, whichever
    /// synonym spelling the record uses.
    pub fn normalize_tourist_record(uid: &str, record: &Value) -> TouristProfile {
        TouristProfile {
            uid: uid.to_string(),
            first_name: text_field(record, &["first_name", "firstName", "nombres", "nombre"]),
            last_name: text_field(record, &["last_name", "lastName", "apellidos", "apellido"]),
            email: text_field(record, &["email", "correo"]),
            phone: text_field(record, &["phone", "telefono", "teléfono"]),
            nationality: text_field(record, &["nationality", "nacionalidad"]),
            residence: text_field(record, &["residence", "residencia", "lugar_residencia"]),
            document_type: text_field(record, &["document_type", "documentType", "tipo_documento", "tipoDocumento"]),
            document_number: text_field(record, &["document_number", "documentNumber", "numero_documento", "numeroDocumento"]),
            photo_url: optional_text(record, &["photo_url", "photoUrl", "foto"]),
            location: location_field(record),
        }
    }

    /// Map a raw business record onto the canonical schema.
    ///
    /// When the record has coordinates but no stored department, the
    /// department is resolved from the coordinates.
    pub fn normalize_business_record(&self, uid: &str, record: &Value) -> BusinessProfile {
        let location = location_field(record);
        let mut department = text_field(record, &["department", "departamento"]);
        if department.is_empty() {
            department = match location {
                Some(point) => self
                    .geography
                    .resolve_department(point.latitude, point.longitude)
                    .to_string(),
                None => UNSPECIFIED_DEPARTMENT.to_string(),
            };
        }

        BusinessProfile {
            uid: uid.to_string(),
            name: text_field(record, &["name", "nombre", "nombre_centro", "nombreCentro"]),
            description: text_field(record, &["description", "descripcion", "descripción"]),
            email: text_field(record, &["email", "correo"]),
            phone: text_field(record, &["phone", "telefono", "teléfono"]),
            department,
            location,
            schedule: schedule_field(record),
            logo_url: optional_text(record, &["logo_url", "logoUrl", "logo"]),
            cover_url: optional_text(record, &["cover_url", "coverUrl", "portada"]),
        }
    }
}

/// First present string value among the synonym keys, trimmed; empty
/// string when none is present.
fn text_field(record: &Value, keys: &[&str]) -> String {
    keys.iter()
        .find_map(|key| record.get(*key).and_then(Value::as_str))
        .map(|value| value.trim().to_string())
        .unwrap_or_default()
}

/// Like [`text_field`] but `None` when the value is absent or blank.
fn optional_text(record: &Value, keys: &[&str]) -> Option<String> {
    let value = text_field(record, keys);
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Coordinates under any of the legacy location keys and axis spellings.
fn location_field(record: &Value) -> Option<GeoPoint> {
    let value = ["location", "ubicacion", "coordenadas"]
        .iter()
        .find_map(|key| record.get(*key))?;

    let latitude = ["latitude", "latitud", "lat"]
        .iter()
        .find_map(|key| value.get(*key).and_then(Value::as_f64))?;
    let longitude = ["longitude", "longitud", "lng"]
        .iter()
        .find_map(|key| value.get(*key).and_then(Value::as_f64))?;

    Some(GeoPoint { latitude, longitude })
}

/// Weekly schedule from either the canonical form or the legacy per-day
/// map keyed by Spanish day names. Unparseable entries keep the default.
fn schedule_field(record: &Value) -> WeeklySchedule {
    let Some(value) = ["schedule", "horario"].iter().find_map(|key| record.get(*key)) else {
        return WeeklySchedule::default();
    };

    if value.get("days").is_some() {
        if let Ok(schedule) = serde_json::from_value::<WeeklySchedule>(value.clone()) {
            return schedule;
        }
    }

    let mut schedule = WeeklySchedule::default();
    if let Some(map) = value.as_object() {
        for day in Weekday::ALL {
            let Some(entry) = legacy_day_keys(day).iter().find_map(|key| map.get(*key)) else {
                continue;
            };
            let hours = schedule.day_mut(day);
            if let Some(open) = entry.get("open").or_else(|| entry.get("abre")).and_then(Value::as_str) {
                if let Ok(time) = TimeOfDay::from_storage(open) {
                    hours.open = time;
                }
            }
            if let Some(close) = entry.get("close").or_else(|| entry.get("cierra")).and_then(Value::as_str) {
                if let Ok(time) = TimeOfDay::from_storage(close) {
                    hours.close = time;
                }
            }
            if let Some(enabled) = entry
                .get("enabled")
                .or_else(|| entry.get("abierto"))
                .and_then(Value::as_bool)
            {
                hours.enabled = enabled;
            }
        }
    }
    schedule
}

/// Legacy record keys for a weekday, accented spelling first.
fn legacy_day_keys(day: Weekday) -> &'static [&'static str] {
    match day {
        Weekday::Monday => &["lunes"],
        Weekday::Tuesday => &["martes"],
        Weekday::Wednesday => &["miércoles", "miercoles"],
        Weekday::Thursday => &["jueves"],
        Weekday::Friday => &["viernes"],
        Weekday::Saturday => &["sábado", "sabado"],
        Weekday::Sunday => &["domingo"],
    }
}
