//! Named-place search backing the map's search bar.
//!
//! The directory is a static table of departments, cities and islands with
//! their coordinates. Search is case-insensitive: an exact name match wins,
//! otherwise the first entry (in table order) containing the query as a
//! substring is returned.

use shared::{GeoPoint, MapRegion, NamedPlace, PlaceKind};

/// Default span, in degrees, of the region centered on a found place.
pub const DEFAULT_REGION_DELTA: f64 = 0.05;

/// The searchable directory, in declared order. Departments first (at
/// their capital), then cities, then islands.
pub const PLACES: [NamedPlace; 54] = [
    NamedPlace { name: "Managua", coordinates: GeoPoint { latitude: 12.1364, longitude: -86.2514 }, kind: PlaceKind::Department },
    NamedPlace { name: "Boaco", coordinates: GeoPoint { latitude: 12.4722, longitude: -85.6586 }, kind: PlaceKind::Department },
    NamedPlace { name: "Carazo", coordinates: GeoPoint { latitude: 11.8483, longitude: -86.1969 }, kind: PlaceKind::Department },
    NamedPlace { name: "Chinandega", coordinates: GeoPoint { latitude: 12.6294, longitude: -87.1311 }, kind: PlaceKind::Department },
    NamedPlace { name: "Chontales", coordinates: GeoPoint { latitude: 12.1064, longitude: -85.3647 }, kind: PlaceKind::Department },
    NamedPlace { name: "Estelí", coordinates: GeoPoint { latitude: 13.0919, longitude: -86.3536 }, kind: PlaceKind::Department },
    NamedPlace { name: "Granada", coordinates: GeoPoint { latitude: 11.9297, longitude: -85.9561 }, kind: PlaceKind::Department },
    NamedPlace { name: "Jinotega", coordinates: GeoPoint { latitude: 13.0881, longitude: -85.9992 }, kind: PlaceKind::Department },
    NamedPlace { name: "León", coordinates: GeoPoint { latitude: 12.4344, longitude: -86.8794 }, kind: PlaceKind::Department },
    NamedPlace { name: "Madriz", coordinates: GeoPoint { latitude: 13.4761, longitude: -86.5819 }, kind: PlaceKind::Department },
    NamedPlace { name: "Masaya", coordinates: GeoPoint { latitude: 11.9744, longitude: -86.0942 }, kind: PlaceKind::Department },
    NamedPlace { name: "Matagalpa", coordinates: GeoPoint { latitude: 12.9256, longitude: -85.9178 }, kind: PlaceKind::Department },
    NamedPlace { name: "Nueva Segovia", coordinates: GeoPoint { latitude: 13.6867, longitude: -86.4753 }, kind: PlaceKind::Department },
    NamedPlace { name: "Río San Juan", coordinates: GeoPoint { latitude: 11.1236, longitude: -84.7769 }, kind: PlaceKind::Department },
    NamedPlace { name: "Rivas", coordinates: GeoPoint { latitude: 11.4372, longitude: -85.8264 }, kind: PlaceKind::Department },
    NamedPlace { name: "Costa Caribe Norte", coordinates: GeoPoint { latitude: 14.0453, longitude: -83.3886 }, kind: PlaceKind::Department },
    NamedPlace { name: "Costa Caribe Sur", coordinates: GeoPoint { latitude: 12.0139, longitude: -83.7636 }, kind: PlaceKind::Department },
    NamedPlace { name: "San Juan del Sur", coordinates: GeoPoint { latitude: 11.2529, longitude: -85.8703 }, kind: PlaceKind::City },
    NamedPlace { name: "Tipitapa", coordinates: GeoPoint { latitude: 12.1975, longitude: -86.0970 }, kind: PlaceKind::City },
    NamedPlace { name: "Ciudad Sandino", coordinates: GeoPoint { latitude: 12.1589, longitude: -86.3444 }, kind: PlaceKind::City },
    NamedPlace { name: "El Crucero", coordinates: GeoPoint { latitude: 11.9897, longitude: -86.3092 }, kind: PlaceKind::City },
    NamedPlace { name: "Nagarote", coordinates: GeoPoint { latitude: 12.2656, longitude: -86.5647 }, kind: PlaceKind::City },
    NamedPlace { name: "La Paz Centro", coordinates: GeoPoint { latitude: 12.3400, longitude: -86.6750 }, kind: PlaceKind::City },
    NamedPlace { name: "Corinto", coordinates: GeoPoint { latitude: 12.4825, longitude: -87.1797 }, kind: PlaceKind::City },
    NamedPlace { name: "El Viejo", coordinates: GeoPoint { latitude: 12.6633, longitude: -87.1683 }, kind: PlaceKind::City },
    NamedPlace { name: "Chichigalpa", coordinates: GeoPoint { latitude: 12.5725, longitude: -87.0264 }, kind: PlaceKind::City },
    NamedPlace { name: "Telica", coordinates: GeoPoint { latitude: 12.5228, longitude: -86.8600 }, kind: PlaceKind::City },
    NamedPlace { name: "Diriamba", coordinates: GeoPoint { latitude: 11.8564, longitude: -86.2400 }, kind: PlaceKind::City },
    NamedPlace { name: "Jinotepe", coordinates: GeoPoint { latitude: 11.8483, longitude: -86.1969 }, kind: PlaceKind::City },
    NamedPlace { name: "San Marcos", coordinates: GeoPoint { latitude: 11.9103, longitude: -86.2033 }, kind: PlaceKind::City },
    NamedPlace { name: "Masatepe", coordinates: GeoPoint { latitude: 11.9147, longitude: -86.1436 }, kind: PlaceKind::City },
    NamedPlace { name: "Catarina", coordinates: GeoPoint { latitude: 11.9128, longitude: -86.0736 }, kind: PlaceKind::City },
    NamedPlace { name: "San Juan de Oriente", coordinates: GeoPoint { latitude: 11.9064, longitude: -86.0722 }, kind: PlaceKind::City },
    NamedPlace { name: "Niquinohomo", coordinates: GeoPoint { latitude: 11.9050, longitude: -86.0950 }, kind: PlaceKind::City },
    NamedPlace { name: "Nandaime", coordinates: GeoPoint { latitude: 11.7561, longitude: -86.0531 }, kind: PlaceKind::City },
    NamedPlace { name: "Sébaco", coordinates: GeoPoint { latitude: 12.8544, longitude: -86.0978 }, kind: PlaceKind::City },
    NamedPlace { name: "Ciudad Darío", coordinates: GeoPoint { latitude: 12.7297, longitude: -86.1225 }, kind: PlaceKind::City },
    NamedPlace { name: "Ocotal", coordinates: GeoPoint { latitude: 13.6333, longitude: -86.4753 }, kind: PlaceKind::City },
    NamedPlace { name: "Somoto", coordinates: GeoPoint { latitude: 13.4761, longitude: -86.5819 }, kind: PlaceKind::City },
    NamedPlace { name: "Juigalpa", coordinates: GeoPoint { latitude: 12.1064, longitude: -85.3647 }, kind: PlaceKind::City },
    NamedPlace { name: "El Rama", coordinates: GeoPoint { latitude: 12.1592, longitude: -84.2197 }, kind: PlaceKind::City },
    NamedPlace { name: "Nueva Guinea", coordinates: GeoPoint { latitude: 11.6875, longitude: -84.4561 }, kind: PlaceKind::City },
    NamedPlace { name: "San Carlos", coordinates: GeoPoint { latitude: 11.1236, longitude: -84.7769 }, kind: PlaceKind::City },
    NamedPlace { name: "Bluefields", coordinates: GeoPoint { latitude: 12.0139, longitude: -83.7636 }, kind: PlaceKind::City },
    NamedPlace { name: "Bilwi", coordinates: GeoPoint { latitude: 14.0453, longitude: -83.3886 }, kind: PlaceKind::City },
    NamedPlace { name: "Moyogalpa", coordinates: GeoPoint { latitude: 11.5400, longitude: -85.6989 }, kind: PlaceKind::City },
    NamedPlace { name: "Altagracia", coordinates: GeoPoint { latitude: 11.5669, longitude: -85.5775 }, kind: PlaceKind::City },
    NamedPlace { name: "San Jorge", coordinates: GeoPoint { latitude: 11.4550, longitude: -85.7967 }, kind: PlaceKind::City },
    NamedPlace { name: "Isla de Ometepe", coordinates: GeoPoint { latitude: 11.5142, longitude: -85.5825 }, kind: PlaceKind::Island },
    NamedPlace { name: "Corn Island", coordinates: GeoPoint { latitude: 12.1700, longitude: -83.0410 }, kind: PlaceKind::Island },
    NamedPlace { name: "Little Corn Island", coordinates: GeoPoint { latitude: 12.2931, longitude: -82.9767 }, kind: PlaceKind::Island },
    NamedPlace { name: "Isla Zapatera", coordinates: GeoPoint { latitude: 11.7431, longitude: -85.8253 }, kind: PlaceKind::Island },
    NamedPlace { name: "Archipiélago de Solentiname", coordinates: GeoPoint { latitude: 11.1750, longitude: -85.0333 }, kind: PlaceKind::Island },
    NamedPlace { name: "Isletas de Granada", coordinates: GeoPoint { latitude: 11.8961, longitude: -85.9311 }, kind: PlaceKind::Island },
];

/// Search over the static place directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceDirectory;

impl PlaceDirectory {
    pub fn new() -> Self {
        Self
    }

    /// Find the single best match for a typed query: case-insensitive
    /// exact name first, then the first substring match in table order.
    pub fn find_place(&self, query: &str) -> Option<&'static NamedPlace> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        PLACES
            .iter()
            .find(|place| place.name.to_lowercase() == needle)
            .or_else(|| PLACES.iter().find(|place| place.name.to_lowercase().contains(&needle)))
    }

    /// Every place whose name contains the query, in table order; used by
    /// the incremental-search suggestion list.
    pub fn filter_places(&self, query: &str) -> Vec<&'static NamedPlace> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        PLACES
            .iter()
            .filter(|place| place.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Map viewport centered on the named place. `delta` falls back to
    /// [`DEFAULT_REGION_DELTA`] in both axes.
    pub fn region_for(&self, name: &str, delta: Option<f64>) -> Option<MapRegion> {
        let needle = name.trim().to_lowercase();
        let place = PLACES.iter().find(|place| place.name.to_lowercase() == needle)?;
        let span = delta.unwrap_or(DEFAULT_REGION_DELTA);
        Some(MapRegion {
            center: place.coordinates,
            latitude_delta: span,
            longitude_delta: span,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_is_case_insensitive() {
        let directory = PlaceDirectory::new();

        assert_eq!(directory.find_place("Managua").unwrap().name, "Managua");
        assert_eq!(directory.find_place("managua").unwrap().name, "Managua");
        assert_eq!(directory.find_place("  MANAGUA  ").unwrap().name, "Managua");
    }

    #[test]
    fn test_substring_fallback_returns_first_in_table_order() {
        let directory = PlaceDirectory::new();

        assert_eq!(directory.find_place("Gran").unwrap().name, "Granada");
        assert_eq!(directory.find_place("ometepe").unwrap().name, "Isla de Ometepe");
    }

    #[test]
    fn test_exact_match_beats_substring_scan() {
        // "corn island" is a substring of both island entries; the exact
        // match decides, not the substring scan.
        let directory = PlaceDirectory::new();

        assert_eq!(directory.find_place("corn island").unwrap().name, "Corn Island");
        assert_eq!(directory.find_place("little corn island").unwrap().name, "Little Corn Island");
    }

    #[test]
    fn test_find_place_misses() {
        let directory = PlaceDirectory::new();

        assert!(directory.find_place("Tegucigalpa").is_none());
        assert!(directory.find_place("").is_none());
        assert!(directory.find_place("   ").is_none());
    }

    #[test]
    fn test_filter_places_preserves_table_order() {
        let directory = PlaceDirectory::new();

        let names: Vec<&str> = directory.filter_places("corn").iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Corn Island", "Little Corn Island"]);

        let names: Vec<&str> = directory.filter_places("isla").iter().map(|p| p.name).collect();
        assert_eq!(
            names,
            vec!["Isla de Ometepe", "Corn Island", "Little Corn Island", "Isla Zapatera"]
        );

        assert!(directory.filter_places("xyz").is_empty());
    }

    #[test]
    fn test_region_for_defaults_and_overrides() {
        let directory = PlaceDirectory::new();

        let region = directory.region_for("Granada", None).unwrap();
        assert_eq!(region.center.latitude, 11.9297);
        assert_eq!(region.center.longitude, -85.9561);
        assert_eq!(region.latitude_delta, DEFAULT_REGION_DELTA);
        assert_eq!(region.longitude_delta, DEFAULT_REGION_DELTA);

        let wide = directory.region_for("granada", Some(0.25)).unwrap();
        assert_eq!(wide.latitude_delta, 0.25);

        assert!(directory.region_for("Atlántida", None).is_none());
    }
}
