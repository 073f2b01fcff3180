//! Coordinate-to-department resolution over static bounding boxes.
//!
//! The 17 department boxes are rough axis-aligned approximations and some
//! of them overlap. Resolution is first-match in the declared table order,
//! never smallest-area or nearest-centroid, because the app's stored
//! department strings were produced that way.

use shared::DepartmentBounds;

/// Sentinel returned when no department box contains the point.
pub const UNSPECIFIED_DEPARTMENT: &str = "No especificado";

/// Approximate national extent, used independently of the department match.
const COUNTRY_BOUNDS: DepartmentBounds = DepartmentBounds {
    name: "Nicaragua",
    north: 15.1,
    south: 10.7,
    east: -82.6,
    west: -87.7,
};

/// Department boxes in resolution order. Order matters: see module docs.
pub const DEPARTMENT_BOUNDS: [DepartmentBounds; 17] = [
    DepartmentBounds { name: "Boaco", north: 12.8, south: 12.2, east: -85.2, west: -85.9 },
    DepartmentBounds { name: "Carazo", north: 12.0, south: 11.6, east: -86.0, west: -86.5 },
    DepartmentBounds { name: "Chinandega", north: 13.3, south: 12.3, east: -86.7, west: -87.7 },
    DepartmentBounds { name: "Chontales", north: 12.5, south: 11.7, east: -84.8, west: -85.7 },
    DepartmentBounds { name: "Estelí", north: 13.4, south: 12.9, east: -86.1, west: -86.7 },
    DepartmentBounds { name: "Granada", north: 12.1, south: 11.6, east: -85.7, west: -86.1 },
    DepartmentBounds { name: "Jinotega", north: 14.1, south: 12.9, east: -84.7, west: -86.3 },
    DepartmentBounds { name: "León", north: 12.9, south: 12.0, east: -86.3, west: -87.2 },
    DepartmentBounds { name: "Madriz", north: 13.7, south: 13.2, east: -86.2, west: -86.9 },
    DepartmentBounds { name: "Managua", north: 12.7, south: 11.7, east: -85.8, west: -86.8 },
    DepartmentBounds { name: "Masaya", north: 12.2, south: 11.8, east: -85.9, west: -86.2 },
    DepartmentBounds { name: "Matagalpa", north: 13.4, south: 12.5, east: -85.0, west: -86.2 },
    DepartmentBounds { name: "Nueva Segovia", north: 14.1, south: 13.5, east: -85.9, west: -86.8 },
    DepartmentBounds { name: "Río San Juan", north: 11.6, south: 10.7, east: -83.8, west: -85.4 },
    DepartmentBounds { name: "Rivas", north: 11.9, south: 11.0, east: -85.4, west: -86.0 },
    DepartmentBounds { name: "Costa Caribe Norte", north: 15.1, south: 13.0, east: -82.7, west: -85.0 },
    DepartmentBounds { name: "Costa Caribe Sur", north: 13.0, south: 11.5, east: -82.6, west: -84.8 },
];

/// Classifies picked map coordinates into an administrative department.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeographyService;

impl GeographyService {
    pub fn new() -> Self {
        Self
    }

    /// Name of the first department box containing the point, or
    /// [`UNSPECIFIED_DEPARTMENT`].
    pub fn resolve_department(&self, latitude: f64, longitude: f64) -> &'static str {
        Self::first_match(&DEPARTMENT_BOUNDS, latitude, longitude)
    }

    /// Whether the point falls inside the national extent. Independent of
    /// the department match: a point can be in the country without landing
    /// in any department box.
    pub fn is_within_country(&self, latitude: f64, longitude: f64) -> bool {
        COUNTRY_BOUNDS.contains(latitude, longitude)
    }

    /// First-match lookup over an ordered table of boxes.
    pub fn first_match(table: &[DepartmentBounds], latitude: f64, longitude: f64) -> &'static str {
        table
            .iter()
            .find(|bounds| bounds.contains(latitude, longitude))
            .map(|bounds| bounds.name)
            .unwrap_or(UNSPECIFIED_DEPARTMENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolves_known_cities() {
        let service = GeographyService::new();

        assert_eq!(service.resolve_department(12.1364, -86.2514), "Managua");
        assert_eq!(service.resolve_department(13.0919, -86.3536), "Estelí");
        assert_eq!(service.resolve_department(11.2529, -85.8703), "Rivas");
        assert_eq!(service.resolve_department(12.0139, -83.7636), "Costa Caribe Sur");
    }

    #[test]
    fn test_unmatched_point_returns_sentinel() {
        let service = GeographyService::new();

        assert_eq!(service.resolve_department(25.0, -100.0), UNSPECIFIED_DEPARTMENT);
        assert_eq!(service.resolve_department(-12.0, -86.25), UNSPECIFIED_DEPARTMENT);
    }

    #[test]
    fn test_overlapping_boxes_resolve_to_first_listed() {
        // Two boxes both containing the point: the first declared wins.
        let table = [
            DepartmentBounds { name: "Primero", north: 13.0, south: 11.0, east: -85.0, west: -87.0 },
            DepartmentBounds { name: "Segundo", north: 13.0, south: 11.0, east: -85.0, west: -87.0 },
        ];

        assert_eq!(GeographyService::first_match(&table, 12.0, -86.0), "Primero");
    }

    #[test]
    fn test_real_table_overlap_is_order_dependent() {
        // (11.95, -85.95) sits inside both the Granada and the Masaya
        // boxes; Granada is declared first and must win.
        let granada = &DEPARTMENT_BOUNDS[5];
        let masaya = &DEPARTMENT_BOUNDS[10];
        assert_eq!(granada.name, "Granada");
        assert_eq!(masaya.name, "Masaya");
        assert!(granada.contains(11.95, -85.95));
        assert!(masaya.contains(11.95, -85.95));

        assert_eq!(GeographyService::new().resolve_department(11.95, -85.95), "Granada");
    }

    #[test]
    fn test_is_within_country_independent_of_department_match() {
        let service = GeographyService::new();

        assert!(service.is_within_country(12.1364, -86.2514));
        assert!(!service.is_within_country(25.0, -100.0));

        // Inside the national extent but in none of the department boxes.
        assert!(service.is_within_country(10.75, -83.0));
        assert_eq!(service.resolve_department(10.75, -83.0), UNSPECIFIED_DEPARTMENT);
    }

    #[test]
    fn test_box_edges_are_inclusive() {
        let boaco = &DEPARTMENT_BOUNDS[0];

        assert!(boaco.contains(boaco.north, boaco.east));
        assert!(boaco.contains(boaco.south, boaco.west));
    }
}
