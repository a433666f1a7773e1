use crate::core::distance::haversine_distance;
use crate::models::{NearbyTeacher, SearchQuery, Teacher};

/// Result of a proximity scan
#[derive(Debug)]
pub struct NearbyResult {
    pub matches: Vec<NearbyTeacher>,
    pub total_scanned: usize,
}

/// Find every teacher within `query.radius_km` of the query point
///
/// The scan is linear over `teachers` and keeps their original order; no
/// sorting by distance is applied. The radius check is inclusive, so a
/// teacher exactly on the boundary is returned. The input slice is never
/// modified; each match carries a copy of the record.
pub fn find_nearby(query: &SearchQuery, teachers: &[Teacher]) -> NearbyResult {
    let matches = teachers
        .iter()
        .filter_map(|teacher| {
            let distance_km = haversine_distance(
                query.latitude,
                query.longitude,
                teacher.latitude,
                teacher.longitude,
            );

            (distance_km <= query.radius_km).then(|| NearbyTeacher::new(teacher, distance_km))
        })
        .collect();

    NearbyResult {
        matches,
        total_scanned: teachers.len(),
    }
}
