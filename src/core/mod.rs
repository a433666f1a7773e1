// Core algorithm exports
pub mod distance;
pub mod proximity;

pub use distance::{haversine_distance, round_to_places, EARTH_RADIUS_KM};
pub use proximity::{find_nearby, NearbyResult};
