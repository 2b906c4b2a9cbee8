/// Earth's radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometers between two points given in degrees
#[inline]
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Distance between two `(latitude, longitude)` pairs
#[inline]
pub fn distance_between(from: (f64, f64), to: (f64, f64)) -> f64 {
    haversine_distance(from.0, from.1, to.0, to.1)
}

/// Distance band a pair of coordinates falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceTier {
    /// Up to 20 km
    VeryClose,
    /// Up to 50 km
    Close,
    /// Up to 150 km
    Reasonable,
    /// Beyond 150 km
    TooFar,
}

impl DistanceTier {
    pub fn classify(distance_km: f64) -> Self {
        if distance_km <= 20.0 {
            DistanceTier::VeryClose
        } else if distance_km <= 50.0 {
            DistanceTier::Close
        } else if distance_km <= 150.0 {
            DistanceTier::Reasonable
        } else {
            DistanceTier::TooFar
        }
    }

    /// Share of the location weight this tier awards
    pub fn credit(self) -> f64 {
        match self {
            DistanceTier::VeryClose => 1.0,
            DistanceTier::Close => 0.8,
            DistanceTier::Reasonable => 0.4,
            DistanceTier::TooFar => 0.0,
        }
    }
}
