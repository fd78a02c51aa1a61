use crate::domain::model::Location;

#[derive(Debug, Clone, Copy)]
pub struct MetroArea {
    pub city: &'static str,
    pub state: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

// Default sweep roster: the metro areas with active service territories.
// Config files may replace this list outright.
pub static METRO_ROSTER: &[MetroArea] = &[
    MetroArea { city: "New York", state: "NY", latitude: 40.7128, longitude: -74.0060 },
    MetroArea { city: "Los Angeles", state: "CA", latitude: 34.0522, longitude: -118.2437 },
    MetroArea { city: "Chicago", state: "IL", latitude: 41.8781, longitude: -87.6298 },
    MetroArea { city: "Houston", state: "TX", latitude: 29.7604, longitude: -95.3698 },
    MetroArea { city: "Phoenix", state: "AZ", latitude: 33.4484, longitude: -112.0740 },
    MetroArea { city: "Philadelphia", state: "PA", latitude: 39.9526, longitude: -75.1652 },
    MetroArea { city: "San Antonio", state: "TX", latitude: 29.4241, longitude: -98.4936 },
    MetroArea { city: "San Diego", state: "CA", latitude: 32.7157, longitude: -117.1611 },
    MetroArea { city: "Dallas", state: "TX", latitude: 32.7767, longitude: -96.7970 },
    MetroArea { city: "Austin", state: "TX", latitude: 30.2672, longitude: -97.7431 },
    MetroArea { city: "Jacksonville", state: "FL", latitude: 30.3322, longitude: -81.6557 },
    MetroArea { city: "Fort Worth", state: "TX", latitude: 32.7555, longitude: -97.3308 },
    MetroArea { city: "Columbus", state: "OH", latitude: 39.9612, longitude: -82.9988 },
    MetroArea { city: "Charlotte", state: "NC", latitude: 35.2271, longitude: -80.8431 },
    MetroArea { city: "San Francisco", state: "CA", latitude: 37.7749, longitude: -122.4194 },
    MetroArea { city: "Indianapolis", state: "IN", latitude: 39.7684, longitude: -86.1581 },
    MetroArea { city: "Seattle", state: "WA", latitude: 47.6062, longitude: -122.3321 },
    MetroArea { city: "Denver", state: "CO", latitude: 39.7392, longitude: -104.9903 },
    MetroArea { city: "Washington", state: "DC", latitude: 38.9072, longitude: -77.0369 },
    MetroArea { city: "Boston", state: "MA", latitude: 42.3601, longitude: -71.0589 },
    MetroArea { city: "Nashville", state: "TN", latitude: 36.1627, longitude: -86.7816 },
    MetroArea { city: "Oklahoma City", state: "OK", latitude: 35.4676, longitude: -97.5164 },
    MetroArea { city: "Portland", state: "OR", latitude: 45.5152, longitude: -122.6784 },
    MetroArea { city: "Las Vegas", state: "NV", latitude: 36.1699, longitude: -115.1398 },
    MetroArea { city: "Memphis", state: "TN", latitude: 35.1495, longitude: -90.0490 },
    MetroArea { city: "Louisville", state: "KY", latitude: 38.2527, longitude: -85.7585 },
    MetroArea { city: "Baltimore", state: "MD", latitude: 39.2904, longitude: -76.6122 },
    MetroArea { city: "Milwaukee", state: "WI", latitude: 43.0389, longitude: -87.9065 },
    MetroArea { city: "Albuquerque", state: "NM", latitude: 35.0844, longitude: -106.6504 },
    MetroArea { city: "Tucson", state: "AZ", latitude: 32.2226, longitude: -110.9747 },
    MetroArea { city: "Fresno", state: "CA", latitude: 36.7378, longitude: -119.7871 },
    MetroArea { city: "Sacramento", state: "CA", latitude: 38.5816, longitude: -121.4944 },
    MetroArea { city: "Kansas City", state: "MO", latitude: 39.0997, longitude: -94.5786 },
    MetroArea { city: "Mesa", state: "AZ", latitude: 33.4152, longitude: -111.8315 },
    MetroArea { city: "Atlanta", state: "GA", latitude: 33.7490, longitude: -84.3880 },
    MetroArea { city: "Omaha", state: "NE", latitude: 41.2565, longitude: -95.9345 },
    MetroArea { city: "Colorado Springs", state: "CO", latitude: 38.8339, longitude: -104.8214 },
    MetroArea { city: "Raleigh", state: "NC", latitude: 35.7796, longitude: -78.6382 },
    MetroArea { city: "Miami", state: "FL", latitude: 25.7617, longitude: -80.1918 },
    MetroArea { city: "Virginia Beach", state: "VA", latitude: 36.8529, longitude: -75.9780 },
    MetroArea { city: "Minneapolis", state: "MN", latitude: 44.9778, longitude: -93.2650 },
    MetroArea { city: "Tampa", state: "FL", latitude: 27.9506, longitude: -82.4572 },
    MetroArea { city: "New Orleans", state: "LA", latitude: 29.9511, longitude: -90.0715 },
    MetroArea { city: "Wichita", state: "KS", latitude: 37.6872, longitude: -97.3301 },
    MetroArea { city: "Cleveland", state: "OH", latitude: 41.4993, longitude: -81.6944 },
    MetroArea { city: "Tulsa", state: "OK", latitude: 36.1540, longitude: -95.9928 },
    MetroArea { city: "St. Louis", state: "MO", latitude: 38.6270, longitude: -90.1994 },
    MetroArea { city: "Pittsburgh", state: "PA", latitude: 40.4406, longitude: -79.9959 },
    MetroArea { city: "Cincinnati", state: "OH", latitude: 39.1031, longitude: -84.5120 },
    MetroArea { city: "Orlando", state: "FL", latitude: 28.5383, longitude: -81.3792 },
];

#[must_use]
pub fn default_locations() -> Vec<Location> {
    METRO_ROSTER
        .iter()
        .map(|metro| Location::new(metro.city, metro.state, metro.latitude, metro.longitude))
        .collect()
}
