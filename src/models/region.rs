use serde::{Deserialize, Serialize};

/// Coordinates splitting India into the four storage-climate regions.
const REGION_MID_LATITUDE: f64 = 22.5;
const REGION_MID_LONGITUDE: f64 = 82.5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    #[default]
    North,
    South,
    East,
    West,
}

impl Region {
    pub const ALL: [Region; 4] = [Region::North, Region::South, Region::East, Region::West];

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::North => "North",
            Region::South => "South",
            Region::East => "East",
            Region::West => "West",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "north" | "n" => Some(Region::North),
            "south" | "s" => Some(Region::South),
            "east" | "e" => Some(Region::East),
            "west" | "w" => Some(Region::West),
            _ => None,
        }
    }

    /// Quadrant around the (22.5°N, 82.5°E) midpoint. Missing coordinates fall back to North.
    pub fn from_coordinates(latitude: Option<f64>, longitude: Option<f64>) -> Self {
        let (Some(lat), Some(lon)) = (latitude, longitude) else {
            return Region::North;
        };

        match (lat >= REGION_MID_LATITUDE, lon >= REGION_MID_LONGITUDE) {
            (true, true) => Region::North,
            (false, true) => Region::East,
            (false, false) => Region::South,
            (true, false) => Region::West,
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Additive shift applied to both ends of a crop's ideal ranges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegionAdjustment {
    pub humidity_bias: f64,
    pub temp_bias: f64,
}

impl RegionAdjustment {
    pub const NEUTRAL: RegionAdjustment = RegionAdjustment {
        humidity_bias: 0.0,
        temp_bias: 0.0,
    };

    pub fn shift_temp(&self, range: (f64, f64)) -> (f64, f64) {
        (range.0 + self.temp_bias, range.1 + self.temp_bias)
    }

    pub fn shift_humidity(&self, range: (f64, f64)) -> (f64, f64) {
        (range.0 + self.humidity_bias, range.1 + self.humidity_bias)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_from_str_valid() {
        assert_eq!(Region::from_str("North"), Some(Region::North));
        assert_eq!(Region::from_str("south"), Some(Region::South));
        assert_eq!(Region::from_str(" EAST "), Some(Region::East));
        assert_eq!(Region::from_str("w"), Some(Region::West));
    }

    #[test]
    fn region_from_str_invalid() {
        assert_eq!(Region::from_str("Central"), None);
        assert_eq!(Region::from_str(""), None);
    }

    #[test]
    fn region_from_coordinates_quadrants() {
        // Delhi
        assert_eq!(
            Region::from_coordinates(Some(28.6), Some(77.2)),
            Region::West
        );
        // Guwahati
        assert_eq!(
            Region::from_coordinates(Some(26.1), Some(91.7)),
            Region::North
        );
        // Bhubaneswar
        assert_eq!(
            Region::from_coordinates(Some(20.3), Some(85.8)),
            Region::East
        );
        // Bengaluru
        assert_eq!(
            Region::from_coordinates(Some(12.97), Some(77.59)),
            Region::South
        );
    }

    #[test]
    fn region_from_coordinates_boundary_and_missing() {
        assert_eq!(
            Region::from_coordinates(Some(22.5), Some(82.5)),
            Region::North
        );
        assert_eq!(Region::from_coordinates(None, Some(80.0)), Region::North);
        assert_eq!(Region::from_coordinates(Some(10.0), None), Region::North);
    }

    #[test]
    fn adjustment_shifts_both_ends() {
        let adj = RegionAdjustment {
            humidity_bias: -5.0,
            temp_bias: 2.0,
        };
        assert_eq!(adj.shift_temp((20.0, 30.0)), (22.0, 32.0));
        assert_eq!(adj.shift_humidity((65.0, 80.0)), (60.0, 75.0));
        assert_eq!(RegionAdjustment::NEUTRAL.shift_temp((1.0, 2.0)), (1.0, 2.0));
    }
}
