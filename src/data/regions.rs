use crate::models::{Region, RegionAdjustment};

const REGION_ADJUSTMENTS: &[(Region, RegionAdjustment)] = &[
    (
        Region::North,
        RegionAdjustment {
            humidity_bias: -5.0,
            temp_bias: 0.0,
        },
    ),
    (
        Region::South,
        RegionAdjustment {
            humidity_bias: 3.0,
            temp_bias: 1.0,
        },
    ),
    (
        Region::East,
        RegionAdjustment {
            humidity_bias: 5.0,
            temp_bias: 1.0,
        },
    ),
    (
        Region::West,
        RegionAdjustment {
            humidity_bias: -2.0,
            temp_bias: 2.0,
        },
    ),
];

/// Bias for a region; regions without an entry are not shifted.
pub fn adjustment_for(region: Region) -> RegionAdjustment {
    REGION_ADJUSTMENTS
        .iter()
        .find(|(r, _)| *r == region)
        .map(|(_, adj)| *adj)
        .unwrap_or(RegionAdjustment::NEUTRAL)
}
