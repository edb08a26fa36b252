use super::TerrainType;
use super::constants::*;

/// Classify one cell. Rules are checked in order and the first match wins:
/// water bands, then mineral deposits, then land bands by elevation and moisture.
pub fn classify_cell(
    elevation: f64,
    moisture: f64,
    mineral_present: bool,
    water_coverage: f64,
) -> TerrainType {
    let water_level = water_coverage;

    if elevation < water_level - DEEP_WATER_DEPTH {
        return TerrainType::DeepWater;
    }
    if elevation < water_level {
        return TerrainType::ShallowWater;
    }

    // Deposits override land bands but never water
    if mineral_present && elevation > water_level + MINERAL_MIN_ALTITUDE {
        return TerrainType::Mineral;
    }

    if elevation < water_level + BEACH_BAND {
        TerrainType::Sand
    } else if elevation < water_level + LOWLAND_BAND {
        if moisture > LOWLAND_GRASS_MOISTURE {
            TerrainType::Grass
        } else if moisture > LOWLAND_ROCK_MOISTURE {
            TerrainType::Rock
        } else {
            TerrainType::Sand
        }
    } else if elevation < water_level + HIGHLAND_BAND {
        if moisture > HIGHLAND_GRASS_MOISTURE {
            TerrainType::Grass
        } else {
            TerrainType::Rock
        }
    } else {
        TerrainType::Mountain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sweep() -> impl Iterator<Item = (f64, f64, bool, f64)> {
        (0..=20).flat_map(|e| {
            (0..=20).flat_map(move |m| {
                [false, true].into_iter().flat_map(move |mineral| {
                    (0..=10).map(move |w| (e as f64 / 20.0, m as f64 / 20.0, mineral, w as f64 / 10.0))
                })
            })
        })
    }

    #[test]
    fn test_water_bands() {
        assert_eq!(classify_cell(0.1, 0.9, true, 0.3), TerrainType::DeepWater);
        assert_eq!(classify_cell(0.25, 0.9, true, 0.3), TerrainType::ShallowWater);
    }

    #[test]
    fn test_mineral_overrides_land_only_above_margin() {
        assert_eq!(classify_cell(0.5, 0.9, true, 0.3), TerrainType::Mineral);
        assert_eq!(classify_cell(0.9, 0.1, true, 0.3), TerrainType::Mineral);
        // Within 0.1 of the water level, deposits are ignored
        assert_eq!(classify_cell(0.31, 0.9, true, 0.3), TerrainType::Sand);
        assert_eq!(classify_cell(0.38, 0.9, true, 0.3), TerrainType::Grass);
    }

    #[test]
    fn test_land_bands() {
        let w = 0.3;
        assert_eq!(classify_cell(0.31, 0.9, false, w), TerrainType::Sand);

        assert_eq!(classify_cell(0.40, 0.35, false, w), TerrainType::Grass);
        assert_eq!(classify_cell(0.40, 0.28, false, w), TerrainType::Rock);
        assert_eq!(classify_cell(0.40, 0.20, false, w), TerrainType::Sand);

        assert_eq!(classify_cell(0.55, 0.6, false, w), TerrainType::Grass);
        assert_eq!(classify_cell(0.55, 0.5, false, w), TerrainType::Rock);

        assert_eq!(classify_cell(0.65, 0.9, false, w), TerrainType::Mountain);
        assert_eq!(classify_cell(1.0, 0.0, false, w), TerrainType::Mountain);
    }

    #[test]
    fn test_band_edges_are_exclusive() {
        let w = 0.5;
        // elevation == water level is land
        assert_eq!(classify_cell(0.5, 0.0, false, w), TerrainType::Sand);
        // just past the highland band, moisture no longer matters
        assert_eq!(classify_cell(0.86, 0.9, false, w), TerrainType::Mountain);
        assert_eq!(classify_cell(0.84, 0.9, false, w), TerrainType::Grass);
    }

    #[test]
    fn test_classification_is_total() {
        for (e, m, mineral, w) in sweep() {
            let terrain = classify_cell(e, m, mineral, w);
            assert!(TerrainType::ALL.contains(&terrain));
        }
    }

    #[test]
    fn test_no_land_below_water_level() {
        for (e, m, mineral, w) in sweep() {
            let terrain = classify_cell(e, m, mineral, w);
            if e < w {
                assert!(
                    terrain.is_water(),
                    "elevation {e} below water level {w} classified as {terrain:?}"
                );
            } else {
                assert!(!terrain.is_water());
            }
        }
    }

    #[test]
    fn test_dry_planet_has_no_deep_water() {
        for (e, m, mineral, _) in sweep() {
            assert_ne!(classify_cell(e, m, mineral, 0.0), TerrainType::DeepWater);
        }
    }
}
