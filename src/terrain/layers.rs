use super::constants::*;
use crate::noise_field::{CircularProjection, CoherentNoise, NoiseSettings, PerlinField};
use crate::planet::TerrainParams;

/// The three independent scalar layers a terrain grid is classified from.
/// All maps are row-major, `height * width` long.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerMaps {
    pub width: u32,
    pub height: u32,
    pub elevation: Vec<f64>,
    pub moisture: Vec<f64>,
    pub mineral_present: Vec<bool>,
}

impl LayerMaps {
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// `(elevation, moisture, mineral_present)` for one cell
    pub fn cell(&self, x: u32, y: u32) -> Option<(f64, f64, bool)> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let index = self.index(x, y);
        Some((
            *self.elevation.get(index)?,
            *self.moisture.get(index)?,
            *self.mineral_present.get(index)?,
        ))
    }
}

/// Build all three layers. Dimensions must already be validated.
pub fn build_layer_maps(width: u32, height: u32, seed: u32, params: &TerrainParams) -> LayerMaps {
    LayerMaps {
        width,
        height,
        elevation: build_elevation_map(width, height, seed),
        moisture: build_moisture_map(width, height, seed),
        mineral_present: build_mineral_map(width, height, seed, params.mineral_richness),
    }
}

/// Visit every cell in row-major order with its wrapped noise coordinates
fn sample_wrapped<T>(
    width: u32,
    height: u32,
    scale: f64,
    mut f: impl FnMut(f64, f64) -> T,
) -> Vec<T> {
    let projection = CircularProjection::new(width, scale);
    let mut values = Vec::with_capacity((width * height) as usize);

    for y in 0..height {
        for x in 0..width {
            let (nx, ny) = projection.project(x, y);
            values.push(f(nx, ny));
        }
    }

    values
}

fn normalize(value: f64) -> f64 {
    (value + 1.0) / 2.0
}

/// Contrast boost around 0.5 followed by a power curve, which sharpens coastlines.
/// The result keeps the full [0, 1] range so islands can form on wet planets.
pub fn shape_elevation(normalized: f64) -> f64 {
    let adjusted = ((normalized - 0.5) * ELEVATION_CONTRAST + 0.5).clamp(0.0, 1.0);
    adjusted.powf(ELEVATION_POWER)
}

/// Continental base noise blended with higher-frequency island detail
pub fn build_elevation_map(width: u32, height: u32, seed: u32) -> Vec<f64> {
    let base = PerlinField::new(NoiseSettings {
        octaves: ELEVATION_BASE_OCTAVES,
        persistence: ELEVATION_BASE_PERSISTENCE,
        lacunarity: ELEVATION_BASE_LACUNARITY,
        seed,
    });
    let detail = PerlinField::new(NoiseSettings {
        octaves: ELEVATION_DETAIL_OCTAVES,
        persistence: ELEVATION_DETAIL_PERSISTENCE,
        lacunarity: ELEVATION_DETAIL_LACUNARITY,
        seed: seed.wrapping_add(ELEVATION_DETAIL_SEED_OFFSET),
    });

    sample_wrapped(width, height, ELEVATION_SCALE, |nx, ny| {
        let base_value = base.sample(nx + ELEVATION_BASE_OFFSET, ny + ELEVATION_BASE_OFFSET);
        let detail_value = detail.sample(
            nx * ELEVATION_DETAIL_FREQUENCY + ELEVATION_DETAIL_OFFSET,
            ny * ELEVATION_DETAIL_FREQUENCY + ELEVATION_DETAIL_OFFSET,
        );

        let combined = base_value * ELEVATION_BASE_WEIGHT + detail_value * ELEVATION_DETAIL_WEIGHT;
        shape_elevation(normalize(combined))
    })
}

pub fn build_moisture_map(width: u32, height: u32, seed: u32) -> Vec<f64> {
    let field = PerlinField::new(NoiseSettings {
        octaves: MOISTURE_OCTAVES,
        persistence: LAYER_PERSISTENCE,
        lacunarity: LAYER_LACUNARITY,
        seed: seed.wrapping_add(MOISTURE_SEED_OFFSET),
    });

    sample_wrapped(width, height, MOISTURE_SCALE, |nx, ny| {
        normalize(field.sample(nx + LAYER_OFFSET, ny + LAYER_OFFSET))
    })
}

/// Minimum normalized noise value for a deposit at the given richness
pub fn mineral_threshold(mineral_richness: f64) -> f64 {
    1.0 - mineral_richness * MINERAL_THRESHOLD_FACTOR
}

pub fn build_mineral_map(width: u32, height: u32, seed: u32, mineral_richness: f64) -> Vec<bool> {
    let field = PerlinField::new(NoiseSettings {
        octaves: MINERAL_OCTAVES,
        persistence: LAYER_PERSISTENCE,
        lacunarity: LAYER_LACUNARITY,
        seed: seed.wrapping_add(MINERAL_SEED_OFFSET),
    });
    let threshold = mineral_threshold(mineral_richness);

    sample_wrapped(width, height, MINERAL_SCALE, |nx, ny| {
        normalize(field.sample(nx + LAYER_OFFSET, ny + LAYER_OFFSET)) > threshold
    })
}
