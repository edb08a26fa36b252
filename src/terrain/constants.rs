/// Constants for the layered terrain builder and classifier
/// Elevation layer
pub const ELEVATION_SCALE: f64 = 100.0;
pub const ELEVATION_BASE_OCTAVES: u32 = 5;
pub const ELEVATION_BASE_PERSISTENCE: f64 = 0.5;
pub const ELEVATION_BASE_LACUNARITY: f64 = 2.0;
pub const ELEVATION_BASE_OFFSET: f64 = 100.0;
pub const ELEVATION_DETAIL_OCTAVES: u32 = 3;
pub const ELEVATION_DETAIL_PERSISTENCE: f64 = 0.4;
pub const ELEVATION_DETAIL_LACUNARITY: f64 = 2.5;
pub const ELEVATION_DETAIL_FREQUENCY: f64 = 3.0;
pub const ELEVATION_DETAIL_OFFSET: f64 = 200.0;
pub const ELEVATION_DETAIL_SEED_OFFSET: u32 = 500;
pub const ELEVATION_BASE_WEIGHT: f64 = 0.7;
pub const ELEVATION_DETAIL_WEIGHT: f64 = 0.3;
pub const ELEVATION_CONTRAST: f64 = 1.5;
pub const ELEVATION_POWER: f64 = 0.85;

/// Moisture layer
pub const MOISTURE_SCALE: f64 = 30.0;
pub const MOISTURE_OCTAVES: u32 = 3;
pub const MOISTURE_SEED_OFFSET: u32 = 1000;

/// Mineral layer
pub const MINERAL_SCALE: f64 = 15.0;
pub const MINERAL_OCTAVES: u32 = 2;
pub const MINERAL_SEED_OFFSET: u32 = 2000;
pub const MINERAL_THRESHOLD_FACTOR: f64 = 0.3;

/// Shared by the moisture and mineral layers
pub const LAYER_PERSISTENCE: f64 = 0.5;
pub const LAYER_LACUNARITY: f64 = 2.0;
pub const LAYER_OFFSET: f64 = 100.0;

/// Classifier bands, relative to the water level
pub const DEEP_WATER_DEPTH: f64 = 0.1;
pub const MINERAL_MIN_ALTITUDE: f64 = 0.1;
pub const BEACH_BAND: f64 = 0.02;
pub const LOWLAND_BAND: f64 = 0.15;
pub const HIGHLAND_BAND: f64 = 0.35;
pub const LOWLAND_GRASS_MOISTURE: f64 = 0.3;
pub const LOWLAND_ROCK_MOISTURE: f64 = 0.25;
pub const HIGHLAND_GRASS_MOISTURE: f64 = 0.5;

/// Grid size limits
pub const MAX_GRID_DIMENSION: u32 = 2048;
