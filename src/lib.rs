pub mod config;
pub mod errors;
pub mod noise_field;
pub mod planet;
pub mod sensors;
pub mod terrain;

pub use errors::{PlanetGenError, PlanetGenResult};
pub use planet::{PlanetDescriptor, PlanetType, TerrainParams};
pub use sensors::{SensorReading, generate_sensor_data};
pub use terrain::generator::TerrainGenerator;
pub use terrain::{Rgb, TerrainGrid, TerrainType, terrain_color};

/// Generate the `height x width` terrain grid for a planet
pub fn generate_terrain(
    descriptor: &PlanetDescriptor,
    width: u32,
    height: u32,
) -> PlanetGenResult<TerrainGrid> {
    TerrainGenerator::new(*descriptor).generate(width, height)
}
