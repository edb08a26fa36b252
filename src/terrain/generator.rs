use super::classifier::classify_cell;
use super::layers::build_layer_maps;
use super::{GridDimensions, TerrainGrid};
use crate::errors::PlanetGenResult;
use crate::planet::PlanetDescriptor;
use tracing::debug;

/// Builds terrain grids for one planet
#[derive(Debug, Clone)]
pub struct TerrainGenerator {
    pub descriptor: PlanetDescriptor,
}

impl TerrainGenerator {
    pub fn new(descriptor: PlanetDescriptor) -> Self {
        Self { descriptor }
    }

    /// Generate a full `height x width` grid. Inputs are validated before any
    /// noise is sampled; each call builds its layers from scratch.
    pub fn generate(&self, width: u32, height: u32) -> PlanetGenResult<TerrainGrid> {
        let dimensions = GridDimensions::new(width, height)?;
        self.descriptor.validate()?;

        let params = self.descriptor.terrain_params();
        debug!(
            "Generating {}x{} terrain for seed {} ({})",
            width,
            height,
            self.descriptor.seed(),
            self.descriptor.planet_type()
        );

        let maps = build_layer_maps(width, height, self.descriptor.seed(), params);

        let cells = maps
            .elevation
            .iter()
            .zip(&maps.moisture)
            .zip(&maps.mineral_present)
            .map(|((&elevation, &moisture), &mineral)| {
                classify_cell(elevation, moisture, mineral, params.water_coverage)
            })
            .collect();

        TerrainGrid::from_cells(dimensions.width, dimensions.height, cells)
    }
}
