pub mod classifier;
pub mod constants;
pub mod generator;
pub mod layers;

use crate::errors::{PlanetGenError, PlanetGenResult};
use constants::MAX_GRID_DIMENSION;
use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::Validate;

/// Surface classification of one grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerrainType {
    DeepWater,
    ShallowWater,
    Sand,
    Grass,
    Rock,
    Mountain,
    Mineral,
}

impl TerrainType {
    pub const ALL: [TerrainType; 7] = [
        TerrainType::DeepWater,
        TerrainType::ShallowWater,
        TerrainType::Sand,
        TerrainType::Grass,
        TerrainType::Rock,
        TerrainType::Mountain,
        TerrainType::Mineral,
    ];

    pub fn is_water(self) -> bool {
        matches!(self, TerrainType::DeepWater | TerrainType::ShallowWater)
    }

    pub fn name(self) -> &'static str {
        match self {
            TerrainType::DeepWater => "deep_water",
            TerrainType::ShallowWater => "shallow_water",
            TerrainType::Sand => "sand",
            TerrainType::Grass => "grass",
            TerrainType::Rock => "rock",
            TerrainType::Mountain => "mountain",
            TerrainType::Mineral => "mineral",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }

    /// Single-character map symbol
    pub fn glyph(self) -> char {
        match self {
            TerrainType::DeepWater => 'W',
            TerrainType::ShallowWater => 'w',
            TerrainType::Sand => '.',
            TerrainType::Grass => '"',
            TerrainType::Rock => '#',
            TerrainType::Mountain => '^',
            TerrainType::Mineral => '$',
        }
    }
}

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Neutral gray for anything without an entry in the palette
pub const FALLBACK_COLOR: Rgb = Rgb(128, 128, 128);

/// Map color for a terrain type
pub fn terrain_color(terrain_type: TerrainType) -> Rgb {
    match terrain_type {
        TerrainType::DeepWater => Rgb(20, 50, 120),
        TerrainType::ShallowWater => Rgb(60, 100, 180),
        TerrainType::Sand => Rgb(210, 180, 140),
        TerrainType::Grass => Rgb(80, 140, 60),
        TerrainType::Rock => Rgb(100, 100, 100),
        TerrainType::Mountain => Rgb(150, 150, 150),
        TerrainType::Mineral => Rgb(180, 140, 60),
    }
}

/// Color lookup by terrain name; unknown names get [`FALLBACK_COLOR`]
pub fn terrain_color_by_name(name: &str) -> Rgb {
    TerrainType::from_name(name)
        .map(terrain_color)
        .unwrap_or(FALLBACK_COLOR)
}

/// Requested grid size, checked before any generation work
#[derive(Debug, Clone, Copy, PartialEq, Eq, Validate)]
pub struct GridDimensions {
    #[validate(range(min = 1, max = 2048))]
    pub width: u32,
    #[validate(range(min = 1, max = 2048))]
    pub height: u32,
}

impl GridDimensions {
    pub fn new(width: u32, height: u32) -> PlanetGenResult<Self> {
        let dimensions = Self { width, height };

        if let Err(errors) = dimensions.validate() {
            let field_errors = errors.field_errors();
            for (name, value) in [("width", width), ("height", height)] {
                if !field_errors.contains_key(name) {
                    continue;
                }
                return Err(if value == 0 {
                    PlanetGenError::InvalidDimension { name, value }
                } else {
                    PlanetGenError::DimensionTooLarge {
                        name,
                        value,
                        max: MAX_GRID_DIMENSION,
                    }
                });
            }
        }

        Ok(dimensions)
    }

    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// `height x width` terrain classification. Row 0 is the top edge; column 0 and
/// column `width - 1` are neighbours under horizontal wrap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTerrainGrid")]
pub struct TerrainGrid {
    width: u32,
    height: u32,
    cells: Vec<TerrainType>, // Flattened 2D array (row-major)
}

/// Unchecked serialized form; only reachable through `TryFrom`
#[derive(Deserialize)]
struct RawTerrainGrid {
    width: u32,
    height: u32,
    cells: Vec<TerrainType>,
}

impl TryFrom<RawTerrainGrid> for TerrainGrid {
    type Error = PlanetGenError;

    fn try_from(raw: RawTerrainGrid) -> PlanetGenResult<Self> {
        Self::from_cells(raw.width, raw.height, raw.cells)
    }
}

impl TerrainGrid {
    /// Create a grid from row-major cells with size validation
    pub fn from_cells(width: u32, height: u32, cells: Vec<TerrainType>) -> PlanetGenResult<Self> {
        let dimensions = GridDimensions::new(width, height)?;
        if cells.len() != dimensions.cell_count() {
            return Err(PlanetGenError::InvalidArgument {
                reason: format!(
                    "Cell count {} does not match grid dimensions {}x{} (expected {})",
                    cells.len(),
                    width,
                    height,
                    dimensions.cell_count()
                ),
            });
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn cells(&self) -> &[TerrainType] {
        &self.cells
    }

    pub fn get(&self, x: u32, y: u32) -> Option<TerrainType> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get((y * self.width + x) as usize).copied()
    }

    /// Lookup with horizontal wrap; rows do not wrap
    pub fn wrapped_get(&self, x: i64, y: u32) -> Option<TerrainType> {
        let wrapped_x = x.rem_euclid(self.width as i64) as u32;
        self.get(wrapped_x, y)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[TerrainType]> {
        self.cells.chunks(self.width as usize)
    }

    /// Cell count per terrain type, in [`TerrainType::ALL`] order
    pub fn distribution(&self) -> Vec<(TerrainType, usize)> {
        TerrainType::ALL
            .into_iter()
            .map(|t| (t, self.cells.iter().filter(|&&c| c == t).count()))
            .collect()
    }

    /// Glyph preview of the top-left `max_cols x max_rows` corner
    pub fn render_ascii(&self, max_cols: u32, max_rows: u32) -> String {
        self.rows()
            .take(max_rows as usize)
            .map(|row| {
                row.iter()
                    .take(max_cols as usize)
                    .map(|t| t.glyph().to_string())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Flat colored map, one pixel per cell
    pub fn to_rgb_image(&self) -> image::RgbImage {
        image::RgbImage::from_fn(self.width, self.height, |x, y| {
            let Rgb(r, g, b) = self.get(x, y).map(terrain_color).unwrap_or(FALLBACK_COLOR);
            image::Rgb([r, g, b])
        })
    }

    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> PlanetGenResult<()> {
        self.to_rgb_image().save(path)?;
        Ok(())
    }

    /// Save the grid in bincode form, for callers that cache generated grids
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> PlanetGenResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let data = bincode::serde::encode_to_vec(self, bincode::config::standard()).map_err(|e| {
            PlanetGenError::InvalidArgument {
                reason: format!("Failed to serialize grid: {e}"),
            }
        })?;

        std::fs::write(path, data)?;
        Ok(())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> PlanetGenResult<Self> {
        let data = std::fs::read(path)?;

        let (grid, _): (TerrainGrid, usize) =
            bincode::serde::decode_from_slice(&data, bincode::config::standard()).map_err(|e| {
                PlanetGenError::CorruptedGridFile {
                    reason: format!("Failed to deserialize grid data: {e}"),
                }
            })?;

        Ok(grid)
    }
}
