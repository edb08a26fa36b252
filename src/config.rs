use crate::errors::{PlanetGenError, PlanetGenResult};
use crate::planet::{PlanetDescriptor, PlanetType, TerrainParams};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// A named planet as stored in the catalog file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetEntry {
    pub name: String,
    #[serde(flatten)]
    pub descriptor: PlanetDescriptor,
}

impl PlanetEntry {
    /// `params` is `[water_coverage, elevation_scale, temperature, mineral_richness]`
    fn new(name: &str, seed: u32, planet_type: PlanetType, params: [f64; 4]) -> PlanetGenResult<Self> {
        let [water_coverage, elevation_scale, temperature, mineral_richness] = params;
        let terrain_params = TerrainParams {
            water_coverage,
            elevation_scale,
            temperature,
            mineral_richness,
            has_surface: planet_type != PlanetType::GasGiant,
            ..TerrainParams::default()
        };

        Ok(Self {
            name: name.to_string(),
            descriptor: PlanetDescriptor::new(seed, planet_type, terrain_params)?,
        })
    }
}

/// Hand-authored planet list, stored as TOML
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlanetCatalog {
    #[serde(default, rename = "planet")]
    pub planets: Vec<PlanetEntry>,
}

impl PlanetCatalog {
    /// Built-in planets used when no catalog file exists
    pub fn sample() -> PlanetGenResult<Self> {
        Ok(Self {
            planets: vec![
                PlanetEntry::new("Aqua", 2001, PlanetType::Liquid, [0.6, 0.3, 0.5, 0.3])?,
                PlanetEntry::new("Typhon", 3001, PlanetType::Rocky, [0.2, 0.7, 0.3, 0.5])?,
                PlanetEntry::new("Vulcan", 4001, PlanetType::Magma, [0.05, 0.8, 0.95, 0.7])?,
                PlanetEntry::new("Boreas", 5001, PlanetType::Frozen, [0.4, 0.4, 0.05, 0.4])?,
                PlanetEntry::new("Jove", 6001, PlanetType::GasGiant, [0.0, 0.5, 0.4, 0.0])?,
            ],
        })
    }

    pub fn find(&self, name: &str) -> PlanetGenResult<&PlanetEntry> {
        self.planets
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| PlanetGenError::PlanetNotFound {
                name: name.to_string(),
            })
    }

    /// Check every entry, naming the first planet that fails
    pub fn validate(&self) -> PlanetGenResult<()> {
        for entry in &self.planets {
            entry
                .descriptor
                .validate()
                .map_err(|e| PlanetGenError::InvalidDescriptor {
                    reason: format!("{}: {e}", entry.name),
                })?;
        }
        Ok(())
    }

    pub fn from_toml_str(contents: &str) -> PlanetGenResult<Self> {
        let catalog: PlanetCatalog = toml::from_str(contents)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn to_toml_string(&self) -> PlanetGenResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Default catalog location: `<config dir>/planetgen/planets.toml`
pub fn catalog_path() -> PlanetGenResult<PathBuf> {
    let mut path = dirs::config_dir().ok_or(PlanetGenError::ConfigDirNotFound)?;
    path.push("planetgen");
    path.push("planets.toml");
    Ok(path)
}

pub fn load_catalog<P: AsRef<Path>>(path: P) -> PlanetGenResult<PlanetCatalog> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(PlanetGenError::CatalogFileNotFound {
            path: path.to_path_buf(),
        });
    }

    let contents = fs::read_to_string(path)?;
    let catalog = PlanetCatalog::from_toml_str(&contents)?;
    info!("Loaded {} planets from {}", catalog.planets.len(), path.display());
    Ok(catalog)
}

pub fn save_catalog<P: AsRef<Path>>(catalog: &PlanetCatalog, path: P) -> PlanetGenResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, catalog.to_toml_string()?)?;
    Ok(())
}

/// Load the catalog at `path`, or the default location, falling back to the
/// built-in sample when the file is missing
pub fn load_catalog_or_sample(path: Option<&Path>) -> PlanetGenResult<PlanetCatalog> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => match catalog_path() {
            Ok(path) => path,
            Err(_) => return PlanetCatalog::sample(),
        },
    };

    match load_catalog(&path) {
        Err(PlanetGenError::CatalogFileNotFound { .. }) => {
            warn!("No catalog at {}, using built-in planets", path.display());
            PlanetCatalog::sample()
        }
        other => other,
    }
}
