use crate::errors::{PlanetGenError, PlanetGenResult};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::debug;
use validator::Validate;

/// Planet classification, selects the sensor template profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PlanetType {
    #[display("magma")]
    Magma,
    #[default]
    #[display("rocky")]
    Rocky,
    #[display("liquid")]
    Liquid,
    #[display("frozen")]
    Frozen,
    #[display("gas_giant")]
    GasGiant,
}

impl PlanetType {
    pub const ALL: [PlanetType; 5] = [
        PlanetType::Magma,
        PlanetType::Rocky,
        PlanetType::Liquid,
        PlanetType::Frozen,
        PlanetType::GasGiant,
    ];

    /// Resolve a type name. Unknown names fall back to `Rocky`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "magma" => PlanetType::Magma,
            "rocky" => PlanetType::Rocky,
            "liquid" => PlanetType::Liquid,
            "frozen" => PlanetType::Frozen,
            "gas_giant" | "gas-giant" | "gasgiant" => PlanetType::GasGiant,
            other => {
                debug!("Unknown planet type '{other}', using rocky");
                PlanetType::Rocky
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PlanetType::Magma => "magma",
            PlanetType::Rocky => "rocky",
            PlanetType::Liquid => "liquid",
            PlanetType::Frozen => "frozen",
            PlanetType::GasGiant => "gas_giant",
        }
    }
}

impl From<String> for PlanetType {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<PlanetType> for String {
    fn from(planet_type: PlanetType) -> Self {
        planet_type.as_str().to_string()
    }
}

/// Tunable surface parameters. Every key is optional when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct TerrainParams {
    pub has_surface: bool,
    #[validate(range(min = 0.0, max = 1.0))]
    pub water_coverage: f64,
    #[validate(range(min = 0.0, max = 1.0))]
    pub elevation_scale: f64,
    #[validate(range(min = 0.0, max = 1.0))]
    pub temperature: f64,
    #[validate(range(min = 0.0, max = 1.0))]
    pub mineral_richness: f64,

    // Type-specific extras, carried for callers but unused by the generators
    #[validate(range(min = 0.0, max = 1.0))]
    pub ice_coverage: f64,
    #[validate(range(min = 0.0, max = 1.0))]
    pub lava_coverage: f64,
    #[validate(range(min = 0.0, max = 1.0))]
    pub atmospheric_turbulence: f64,
}

impl TerrainParams {
    pub const DEFAULT_WATER_COVERAGE: f64 = 0.3;
    pub const DEFAULT_ELEVATION_SCALE: f64 = 0.5;
    pub const DEFAULT_TEMPERATURE: f64 = 0.5;
    pub const DEFAULT_MINERAL_RICHNESS: f64 = 0.2;

    fn fractions(&self) -> [(&'static str, f64); 7] {
        [
            ("water_coverage", self.water_coverage),
            ("elevation_scale", self.elevation_scale),
            ("temperature", self.temperature),
            ("mineral_richness", self.mineral_richness),
            ("ice_coverage", self.ice_coverage),
            ("lava_coverage", self.lava_coverage),
            ("atmospheric_turbulence", self.atmospheric_turbulence),
        ]
    }

    /// Range-check every fraction, naming each offending field
    pub fn check(&self) -> PlanetGenResult<()> {
        // validator's range check lets NaN through
        if let Some((field, value)) = self.fractions().into_iter().find(|(_, v)| !v.is_finite()) {
            return Err(PlanetGenError::InvalidDescriptor {
                reason: format!("{field} must be a finite number, got {value}"),
            });
        }

        self.validate().map_err(|validation_errors| {
            let mut details = validation_errors
                .field_errors()
                .iter()
                .map(|(field, errors)| {
                    let msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
                    format!("{field} must be within [0, 1] ({})", msgs.join(", "))
                })
                .collect::<Vec<String>>();
            details.sort();

            PlanetGenError::InvalidDescriptor {
                reason: details.join("; "),
            }
        })
    }
}

impl Default for TerrainParams {
    fn default() -> Self {
        Self {
            has_surface: true,
            water_coverage: Self::DEFAULT_WATER_COVERAGE,
            elevation_scale: Self::DEFAULT_ELEVATION_SCALE,
            temperature: Self::DEFAULT_TEMPERATURE,
            mineral_richness: Self::DEFAULT_MINERAL_RICHNESS,
            ice_coverage: 0.0,
            lava_coverage: 0.0,
            atmospheric_turbulence: 0.5,
        }
    }
}

/// Input to both generators: seed, type and surface parameters.
///
/// Fields are only reachable through getters, so a built descriptor cannot be
/// changed. Descriptors that arrive through serde are validated again by each
/// generator before any work starts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanetDescriptor {
    seed: u32,
    #[serde(default, rename = "type")]
    planet_type: PlanetType,
    #[serde(default)]
    terrain_params: TerrainParams,
}

impl PlanetDescriptor {
    /// Create a new descriptor with validation
    pub fn new(
        seed: u32,
        planet_type: PlanetType,
        terrain_params: TerrainParams,
    ) -> PlanetGenResult<Self> {
        let descriptor = Self {
            seed,
            planet_type,
            terrain_params,
        };
        descriptor.validate()?;
        Ok(descriptor)
    }

    pub fn builder(seed: u32) -> PlanetDescriptorBuilder {
        PlanetDescriptorBuilder::new(seed)
    }

    pub fn validate(&self) -> PlanetGenResult<()> {
        self.terrain_params.check()
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn planet_type(&self) -> PlanetType {
        self.planet_type
    }

    pub fn terrain_params(&self) -> &TerrainParams {
        &self.terrain_params
    }

    pub fn can_land(&self) -> bool {
        self.terrain_params.has_surface
    }
}

/// Builder for [`PlanetDescriptor`]; unset parameters keep their defaults
#[derive(Debug, Clone)]
pub struct PlanetDescriptorBuilder {
    seed: u32,
    planet_type: PlanetType,
    params: TerrainParams,
}

impl PlanetDescriptorBuilder {
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            planet_type: PlanetType::default(),
            params: TerrainParams::default(),
        }
    }

    pub fn planet_type(mut self, planet_type: PlanetType) -> Self {
        self.planet_type = planet_type;
        self
    }

    pub fn type_name(mut self, name: &str) -> Self {
        self.planet_type = PlanetType::from_name(name);
        self
    }

    pub fn terrain_params(mut self, params: TerrainParams) -> Self {
        self.params = params;
        self
    }

    pub fn water_coverage(mut self, value: f64) -> Self {
        self.params.water_coverage = value;
        self
    }

    pub fn elevation_scale(mut self, value: f64) -> Self {
        self.params.elevation_scale = value;
        self
    }

    pub fn temperature(mut self, value: f64) -> Self {
        self.params.temperature = value;
        self
    }

    pub fn mineral_richness(mut self, value: f64) -> Self {
        self.params.mineral_richness = value;
        self
    }

    pub fn has_surface(mut self, has_surface: bool) -> Self {
        self.params.has_surface = has_surface;
        self
    }

    pub fn build(self) -> PlanetGenResult<PlanetDescriptor> {
        PlanetDescriptor::new(self.seed, self.planet_type, self.params)
    }
}
