use crate::planet::PlanetType;

/// Every mineral a scan can report
pub const MINERALS: [&str; 21] = [
    "Lead", "Iron", "Cobalt", "Nickel", "Copper", "Zinc", "Molybdenum", "Tin", "Magnesium",
    "Aluminum", "Titanium", "Chromium", "Antimony", "Promethium", "Mercury", "Tungsten", "Silver",
    "Gold", "Platinum", "Plutonium", "Rodnium",
];

/// Static composition profile for one planet type
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetTypeTemplate {
    pub planet_type: PlanetType,
    pub atmosphere_pool: &'static [&'static str],
    pub atmosphere_weights: &'static [f64],
    pub hydrosphere_pool: &'static [&'static str],
    pub hydrosphere_weights: &'static [f64],
    /// Mass bounds in tons, inclusive
    pub mass_range: (u64, u64),
    /// Bio percentage before modifiers
    pub bio_base: f64,
    pub bio_modifier: f64,
    pub typical_minerals: &'static [&'static str],
}

pub static MAGMA: PlanetTypeTemplate = PlanetTypeTemplate {
    planet_type: PlanetType::Magma,
    atmosphere_pool: &["Carbon Dioxide", "Sulfur Dioxide", "Nitrogen", "Argon", "Water Vapor"],
    atmosphere_weights: &[3.0, 2.0, 1.0, 1.0, 1.0],
    hydrosphere_pool: &["Molten Rock", "Sulfuric Acid", "Water"],
    hydrosphere_weights: &[4.0, 2.0, 1.0],
    mass_range: (100_000_000, 600_000_000),
    bio_base: 2.0,
    bio_modifier: 0.05,
    typical_minerals: &["Iron", "Magnesium", "Titanium", "Tungsten", "Platinum", "Chromium"],
};

pub static ROCKY: PlanetTypeTemplate = PlanetTypeTemplate {
    planet_type: PlanetType::Rocky,
    atmosphere_pool: &["Nitrogen", "Oxygen", "Carbon Dioxide", "Argon", "Water Vapor", "Neon"],
    atmosphere_weights: &[3.0, 2.0, 2.0, 1.0, 1.0, 1.0],
    hydrosphere_pool: &["Water", "Ice", "Salt Water"],
    hydrosphere_weights: &[3.0, 1.0, 2.0],
    mass_range: (200_000_000, 1_000_000_000),
    bio_base: 20.0,
    bio_modifier: 1.0,
    typical_minerals: &["Iron", "Copper", "Nickel", "Aluminum", "Zinc", "Lead", "Silver", "Gold"],
};

pub static LIQUID: PlanetTypeTemplate = PlanetTypeTemplate {
    planet_type: PlanetType::Liquid,
    atmosphere_pool: &["Nitrogen", "Oxygen", "Water Vapor", "Argon", "Carbon Dioxide"],
    atmosphere_weights: &[3.0, 2.0, 2.0, 1.0, 1.0],
    hydrosphere_pool: &["Water", "Salt Water", "Ice"],
    hydrosphere_weights: &[4.0, 3.0, 1.0],
    mass_range: (300_000_000, 1_200_000_000),
    bio_base: 40.0,
    bio_modifier: 1.5,
    typical_minerals: &["Magnesium", "Aluminum", "Cobalt", "Tin", "Nickel"],
};

pub static FROZEN: PlanetTypeTemplate = PlanetTypeTemplate {
    planet_type: PlanetType::Frozen,
    atmosphere_pool: &["Nitrogen", "Argon", "Methane", "Neon", "Helium"],
    atmosphere_weights: &[3.0, 2.0, 2.0, 1.0, 1.0],
    hydrosphere_pool: &["Ice", "Frozen Nitrogen", "Frozen Methane", "Ammonia"],
    hydrosphere_weights: &[4.0, 2.0, 2.0, 1.0],
    mass_range: (50_000_000, 500_000_000),
    bio_base: 5.0,
    bio_modifier: 0.2,
    typical_minerals: &["Platinum", "Plutonium", "Antimony", "Mercury", "Rodnium"],
};

pub static GAS_GIANT: PlanetTypeTemplate = PlanetTypeTemplate {
    planet_type: PlanetType::GasGiant,
    atmosphere_pool: &["Hydrogen", "Helium", "Methane", "Ammonia", "Water Vapor"],
    atmosphere_weights: &[5.0, 4.0, 2.0, 1.0, 1.0],
    hydrosphere_pool: &["Liquid Hydrogen", "Liquid Helium", "Ammonia"],
    hydrosphere_weights: &[4.0, 3.0, 1.0],
    mass_range: (10_000_000_000, 100_000_000_000),
    bio_base: 0.0,
    bio_modifier: 0.0,
    // No accessible surface
    typical_minerals: &[],
};

/// Profile for a planet type
pub fn template_for(planet_type: PlanetType) -> &'static PlanetTypeTemplate {
    match planet_type {
        PlanetType::Magma => &MAGMA,
        PlanetType::Rocky => &ROCKY,
        PlanetType::Liquid => &LIQUID,
        PlanetType::Frozen => &FROZEN,
        PlanetType::GasGiant => &GAS_GIANT,
    }
}
