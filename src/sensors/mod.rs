pub mod stream;
pub mod templates;

use crate::errors::PlanetGenResult;
use crate::planet::{PlanetDescriptor, TerrainParams};
use derive_more::{Display, From};
use serde::{Deserialize, Serialize};
use std::fmt;
use stream::SeededStream;
use templates::{MINERALS, PlanetTypeTemplate, template_for};
use tracing::debug;

/// Placeholder entry for a composition list with nothing to report
pub const NONE_ENTRY: &str = "None";

/// Chance of one extra mineral from the full catalog
pub const RARE_MINERAL_CHANCE: f64 = 0.3;

/// Planet mass in tons
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Serialize, Deserialize)]
pub struct Tons(u64);

impl Tons {
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Result of a planetary sensor scan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    pub mass: Tons,
    /// Biological density, percent
    pub bio_density: f64,
    /// Mineral density, percent
    pub mineral_density: f64,
    /// Gases in order of abundance
    pub atmosphere: Vec<String>,
    pub hydrosphere: Vec<String>,
    pub lithosphere: Vec<String>,
}

impl SensorReading {
    /// Scan log lines, one per composition list
    pub fn report_lines(&self) -> Vec<String> {
        vec![
            format!("Atmosphere: {}", self.atmosphere.join(", ")),
            format!("Hydrosphere: {}", self.hydrosphere.join(", ")),
            format!("Lithosphere: {}", self.lithosphere.join(", ")),
        ]
    }
}

impl fmt::Display for SensorReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Mass: {} tons", self.mass)?;
        writeln!(f, "Bio: {:.1}%", self.bio_density)?;
        writeln!(f, "Min: {:.1}%", self.mineral_density)?;
        write!(f, "{}", self.report_lines().join("\n"))
    }
}

/// Draws a [`SensorReading`] from one seeded stream.
///
/// The draw order is fixed: mass, bio variation, mineral variation, atmosphere,
/// hydrosphere, lithosphere. Reordering any step changes every later value.
pub struct SensorGenerator<'a> {
    params: &'a TerrainParams,
    template: &'static PlanetTypeTemplate,
    stream: SeededStream,
}

impl<'a> SensorGenerator<'a> {
    pub fn new(descriptor: &'a PlanetDescriptor) -> Self {
        Self {
            params: descriptor.terrain_params(),
            template: template_for(descriptor.planet_type()),
            stream: SeededStream::new(descriptor.seed()),
        }
    }

    pub fn generate(mut self) -> SensorReading {
        let mass = self.draw_mass();
        let bio_density = self.draw_bio_density();
        let mineral_density = self.draw_mineral_density();
        let atmosphere = self.draw_atmosphere();
        let hydrosphere = self.draw_hydrosphere();
        let lithosphere = self.draw_lithosphere();

        SensorReading {
            mass,
            bio_density,
            mineral_density,
            atmosphere,
            hydrosphere,
            lithosphere,
        }
    }

    fn draw_mass(&mut self) -> Tons {
        let (min, max) = self.template.mass_range;
        let mass = self.stream.next_uniform(min as f64, max as f64) as u64;
        Tons(mass.clamp(min, max))
    }

    fn draw_bio_density(&mut self) -> f64 {
        let temp_factor = temperature_factor(self.params.temperature);
        let bio = self.template.bio_base
            * self.template.bio_modifier
            * (0.5 + self.params.water_coverage)
            * temp_factor
            + self.stream.next_uniform(-10.0, 10.0);
        bio.clamp(0.0, 100.0)
    }

    fn draw_mineral_density(&mut self) -> f64 {
        let density = self.params.mineral_richness * 100.0 + self.stream.next_uniform(-15.0, 15.0);
        density.clamp(0.0, 100.0)
    }

    fn draw_atmosphere(&mut self) -> Vec<String> {
        let pool = self.template.atmosphere_pool;
        let count = self.stream.next_int(2, 4).min(pool.len());
        self.stream
            .sample_weighted_without_replacement(pool, self.template.atmosphere_weights, count)
            .into_iter()
            .map(String::from)
            .collect()
    }

    fn draw_hydrosphere(&mut self) -> Vec<String> {
        let water_coverage = self.params.water_coverage;
        if water_coverage < 0.1 {
            return vec![NONE_ENTRY.to_string()];
        }

        let count = if water_coverage > 0.7 {
            self.stream.next_int(2, 3)
        } else if water_coverage > 0.4 {
            self.stream.next_int(1, 2)
        } else {
            1
        };

        let pool = self.template.hydrosphere_pool;
        self.stream
            .sample_weighted_without_replacement(
                pool,
                self.template.hydrosphere_weights,
                count.min(pool.len()),
            )
            .into_iter()
            .map(String::from)
            .collect()
    }

    fn draw_lithosphere(&mut self) -> Vec<String> {
        let typical = self.template.typical_minerals;
        if typical.is_empty() {
            return vec![NONE_ENTRY.to_string()];
        }

        let count = self.stream.next_int(3, 6).min(typical.len());
        let mut selected = self.stream.sample_without_replacement(typical, count);

        if self.stream.next_unit() < RARE_MINERAL_CHANCE {
            // Only excludes what was drawn, so a typical mineral can still appear here
            let rare: Vec<&str> = MINERALS
                .iter()
                .copied()
                .filter(|m| !selected.contains(m))
                .collect();
            if let Some(&bonus) = self.stream.choose(&rare) {
                selected.push(bonus);
            }
        }

        selected.into_iter().map(String::from).collect()
    }
}

/// Life is most likely at mid temperatures; never drops below 0.1
pub fn temperature_factor(temperature: f64) -> f64 {
    (1.0 - (temperature - 0.5).abs() * 1.5).max(0.1)
}

/// Produce the sensor scan for a planet. Fails only on a malformed descriptor.
pub fn generate_sensor_data(descriptor: &PlanetDescriptor) -> PlanetGenResult<SensorReading> {
    descriptor.validate()?;
    debug!(
        "Generating sensor data for seed {} ({})",
        descriptor.seed(),
        descriptor.planet_type()
    );
    Ok(SensorGenerator::new(descriptor).generate())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planet::PlanetType;
    use std::collections::HashSet;

    fn descriptor(seed: u32, planet_type: PlanetType, water: f64) -> PlanetDescriptor {
        PlanetDescriptor::builder(seed)
            .planet_type(planet_type)
            .water_coverage(water)
            .build()
            .unwrap()
    }

    fn assert_unique(list: &[String]) {
        let unique: HashSet<&String> = list.iter().collect();
        assert_eq!(unique.len(), list.len(), "duplicate entries in {list:?}");
    }

    #[test]
    fn test_sensor_data_is_deterministic() {
        for planet_type in PlanetType::ALL {
            let d = descriptor(2001, planet_type, 0.6);
            let a = generate_sensor_data(&d).unwrap();
            let b = generate_sensor_data(&d).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_seeds_change_reading() {
        let a = generate_sensor_data(&descriptor(1, PlanetType::Rocky, 0.5)).unwrap();
        let b = generate_sensor_data(&descriptor(2, PlanetType::Rocky, 0.5)).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_range_invariants() {
        for seed in 0..200 {
            for planet_type in PlanetType::ALL {
                let water = (seed % 11) as f64 / 10.0;
                let params = TerrainParams {
                    water_coverage: water,
                    temperature: (seed % 7) as f64 / 6.0,
                    mineral_richness: (seed % 5) as f64 / 4.0,
                    ..TerrainParams::default()
                };
                let d = PlanetDescriptor::new(seed, planet_type, params).unwrap();
                let reading = generate_sensor_data(&d).unwrap();
                let (min, max) = template_for(planet_type).mass_range;

                assert!((min..=max).contains(&reading.mass.get()));
                assert!((0.0..=100.0).contains(&reading.bio_density));
                assert!((0.0..=100.0).contains(&reading.mineral_density));
            }
        }
    }

    #[test]
    fn test_lists_have_no_duplicates() {
        for seed in 0..300 {
            for planet_type in PlanetType::ALL {
                let reading = generate_sensor_data(&descriptor(seed, planet_type, 0.9)).unwrap();
                assert_unique(&reading.atmosphere);
                assert_unique(&reading.hydrosphere);
                assert_unique(&reading.lithosphere);
            }
        }
    }

    #[test]
    fn test_list_sizes() {
        for seed in 0..200 {
            let reading = generate_sensor_data(&descriptor(seed, PlanetType::Rocky, 0.9)).unwrap();
            assert!((2..=4).contains(&reading.atmosphere.len()));
            assert!((2..=3).contains(&reading.hydrosphere.len()));
            // 3-6 typical minerals plus an optional rare one
            assert!((3..=7).contains(&reading.lithosphere.len()));

            let reading = generate_sensor_data(&descriptor(seed, PlanetType::Rocky, 0.5)).unwrap();
            assert!((1..=2).contains(&reading.hydrosphere.len()));

            let reading = generate_sensor_data(&descriptor(seed, PlanetType::Rocky, 0.3)).unwrap();
            assert_eq!(reading.hydrosphere.len(), 1);
        }
    }

    #[test]
    fn test_entries_come_from_template_pools() {
        for seed in 0..100 {
            let reading = generate_sensor_data(&descriptor(seed, PlanetType::Frozen, 0.8)).unwrap();
            let template = template_for(PlanetType::Frozen);
            for gas in &reading.atmosphere {
                assert!(template.atmosphere_pool.contains(&gas.as_str()));
            }
            for liquid in &reading.hydrosphere {
                assert!(template.hydrosphere_pool.contains(&liquid.as_str()));
            }
            for mineral in &reading.lithosphere {
                assert!(MINERALS.contains(&mineral.as_str()));
            }
        }
    }

    #[test]
    fn test_rare_mineral_bonus_appears() {
        let with_bonus = (0..200)
            .filter(|&seed| {
                let reading =
                    generate_sensor_data(&descriptor(seed, PlanetType::Liquid, 0.5)).unwrap();
                let typical = template_for(PlanetType::Liquid).typical_minerals;
                reading.lithosphere.iter().any(|m| !typical.contains(&m.as_str()))
            })
            .count();
        assert!(with_bonus > 0, "some scans should include a rare mineral");
    }

    #[test]
    fn test_gas_giant_has_no_lithosphere() {
        for seed in 0..100 {
            let reading = generate_sensor_data(&descriptor(seed, PlanetType::GasGiant, 0.5)).unwrap();
            assert_eq!(reading.lithosphere, vec![NONE_ENTRY.to_string()]);
        }
    }

    #[test]
    fn test_dry_planet_has_no_hydrosphere() {
        let reading = generate_sensor_data(&descriptor(9, PlanetType::Liquid, 0.05)).unwrap();
        assert_eq!(reading.hydrosphere, vec!["None".to_string()]);
    }

    #[test]
    fn test_gas_giant_bio_is_noise_only() {
        for seed in 0..50 {
            let reading = generate_sensor_data(&descriptor(seed, PlanetType::GasGiant, 1.0)).unwrap();
            assert!(reading.bio_density <= 10.0);
        }
    }

    #[test]
    fn test_temperature_factor() {
        assert_eq!(temperature_factor(0.5), 1.0);
        assert!((temperature_factor(0.0) - 0.25).abs() < 1e-12);
        assert!((temperature_factor(1.0) - 0.25).abs() < 1e-12);
        assert_eq!(temperature_factor(2.0), 0.1);
    }

    #[test]
    fn test_unknown_type_matches_rocky() {
        let from_name = PlanetDescriptor::builder(77).type_name("ocean").build().unwrap();
        let rocky = PlanetDescriptor::builder(77).planet_type(PlanetType::Rocky).build().unwrap();
        assert_eq!(
            generate_sensor_data(&from_name).unwrap(),
            generate_sensor_data(&rocky).unwrap()
        );
    }

    #[test]
    fn test_report_lines() {
        let reading = SensorReading {
            mass: Tons::from(500_u64),
            bio_density: 12.5,
            mineral_density: 40.0,
            atmosphere: vec!["Nitrogen".into(), "Oxygen".into()],
            hydrosphere: vec!["None".into()],
            lithosphere: vec!["Iron".into()],
        };
        assert_eq!(
            reading.report_lines(),
            vec![
                "Atmosphere: Nitrogen, Oxygen",
                "Hydrosphere: None",
                "Lithosphere: Iron"
            ]
        );
        let text = reading.to_string();
        assert!(text.starts_with("Mass: 500 tons"));
        assert!(text.contains("Bio: 12.5%"));
    }
}
