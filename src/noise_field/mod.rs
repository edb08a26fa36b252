use noise::{NoiseFn, Perlin};
use std::f64::consts::TAU;

/// Fractal parameters for one noise layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseSettings {
    pub octaves: u32,
    pub persistence: f64,
    pub lacunarity: f64,
    /// Base offset for the noise permutation, derived from the planet seed
    pub seed: u32,
}

/// A 2D coherent noise field returning values in [-1, 1]
pub trait CoherentNoise {
    fn sample(&self, x: f64, y: f64) -> f64;
}

/// Multi-octave Perlin noise, normalized by the total octave amplitude
#[derive(Debug, Clone)]
pub struct PerlinField {
    perlin: Perlin,
    settings: NoiseSettings,
}

impl PerlinField {
    pub fn new(settings: NoiseSettings) -> Self {
        Self {
            perlin: Perlin::new(settings.seed),
            settings,
        }
    }
}

impl CoherentNoise for PerlinField {
    fn sample(&self, x: f64, y: f64) -> f64 {
        let mut noise_value = 0.0;
        let mut total_amplitude = 0.0;
        let mut current_amplitude = 1.0;
        let mut current_frequency = 1.0;

        for _ in 0..self.settings.octaves.max(1) {
            noise_value += self
                .perlin
                .get([x * current_frequency, y * current_frequency])
                * current_amplitude;
            total_amplitude += current_amplitude;
            current_amplitude *= self.settings.persistence;
            current_frequency *= self.settings.lacunarity;
        }

        (noise_value / total_amplitude).clamp(-1.0, 1.0)
    }
}

/// Sample `(x, y, octaves, persistence, lacunarity, seed)` in one call
pub fn noise2d(x: f64, y: f64, settings: NoiseSettings) -> f64 {
    PerlinField::new(settings).sample(x, y)
}

/// Maps grid columns onto a circle so column 0 and column `width - 1` sample
/// neighbouring noise coordinates. Rows stay linear (no pole wrap).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircularProjection {
    width: u32,
    scale: f64,
    radius: f64,
}

impl CircularProjection {
    pub fn new(width: u32, scale: f64) -> Self {
        let circumference = width as f64 / scale;
        Self {
            width,
            scale,
            radius: circumference / TAU,
        }
    }

    /// Returns `(nx, ny + ny_offset)` for a grid cell
    pub fn project(&self, x: u32, y: u32) -> (f64, f64) {
        let angle = (x as f64 / self.width as f64) * TAU;
        let nx = angle.cos() * self.radius;
        let ny_offset = angle.sin() * self.radius;
        let ny = y as f64 / self.scale;
        (nx, ny + ny_offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(seed: u32) -> NoiseSettings {
        NoiseSettings {
            octaves: 5,
            persistence: 0.5,
            lacunarity: 2.0,
            seed,
        }
    }

    #[test]
    fn test_noise_is_bounded() {
        let field = PerlinField::new(settings(7));
        for i in 0..200 {
            let x = i as f64 * 0.137 + 100.0;
            let y = i as f64 * 0.291 + 100.0;
            let v = field.sample(x, y);
            assert!((-1.0..=1.0).contains(&v), "noise out of range: {v}");
        }
    }

    #[test]
    fn test_noise_is_deterministic() {
        let a = PerlinField::new(settings(99));
        let b = PerlinField::new(settings(99));
        for i in 0..50 {
            let x = 100.3 + i as f64 * 0.41;
            assert_eq!(a.sample(x, 101.7), b.sample(x, 101.7));
        }
        assert_eq!(noise2d(100.5, 100.25, settings(99)), a.sample(100.5, 100.25));
    }

    #[test]
    fn test_noise_varies_with_seed() {
        let a = PerlinField::new(settings(1));
        let b = PerlinField::new(settings(2));
        let differs = (0..50).any(|i| {
            let x = 100.3 + i as f64 * 0.37;
            let y = 100.9 + i as f64 * 0.23;
            (a.sample(x, y) - b.sample(x, y)).abs() > 1e-9
        });
        assert!(differs, "different seeds should produce different noise");
    }

    #[test]
    fn test_projection_wraps_horizontally() {
        let projection = CircularProjection::new(64, 30.0);
        let (x0, y0) = projection.project(0, 5);
        let (x_last, y_last) = projection.project(63, 5);
        let (x1, y1) = projection.project(1, 5);

        let seam = ((x0 - x_last).powi(2) + (y0 - y_last).powi(2)).sqrt();
        let step = ((x0 - x1).powi(2) + (y0 - y1).powi(2)).sqrt();
        assert!(
            (seam - step).abs() < 1e-9,
            "seam distance {seam} should equal a regular column step {step}"
        );
    }

    #[test]
    fn test_projection_rows_are_linear() {
        let projection = CircularProjection::new(10, 100.0);
        let (_, y_a) = projection.project(0, 0);
        let (_, y_b) = projection.project(0, 50);
        assert!((y_b - y_a - 0.5).abs() < 1e-12);
    }
}
