use ::planetgen::errors::{PlanetGenError, PlanetGenResult};
use ::planetgen::terrain::GridDimensions;

/// Generic parser for delimited strings that return fixed-size arrays
pub fn parse_delimited<T, const N: usize>(
    input: &str,
    delimiter: char,
    type_name: &str,
    parser: impl Fn(&str) -> Option<T>,
) -> PlanetGenResult<[T; N]>
where
    T: Copy + Default,
{
    let parts: Vec<&str> = input.split(delimiter).map(str::trim).collect();
    if parts.len() != N {
        return Err(PlanetGenError::InvalidArgument {
            reason: format!(
                "Invalid {type_name} format '{input}'. Expected {N} {delimiter}-separated values"
            ),
        });
    }

    let mut result = [T::default(); N];
    for (i, part) in parts.iter().enumerate() {
        result[i] = parser(part).ok_or_else(|| PlanetGenError::InvalidArgument {
            reason: format!("Invalid {type_name} value: '{part}'"),
        })?;
    }

    Ok(result)
}

/// Parse size string "WIDTHxHEIGHT" with validation
pub fn parse_size(size_str: &str) -> PlanetGenResult<GridDimensions> {
    let [width, height] =
        parse_delimited::<u32, 2>(&size_str.to_ascii_lowercase(), 'x', "size", |s| s.parse().ok())?;
    GridDimensions::new(width, height)
}

/// Parse a terrain parameter that must lie in [0, 1]
pub fn parse_fraction(name: &str, value: f64) -> PlanetGenResult<f64> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(PlanetGenError::InvalidArgument {
            reason: format!("{name} must be between 0.0 and 1.0, got {value}"),
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_size() {
        let dims = parse_size("64x32").unwrap();
        assert_eq!((dims.width, dims.height), (64, 32));
        let dims = parse_size("1X1").unwrap();
        assert_eq!((dims.width, dims.height), (1, 1));

        assert!(parse_size("64").is_err());
        assert!(parse_size("axb").is_err());
        assert!(matches!(
            parse_size("0x64"),
            Err(PlanetGenError::InvalidDimension { name: "width", .. })
        ));
        assert!(matches!(
            parse_size("64x3000"),
            Err(PlanetGenError::DimensionTooLarge { name: "height", .. })
        ));
    }

    #[test]
    fn test_parse_delimited() {
        let values = parse_delimited::<f64, 3>("0.1, 0.2,0.3", ',', "triple", |s| s.parse().ok())
            .unwrap();
        assert_eq!(values, [0.1, 0.2, 0.3]);

        let err = parse_delimited::<f64, 2>("1.0,x", ',', "pair", |s| s.parse().ok()).unwrap_err();
        assert!(err.to_string().contains("'x'"));
    }

    #[test]
    fn test_parse_fraction() {
        assert_eq!(parse_fraction("water", 0.5).unwrap(), 0.5);
        assert_eq!(parse_fraction("water", 1.0).unwrap(), 1.0);
        assert!(parse_fraction("water", -0.1).is_err());
        assert!(parse_fraction("water", 1.5).is_err());
        assert!(parse_fraction("water", f64::NAN).is_err());
    }
}
