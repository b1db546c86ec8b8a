use dbsdk_rs::math::Vector3;

use crate::config::ConfigError;

pub fn parse_f32(key: &str, src: &str) -> Result<f32, ConfigError> {
    src.trim().parse::<f32>().map_err(|_| ConfigError::InvalidNumber {
        key: key.to_owned(),
        value: src.to_owned(),
    })
}

pub fn parse_u32(key: &str, src: &str) -> Result<u32, ConfigError> {
    src.trim().parse::<u32>().map_err(|_| ConfigError::InvalidNumber {
        key: key.to_owned(),
        value: src.to_owned(),
    })
}

/// Accepts `1`/`0` as well as `true`/`false`
pub fn parse_bool(key: &str, src: &str) -> Result<bool, ConfigError> {
    match src.trim() {
        "1" | "true" => Ok(true),
        "0" | "false" => Ok(false),
        _ => Err(ConfigError::InvalidNumber {
            key: key.to_owned(),
            value: src.to_owned(),
        }),
    }
}

pub fn parse_vec3(key: &str, src: &str) -> Result<Vector3, ConfigError> {
    let parts = src.split_whitespace()
        .map(|s| s.parse::<f32>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| ConfigError::InvalidVector { key: key.to_owned(), value: src.to_owned() })?;

    match parts.as_slice() {
        [x, y, z] => Ok(Vector3::new(*x, *y, *z)),
        _ => Err(ConfigError::InvalidVector { key: key.to_owned(), value: src.to_owned() }),
    }
}

/// Parses `time value time value ...` into curve points
pub fn parse_curve_points(key: &str, src: &str) -> Result<Vec<(f32, f32)>, ConfigError> {
    let values = src.split_whitespace()
        .map(|s| s.parse::<f32>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| ConfigError::InvalidCurve { key: key.to_owned(), value: src.to_owned() })?;

    if values.is_empty() || values.len() % 2 != 0 {
        return Err(ConfigError::InvalidCurve { key: key.to_owned(), value: src.to_owned() });
    }

    Ok(values.chunks_exact(2).map(|pair| (pair[0], pair[1])).collect())
}
