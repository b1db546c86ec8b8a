use std::{collections::HashMap, sync::Arc};

use thiserror::Error;

use crate::{component::motion::{JumpPolicy, MotionConfig}, curve::KeyframeCurve, parse_utils};

const DEFAULT_JUMP_POWER: f32 = 8.0;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("missing key \"{0}\"")]
    MissingKey(String),
    #[error("invalid number for \"{key}\": \"{value}\"")]
    InvalidNumber { key: String, value: String },
    #[error("invalid vector for \"{key}\": \"{value}\"")]
    InvalidVector { key: String, value: String },
    #[error("invalid curve for \"{key}\": \"{value}\" (expected time/value pairs)")]
    InvalidCurve { key: String, value: String },
}

fn opt_f32(props: &HashMap<&str, &str>, key: &str) -> Result<Option<f32>, ConfigError> {
    props.get(key).map(|v| parse_utils::parse_f32(key, v)).transpose()
}

pub fn required<'a>(props: &HashMap<&str, &'a str>, key: &str) -> Result<&'a str, ConfigError> {
    props.get(key).copied().ok_or_else(|| ConfigError::MissingKey(key.to_owned()))
}

impl MotionConfig {
    /// Reads movement tuning from an entity definition. Missing keys keep their defaults.
    ///
    /// `allow_air_jumps` selects the jump policy: when set, `jump_height` and `max_jumps`
    /// apply, otherwise `jump_power`. A `rotation_speed` of 0 disables facing updates.
    pub fn from_entity(props: &HashMap<&str, &str>) -> Result<MotionConfig, ConfigError> {
        let mut config = MotionConfig::default();

        if let Some(v) = opt_f32(props, "move_speed")? {
            config.move_speed = v;
        }

        if let Some(v) = opt_f32(props, "rotation_speed")? {
            config.rotation_speed = if v > 0.0 { Some(v) } else { None };
        }

        if let Some(v) = opt_f32(props, "gravity")? {
            config.gravity = v;
        }

        if let Some(v) = opt_f32(props, "max_turn_time")? {
            config.max_turn_time = v;
        }

        if let Some(v) = opt_f32(props, "max_smoothing_speed")? {
            config.max_smoothing_speed = v;
        }

        if let Some(v) = opt_f32(props, "rest_bias")? {
            config.rest_bias = v;
        }

        if let Some(v) = opt_f32(props, "facing_deadzone")? {
            config.facing_deadzone = v;
        }

        if let Some(src) = props.get("turn_time_curve") {
            let points = parse_utils::parse_curve_points("turn_time_curve", src)?;
            config.turn_time_curve = Arc::new(KeyframeCurve::from_points(&points));
        }

        let allow_air_jumps = match props.get("allow_air_jumps") {
            Some(v) => parse_utils::parse_bool("allow_air_jumps", v)?,
            None => config.jump.allow_air_jumps(),
        };

        config.jump = if allow_air_jumps {
            let (default_height, default_max) = match config.jump {
                JumpPolicy::AirJumps { jump_height, max_jumps } => (jump_height, max_jumps),
                JumpPolicy::GroundOnly { .. } => (2.0, 1),
            };

            let jump_height = opt_f32(props, "jump_height")?.unwrap_or(default_height);
            let max_jumps = match props.get("max_jumps") {
                Some(v) => parse_utils::parse_u32("max_jumps", v)?,
                None => default_max,
            };

            JumpPolicy::AirJumps { jump_height, max_jumps }
        }
        else {
            JumpPolicy::GroundOnly {
                jump_power: opt_f32(props, "jump_power")?.unwrap_or(DEFAULT_JUMP_POWER),
            }
        };

        Ok(config)
    }
}
