use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, ScalingError};

/// Supported scaling modes, chosen independently for params and values.
///
/// Names are matched case-insensitively, both by `FromStr` and when
/// deserializing.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ScalingType {
    /// Subtract the column mean, divide by the column standard deviation.
    #[default]
    Standardization,
    /// Map each column linearly onto [0, 1] using its min and max.
    Normalization,
    Identity,
}

impl ScalingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScalingType::Standardization => "standardization",
            ScalingType::Normalization => "normalization",
            ScalingType::Identity => "identity",
        }
    }
}

impl fmt::Display for ScalingType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScalingType {
    type Err = ScalingError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "standardization" => Ok(ScalingType::Standardization),
            "normalization" => Ok(ScalingType::Normalization),
            "identity" => Ok(ScalingType::Identity),
            _ => Err(ScalingError::UnsupportedScalingType(s.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for ScalingType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

/// Direction of an elementwise transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Raw data space to scaled space.
    Forward,
    /// Scaled space back to raw data space.
    Reverse,
}

/// Which half of a task a sample belongs to.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DataKind {
    Params,
    Values,
}

impl fmt::Display for DataKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DataKind::Params => f.write_str("params"),
            DataKind::Values => f.write_str("values"),
        }
    }
}

/// Scaling modes for a `Scaler`, loadable from JSON.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScalerConfig {
    #[serde(default)]
    pub param_type: ScalingType,
    #[serde(default)]
    pub value_type: ScalingType,
}

impl ScalerConfig {
    pub fn new(param_type: ScalingType, value_type: ScalingType) -> Self {
        Self {
            param_type,
            value_type,
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
