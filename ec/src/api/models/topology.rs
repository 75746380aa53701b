use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Size of one topology element, e.g. `{"resource": "memory", "value": 2048}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopologySize {
    pub resource: String,
    /// Megabytes for both resources; `"2g"` style strings in state are
    /// converted to megabytes before they get here. The API documents an int32.
    pub value: i32,
}

/// Units a topology size can be expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizeResource {
    #[default]
    Memory,
    Storage,
}

impl SizeResource {
    pub fn as_str(&self) -> &'static str {
        match self {
            SizeResource::Memory => "memory",
            SizeResource::Storage => "storage",
        }
    }
}

impl fmt::Display for SizeResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SizeResource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "memory" => Ok(SizeResource::Memory),
            "storage" => Ok(SizeResource::Storage),
            other => Err(format!(
                "unknown size resource '{}', expected 'memory' or 'storage'",
                other
            )),
        }
    }
}
