//! Fields every topology element shares regardless of product

use super::error::ExpandError;
use super::state::{Block, ResourceState, Scalar};
use crate::api::models::{SizeResource, TopologySize};
use tfplug::types::AttributePath;

pub(crate) const DEFAULT_ZONE_COUNT: i32 = 1;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TopologyCommon {
    pub zone_count: i32,
    pub instance_configuration_id: Option<String>,
    pub size: Option<TopologySize>,
}

impl TopologyCommon {
    pub fn expand<S: ResourceState + ?Sized>(
        topology: &Block<'_, S>,
    ) -> Result<Self, ExpandError> {
        Ok(Self {
            zone_count: expand_zone_count(topology)?,
            instance_configuration_id: topology.string("instance_configuration_id")?,
            size: expand_size(topology)?,
        })
    }
}

fn expand_zone_count<S: ResourceState + ?Sized>(
    topology: &Block<'_, S>,
) -> Result<i32, ExpandError> {
    let Some(raw) = topology.number("zone_count")? else {
        return Ok(DEFAULT_ZONE_COUNT);
    };
    if raw.fract() != 0.0 || raw < 1.0 || raw > i32::MAX as f64 {
        return Err(ExpandError::schema(
            topology.attr_path("zone_count"),
            format!("zone_count must be a whole number greater than 0, got {}", raw),
        ));
    }
    Ok(raw as i32)
}

fn expand_size<S: ResourceState + ?Sized>(
    topology: &Block<'_, S>,
) -> Result<Option<TopologySize>, ExpandError> {
    let Some(size) = topology.single("size")? else {
        return Ok(None);
    };

    let resource = match size.string("resource")? {
        Some(raw) => raw
            .parse::<SizeResource>()
            .map_err(|message| ExpandError::schema(size.attr_path("resource"), message))?,
        None => SizeResource::default(),
    };

    let value_path = size.attr_path("value");
    let value = match size.scalar("value")? {
        Some(raw) => parse_size_value(&value_path, raw)?,
        None => return Err(ExpandError::schema(value_path, "size value is required")),
    };

    Ok(Some(TopologySize {
        resource: resource.to_string(),
        value,
    }))
}

/// Accepts a plain number of megabytes or a string such as `"2048"`,
/// `"512m"`, `"2g"` or `"0.5g"`.
fn parse_size_value(path: &AttributePath, raw: Scalar) -> Result<i32, ExpandError> {
    let megabytes = match raw {
        Scalar::Number(n) => n,
        Scalar::String(s) => parse_size_string(&s).ok_or_else(|| {
            ExpandError::schema(
                path.clone(),
                format!(
                    "'{}' is not a valid size, expected a number optionally suffixed with g or m",
                    s
                ),
            )
        })?,
        Scalar::Bool(_) => {
            return Err(ExpandError::schema(
                path.clone(),
                "expected number or string, got bool",
            ))
        }
    };

    if !megabytes.is_finite() || megabytes < 0.0 || megabytes.fract() != 0.0 {
        return Err(ExpandError::schema(
            path.clone(),
            format!("size must be a non-negative whole number, got {}", megabytes),
        ));
    }
    if megabytes > i32::MAX as f64 {
        return Err(ExpandError::schema(
            path.clone(),
            format!("size {} exceeds the maximum of {}", megabytes, i32::MAX),
        ));
    }
    Ok(megabytes as i32)
}

fn parse_size_string(raw: &str) -> Option<f64> {
    let lower = raw.trim().to_ascii_lowercase();
    let (digits, multiplier) = if let Some(d) = lower
        .strip_suffix("gb")
        .or_else(|| lower.strip_suffix('g'))
    {
        (d, 1024.0)
    } else if let Some(d) = lower
        .strip_suffix("mb")
        .or_else(|| lower.strip_suffix('m'))
    {
        (d, 1.0)
    } else {
        (lower.as_str(), 1.0)
    };
    let number = digits.trim().parse::<f64>().ok()?;
    Some(number * multiplier)
}
