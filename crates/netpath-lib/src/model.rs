use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Longest device name accepted, in characters.
pub const MAX_NAME_LEN: usize = 30;

/// A network device. Identity is the name alone; `id` is carried through
/// untouched for callers that track a storage key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Device {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

impl Device {
    /// Device with a name and no storage identifier.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: None,
        }
    }

    /// Device with both a name and a storage identifier.
    pub fn with_id(name: impl Into<String>, id: i64) -> Self {
        Self {
            name: name.into(),
            id: Some(id),
        }
    }
}

impl PartialEq for Device {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Device {}

impl Hash for Device {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A weighted connection from `src` to `dst`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub src: String,
    pub dst: String,
    pub cost: f64,
}

impl Edge {
    pub fn new(src: impl Into<String>, dst: impl Into<String>, cost: f64) -> Self {
        Self {
            src: src.into(),
            dst: dst.into(),
            cost,
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.src, self.dst, self.cost)
    }
}

/// Any shape a device declaration may arrive in.
///
/// JSON input decodes a bare string as [`DeviceLike::Name`] and an object
/// `{"name": .., "id": ..}` as [`DeviceLike::Record`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DeviceLike {
    Name(String),
    Record(Device),
}

impl DeviceLike {
    /// Coerce into a canonical [`Device`], checking the name.
    pub fn into_device(self) -> Result<Device, ValidationError> {
        let device = match self {
            DeviceLike::Name(name) => Device::new(name),
            DeviceLike::Record(device) => device,
        };
        check_name(&device.name)?;
        Ok(device)
    }
}

impl From<&str> for DeviceLike {
    fn from(name: &str) -> Self {
        DeviceLike::Name(name.to_string())
    }
}

impl From<String> for DeviceLike {
    fn from(name: String) -> Self {
        DeviceLike::Name(name)
    }
}

impl From<Device> for DeviceLike {
    fn from(device: Device) -> Self {
        DeviceLike::Record(device)
    }
}

impl From<&Device> for DeviceLike {
    fn from(device: &Device) -> Self {
        DeviceLike::Record(device.clone())
    }
}

/// Any shape a connection declaration may arrive in.
///
/// JSON input decodes a three element array `["A", "B", 3]` as
/// [`EdgeLike::Tuple`] and an object `{"src", "dst", "cost"}` as
/// [`EdgeLike::Record`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum EdgeLike {
    Tuple(String, String, f64),
    Record(Edge),
}

impl EdgeLike {
    /// Coerce into a canonical [`Edge`].
    ///
    /// Fails on a negative cost first, then on a self-loop, then on an
    /// invalid endpoint name.
    pub fn into_edge(self) -> Result<Edge, ValidationError> {
        let edge = match self {
            EdgeLike::Tuple(src, dst, cost) => Edge { src, dst, cost },
            EdgeLike::Record(edge) => edge,
        };

        if edge.cost.is_nan() || edge.cost < 0.0 {
            return Err(ValidationError::NegativeCost { edge });
        }
        if edge.src == edge.dst {
            return Err(ValidationError::SelfLoop { edge });
        }
        check_name(&edge.src)?;
        check_name(&edge.dst)?;
        Ok(edge)
    }
}

impl From<(&str, &str, f64)> for EdgeLike {
    fn from((src, dst, cost): (&str, &str, f64)) -> Self {
        EdgeLike::Tuple(src.to_string(), dst.to_string(), cost)
    }
}

impl From<(String, String, f64)> for EdgeLike {
    fn from((src, dst, cost): (String, String, f64)) -> Self {
        EdgeLike::Tuple(src, dst, cost)
    }
}

impl From<Edge> for EdgeLike {
    fn from(edge: Edge) -> Self {
        EdgeLike::Record(edge)
    }
}

impl From<&Edge> for EdgeLike {
    fn from(edge: &Edge) -> Self {
        EdgeLike::Record(edge.clone())
    }
}

fn check_name(name: &str) -> Result<(), ValidationError> {
    let len = name.chars().count();
    if len == 0 || len > MAX_NAME_LEN {
        return Err(ValidationError::InvalidName {
            name: name.to_string(),
        });
    }
    Ok(())
}
