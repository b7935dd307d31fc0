use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::Vec3;

/// Host-side object id (the engine's instance id of the item)
pub type ItemHandle = u32;

/// Identity class of an item. Two items stack iff their kinds are equal:
/// exact, case-sensitive, untrimmed string equality.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemKind(String);

impl ItemKind {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemKind {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ItemKind {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// An item as the hand/host presents it
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItemDescriptor {
    pub handle: ItemHandle,
    pub kind: ItemKind,
    #[serde(default = "unit_scale")]
    pub scale: Vec3,
    /// Extent of the item's largest render bound, used to fit it into a cell
    #[serde(default = "unit_scale")]
    pub bounds: Vec3,
    /// Host shader ids, one per renderer, in renderer order
    #[serde(default)]
    pub shaders: Vec<u32>,
}

fn unit_scale() -> Vec3 {
    Vec3::ONE
}

impl ItemDescriptor {
    pub fn new(handle: ItemHandle, kind: impl Into<ItemKind>) -> Self {
        Self {
            handle,
            kind: kind.into(),
            scale: Vec3::ONE,
            bounds: Vec3::ONE,
            shaders: Vec::new(),
        }
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_bounds(mut self, bounds: Vec3) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn with_shaders(mut self, shaders: Vec<u32>) -> Self {
        self.shaders = shaders;
        self
    }
}

/// One entry of a cell stack: the item plus what is needed to restore it
/// when it leaves the inventory.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoredItem {
    pub handle: ItemHandle,
    pub kind: ItemKind,
    pub original_scale: Vec3,
    pub original_bounds: Vec3,
    pub original_shaders: Vec<u32>,
}

impl From<ItemDescriptor> for StoredItem {
    fn from(item: ItemDescriptor) -> Self {
        Self {
            handle: item.handle,
            kind: item.kind,
            original_scale: item.scale,
            original_bounds: item.bounds,
            original_shaders: item.shaders,
        }
    }
}

impl From<StoredItem> for ItemDescriptor {
    fn from(item: StoredItem) -> Self {
        Self {
            handle: item.handle,
            kind: item.kind,
            scale: item.original_scale,
            bounds: item.original_bounds,
            shaders: item.original_shaders,
        }
    }
}

/// Axis the stored items and ghosts face inside a cell
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisDirection {
    PositiveX,
    PositiveY,
    #[default]
    PositiveZ,
    NegativeX,
    NegativeY,
    NegativeZ,
}

impl AxisDirection {
    /// Euler angles in degrees (host convention: pitch, yaw, roll)
    pub fn euler(self) -> Vec3 {
        match self {
            AxisDirection::PositiveX => Vec3::new(0.0, 90.0, 0.0),
            AxisDirection::PositiveY => Vec3::new(-90.0, 0.0, 0.0),
            AxisDirection::PositiveZ => Vec3::new(0.0, 0.0, 0.0),
            AxisDirection::NegativeX => Vec3::new(0.0, -90.0, 0.0),
            AxisDirection::NegativeY => Vec3::new(90.0, 0.0, 0.0),
            AxisDirection::NegativeZ => Vec3::new(0.0, -180.0, 0.0),
        }
    }

    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(AxisDirection::PositiveX),
            1 => Some(AxisDirection::PositiveY),
            2 => Some(AxisDirection::PositiveZ),
            3 => Some(AxisDirection::NegativeX),
            4 => Some(AxisDirection::NegativeY),
            5 => Some(AxisDirection::NegativeZ),
            _ => None,
        }
    }
}
