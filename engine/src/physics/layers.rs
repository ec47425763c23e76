//! Collision layer filtering.

use serde::{Deserialize, Serialize};

/// Bit set of collision layers, one bit per layer index (0..32).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayerMask(pub u32);

impl LayerMask {
    /// Matches nothing.
    pub const NONE: LayerMask = LayerMask(0);
    /// Matches every layer.
    pub const ALL: LayerMask = LayerMask(u32::MAX);

    /// Mask containing only `layer`. Indices past 31 yield an empty mask.
    pub fn layer(layer: u32) -> Self {
        LayerMask(1u32.checked_shl(layer).unwrap_or(0))
    }

    /// Mask containing every layer in `layers`.
    pub fn from_layers(layers: &[u32]) -> Self {
        layers
            .iter()
            .fold(Self::NONE, |mask, &layer| mask.with(layer))
    }

    /// This mask with `layer` added.
    pub fn with(self, layer: u32) -> Self {
        LayerMask(self.0 | Self::layer(layer).0)
    }

    /// Whether `layer` is part of this mask.
    #[inline]
    pub fn contains(self, layer: u32) -> bool {
        self.0 & Self::layer(layer).0 != 0
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}
