use serde::{Deserialize, Serialize};

/// How a [`Discount`] value is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountKind {
    #[default]
    Percentage,
    Flat,
}

impl DiscountKind {
    /// Short label shown next to a committed discount value.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            DiscountKind::Percentage => "% Off",
            DiscountKind::Flat => "Flat Off",
        }
    }
}

impl std::fmt::Display for DiscountKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiscountKind::Percentage => write!(f, "percentage"),
            DiscountKind::Flat => write!(f, "flat"),
        }
    }
}

/// A discount attached to a product or to one of its variants.
///
/// Serialized as `{"type": "percentage" | "flat", "value": <number>}`.
/// `value` is whatever the merchant typed; no range is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Discount {
    #[serde(rename = "type")]
    pub kind: DiscountKind,
    pub value: f64,
}

impl Discount {
    #[must_use]
    pub fn percentage(value: f64) -> Self {
        Self {
            kind: DiscountKind::Percentage,
            value,
        }
    }

    #[must_use]
    pub fn flat(value: f64) -> Self {
        Self {
            kind: DiscountKind::Flat,
            value,
        }
    }
}

impl std::fmt::Display for Discount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            DiscountKind::Percentage => write!(f, "{}% Off", self.value),
            DiscountKind::Flat => write!(f, "{} Flat Off", self.value),
        }
    }
}
