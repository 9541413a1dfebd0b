//! Stock levels and UI preferences.

use serde::{Deserialize, Serialize};

/// Stock badge shown next to a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StockBadge {
    /// Nothing left on the shelf.
    NoStock,
    /// Below the low-stock boundary; flagged for attention.
    Low,
    #[default]
    Normal,
    /// Above the high-stock boundary.
    High,
}

impl StockBadge {
    /// Human-readable badge label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NoStock => "Sin stock",
            Self::Low => "Stock bajo",
            Self::Normal => "Normal",
            Self::High => "Stock alto",
        }
    }

    /// CSS class suffix for the badge.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::NoStock => "stock-none",
            Self::Low => "stock-low",
            Self::Normal => "stock-normal",
            Self::High => "stock-high",
        }
    }

    /// Whether this badge counts towards the low-stock figure.
    #[must_use]
    pub const fn needs_attention(self) -> bool {
        matches!(self, Self::NoStock | Self::Low)
    }
}

/// How a product line classifies stock quantities.
///
/// Each product line carries its own policy; the two are deliberately not
/// merged into one threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StockPolicy {
    /// Single boundary: anything strictly below `below` is low.
    Threshold { below: i64 },
    /// Three tiers: `<= 0` no stock, `< low_below` low, `> high_above` high.
    Tiered { low_below: i64, high_above: i64 },
}

impl StockPolicy {
    /// Policy of the classic inventory line.
    pub const CLASSIC: Self = Self::Threshold { below: 10 };

    /// Policy of the ledger inventory line.
    pub const TIERED: Self = Self::Tiered {
        low_below: 5,
        high_above: 50,
    };

    /// Classify a quantity.
    #[must_use]
    pub const fn badge(&self, quantity: i64) -> StockBadge {
        match *self {
            Self::Threshold { below } => {
                if quantity < below {
                    StockBadge::Low
                } else {
                    StockBadge::Normal
                }
            }
            Self::Tiered {
                low_below,
                high_above,
            } => {
                if quantity <= 0 {
                    StockBadge::NoStock
                } else if quantity < low_below {
                    StockBadge::Low
                } else if quantity > high_above {
                    StockBadge::High
                } else {
                    StockBadge::Normal
                }
            }
        }
    }

    /// Whether a quantity counts as low stock under this policy.
    #[must_use]
    pub const fn is_low(&self, quantity: i64) -> bool {
        self.badge(quantity).needs_attention()
    }
}

/// Two-valued UI theme preference.
///
/// Persisted as `"claro"` / `"oscuro"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Theme {
    #[default]
    #[serde(rename = "claro")]
    Light,
    #[serde(rename = "oscuro")]
    Dark,
}

impl Theme {
    /// The persisted string value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "claro",
            Self::Dark => "oscuro",
        }
    }

    /// The other theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Read a stored value; absent or unknown values fall back to light.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "claro" | "light" => Ok(Self::Light),
            "oscuro" | "dark" => Ok(Self::Dark),
            _ => Err(format!("invalid theme: {s}")),
        }
    }
}
