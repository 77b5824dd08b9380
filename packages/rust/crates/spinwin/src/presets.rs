//! Built-in sector sets used to seed a fresh wheel.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::sector::Sector;

/// Named starting configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    /// Eight equally weighted promo sectors.
    #[default]
    Default,
    /// Discount tiers with skewed odds.
    Discounts,
}

impl Preset {
    /// String form used in settings and CLI.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Discounts => "discounts",
        }
    }

    /// Materialize the sector list.
    #[must_use]
    pub fn sectors(self) -> Vec<Sector> {
        match self {
            Self::Default => default_sectors(),
            Self::Discounts => discount_segments(),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "default" => Ok(Self::Default),
            "discounts" => Ok(Self::Discounts),
            other => Err(format!("unknown preset '{other}' (expected default|discounts)")),
        }
    }
}

/// Example sectors shown on a new wheel.
#[must_use]
pub fn default_sectors() -> Vec<Sector> {
    vec![
        Sector::new("10% OFF", "#FF6B6B", 1.0).with_discount(10),
        Sector::new("15% OFF", "#FFD93D", 1.0).with_discount(15),
        Sector::new("20% OFF", "#6A0572", 1.0).with_discount(20),
        Sector::new("25% OFF", "#007965", 1.0).with_discount(25),
        Sector::new("30% OFF", "#3ABEFF", 1.0).with_discount(30),
        Sector::new("FREE ITEM", "#F2545B", 1.0),
        Sector::new("5% OFF", "#56E39F", 1.0).with_discount(5),
        Sector::new("TRY AGAIN", "#A29BFE", 1.0),
    ]
}

/// Discount tiers; the weights already sum to one.
#[must_use]
pub fn discount_segments() -> Vec<Sector> {
    vec![
        Sector::new("10% Off", "#FF6B6B", 0.4).with_discount(10),
        Sector::new("50% Off", "#FFD93D", 0.1).with_discount(50),
        Sector::new("60% Off", "#6A0572", 0.15).with_discount(60),
        Sector::new("80% Off", "#007965", 0.04).with_discount(80),
        Sector::new("90% Off", "#3ABEFF", 0.01).with_discount(90),
        Sector::new("100% Off", "#F2545B", 0.0).with_discount(100),
        Sector::new("No Discount", "#A29BFE", 0.3).with_discount(0),
    ]
}
