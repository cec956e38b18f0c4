use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::beverage::Beverage;
use crate::error::CatalogError;
use crate::money::Price;
use crate::size::Size;

/// Base coffees on the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Roast {
    HouseBlend,
    DarkRoast,
    Decaf,
    Espresso,
}

/// How a roast is priced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pricing {
    /// Base price plus a per-size increment
    BySize { base: Price },
    /// Same price for every size
    Fixed(Price),
}

impl Pricing {
    pub fn price_for(self, size: Size) -> Price {
        match self {
            Pricing::BySize { base } => base + size_increment(size),
            Pricing::Fixed(price) => price,
        }
    }
}

fn size_increment(size: Size) -> Price {
    match size {
        Size::Tall => Price::from_cents(10),
        Size::Grande => Price::from_cents(15),
        Size::Venti => Price::from_cents(20),
    }
}

impl Roast {
    pub const ALL: [Roast; 4] = [
        Roast::HouseBlend,
        Roast::DarkRoast,
        Roast::Decaf,
        Roast::Espresso,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Roast::HouseBlend => "House Blend",
            Roast::DarkRoast => "Dark Roast",
            Roast::Decaf => "Decaf",
            Roast::Espresso => "Espresso",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Roast::HouseBlend => "house-blend",
            Roast::DarkRoast => "dark-roast",
            Roast::Decaf => "decaf",
            Roast::Espresso => "espresso",
        }
    }

    pub fn pricing(self) -> Pricing {
        match self {
            Roast::HouseBlend => Pricing::BySize {
                base: Price::from_cents(89),
            },
            Roast::DarkRoast => Pricing::Fixed(Price::from_cents(99)),
            Roast::Decaf => Pricing::Fixed(Price::from_cents(105)),
            Roast::Espresso => Pricing::Fixed(Price::from_cents(199)),
        }
    }
}

impl fmt::Display for Roast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Roast {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        Roast::ALL
            .into_iter()
            .find(|roast| roast.slug() == normalized)
            .ok_or_else(|| CatalogError::UnknownRoast(s.to_string()))
    }
}

/// A cup of one roast. The innermost item of every wrap chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coffee {
    roast: Roast,
    size: Size,
}

impl Coffee {
    /// A tall cup
    pub fn new(roast: Roast) -> Self {
        Self::sized(roast, Size::default())
    }

    pub fn sized(roast: Roast, size: Size) -> Self {
        Self { roast, size }
    }

    pub fn roast(&self) -> Roast {
        self.roast
    }
}

impl Beverage for Coffee {
    fn description(&self) -> String {
        self.roast.label().to_string()
    }

    fn cost(&self) -> Price {
        self.roast.pricing().price_for(self.size)
    }

    fn size(&self) -> Size {
        self.size
    }

    fn set_size(&mut self, size: Size) {
        self.size = size;
    }
}
