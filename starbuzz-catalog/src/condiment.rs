use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::beverage::Beverage;
use crate::error::CatalogError;
use crate::money::Price;
use crate::size::Size;

/// Add-ons that can be wrapped around any beverage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Condiment {
    Milk,
    Mocha,
    #[serde(alias = "soy-milk")]
    Soy,
    Whip,
}

impl Condiment {
    pub const ALL: [Condiment; 4] = [
        Condiment::Milk,
        Condiment::Mocha,
        Condiment::Soy,
        Condiment::Whip,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Condiment::Milk => "Milk",
            Condiment::Mocha => "Mocha",
            Condiment::Soy => "Soy",
            Condiment::Whip => "Whip",
        }
    }

    pub fn surcharge(self) -> Price {
        match self {
            Condiment::Milk => Price::from_cents(10),
            Condiment::Mocha => Price::from_cents(20),
            Condiment::Soy => Price::from_cents(15),
            Condiment::Whip => Price::from_cents(10),
        }
    }
}

impl fmt::Display for Condiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Condiment {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['_', ' '], "-").as_str() {
            "milk" => Ok(Condiment::Milk),
            "mocha" => Ok(Condiment::Mocha),
            "soy" | "soy-milk" => Ok(Condiment::Soy),
            "whip" => Ok(Condiment::Whip),
            _ => Err(CatalogError::UnknownCondiment(s.to_string())),
        }
    }
}

/// Wraps exactly one beverage, adding a condiment's surcharge and label.
///
/// Size has no meaning for a condiment, so both `size` and `set_size` go
/// straight to the wrapped beverage.
#[derive(Debug, Clone)]
pub struct CondimentDecorator<B> {
    condiment: Condiment,
    inner: B,
}

impl<B: Beverage> CondimentDecorator<B> {
    pub fn new(inner: B, condiment: Condiment) -> Self {
        Self { condiment, inner }
    }

    pub fn condiment(&self) -> Condiment {
        self.condiment
    }

    pub fn inner(&self) -> &B {
        &self.inner
    }
}

impl<B: Beverage> Beverage for CondimentDecorator<B> {
    fn description(&self) -> String {
        format!("{}, {}", self.inner.description(), self.condiment.label())
    }

    fn cost(&self) -> Price {
        self.inner.cost() + self.condiment.surcharge()
    }

    fn size(&self) -> Size {
        self.inner.size()
    }

    fn set_size(&mut self, size: Size) {
        self.inner.set_size(size)
    }
}
