//! Insurance product types and their tariff factors

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of insurable products
///
/// Wire names are the lowercase English variants; the Spanish values the
/// original form submitted (`vida`, `salud`, `auto`, `hogar`) are accepted
/// as input aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsuranceType {
    /// Life insurance (seguro de vida)
    #[serde(alias = "vida")]
    Life,
    /// Health insurance (seguro de salud)
    #[serde(alias = "salud")]
    Health,
    /// Auto insurance (seguro de auto)
    Auto,
    /// Home insurance (seguro de hogar)
    #[serde(alias = "hogar")]
    Home,
}

impl InsuranceType {
    /// Returns the tariff multiplier for this product
    pub fn factor(&self) -> Decimal {
        match self {
            InsuranceType::Life => dec!(1.2),
            InsuranceType::Health => dec!(1.5),
            InsuranceType::Auto => dec!(1.3),
            InsuranceType::Home => dec!(0.9),
        }
    }

    /// Returns all product types, in form display order
    pub fn all() -> [InsuranceType; 4] {
        [
            InsuranceType::Life,
            InsuranceType::Health,
            InsuranceType::Auto,
            InsuranceType::Home,
        ]
    }

    /// Returns the Spanish display label used by the form
    pub fn label_es(&self) -> &'static str {
        match self {
            InsuranceType::Life => "Seguro de Vida",
            InsuranceType::Health => "Seguro de Salud",
            InsuranceType::Auto => "Seguro de Auto",
            InsuranceType::Home => "Seguro de Hogar",
        }
    }
}

impl fmt::Display for InsuranceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InsuranceType::Life => "life",
            InsuranceType::Health => "health",
            InsuranceType::Auto => "auto",
            InsuranceType::Home => "home",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factors() {
        assert_eq!(InsuranceType::Life.factor(), dec!(1.2));
        assert_eq!(InsuranceType::Health.factor(), dec!(1.5));
        assert_eq!(InsuranceType::Auto.factor(), dec!(1.3));
        assert_eq!(InsuranceType::Home.factor(), dec!(0.9));
    }

    #[test]
    fn test_spanish_aliases_deserialize() {
        let vida: InsuranceType = serde_json::from_str("\"vida\"").unwrap();
        assert_eq!(vida, InsuranceType::Life);

        let salud: InsuranceType = serde_json::from_str("\"salud\"").unwrap();
        assert_eq!(salud, InsuranceType::Health);

        let hogar: InsuranceType = serde_json::from_str("\"hogar\"").unwrap();
        assert_eq!(hogar, InsuranceType::Home);
    }

    #[test]
    fn test_english_names_round_trip() {
        for ty in InsuranceType::all() {
            let json = serde_json::to_string(&ty).unwrap();
            let back: InsuranceType = serde_json::from_str(&json).unwrap();
            assert_eq!(back, ty);
        }
    }
}
