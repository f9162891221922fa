//! Side (tag 54).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::enumerated::EnumeratedField;

/// Side of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Side {
    /// Buy.
    Buy,
    /// Sell.
    Sell,
    /// Sell short.
    SellShort,
    /// Sell short exempt.
    SellShortExempt,
    /// Cross.
    Cross,
    /// Cross short.
    CrossShort,
    /// Cross short exempt.
    CrossShortExempt,
}

impl EnumeratedField for Side {
    const FIELD_NAME: &'static str = "Side";

    const ALL: &'static [Self] = &[
        Self::Buy,
        Self::Sell,
        Self::SellShort,
        Self::SellShortExempt,
        Self::Cross,
        Self::CrossShort,
        Self::CrossShortExempt,
    ];

    fn code(self) -> &'static str {
        match self {
            Self::Buy => "1",
            Self::Sell => "2",
            Self::SellShort => "5",
            Self::SellShortExempt => "6",
            Self::Cross => "8",
            Self::CrossShort => "9",
            Self::CrossShortExempt => "A",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Buy => "Buy",
            Self::Sell => "Sell",
            Self::SellShort => "Sell Short",
            Self::SellShortExempt => "Sell Short Exempt",
            Self::Cross => "Cross",
            Self::CrossShort => "Cross Short",
            Self::CrossShortExempt => "Cross Short Exempt",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_codes() {
        assert_eq!(
            Side::codes(),
            vec!["1", "2", "5", "6", "8", "9", "A"]
        );
    }

    #[test]
    fn side_from_code() {
        assert_eq!(Side::from_code("A"), Some(Side::CrossShortExempt));
        assert_eq!(Side::from_code("5"), Some(Side::SellShort));
        assert_eq!(Side::from_code("3"), None);
    }

    #[test]
    fn side_display() {
        assert_eq!(format!("{}", Side::SellShort), "Sell Short");
    }
}
