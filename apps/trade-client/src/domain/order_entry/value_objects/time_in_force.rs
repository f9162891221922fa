//! TimeInForce (tag 59).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::enumerated::EnumeratedField;

/// How long an order remains active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TimeInForce {
    /// Day order - expires at end of trading day.
    Day,
    /// Immediate or cancel.
    Ioc,
    /// At the opening.
    Opg,
    /// Good till cancel.
    Gtc,
    /// Good till crossing.
    Gtx,
}

impl TimeInForce {
    /// Returns true if the order can rest on the book past the session.
    #[must_use]
    pub const fn persists_overnight(&self) -> bool {
        matches!(self, Self::Gtc)
    }
}

impl EnumeratedField for TimeInForce {
    const FIELD_NAME: &'static str = "TimeInForce";

    const ALL: &'static [Self] = &[Self::Day, Self::Ioc, Self::Opg, Self::Gtc, Self::Gtx];

    fn code(self) -> &'static str {
        match self {
            Self::Day => "0",
            Self::Gtc => "1",
            Self::Opg => "2",
            Self::Ioc => "3",
            Self::Gtx => "5",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Day => "Day",
            Self::Ioc => "IOC",
            Self::Opg => "OPG",
            Self::Gtc => "GTC",
            Self::Gtx => "GTX",
        }
    }
}

impl fmt::Display for TimeInForce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
