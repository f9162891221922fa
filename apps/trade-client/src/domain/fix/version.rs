//! Supported FIX protocol versions.

use std::fmt;

/// ApplVerID value for the FIX 5.0 application schema.
pub const APPL_VER_ID_FIX50: &str = "7";

/// FIX protocol version, identified on the wire by its BeginString.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProtocolVersion {
    /// FIX 4.0.
    Fix40,
    /// FIX 4.1.
    Fix41,
    /// FIX 4.2.
    Fix42,
    /// FIX 4.3.
    Fix43,
    /// FIX 4.4.
    Fix44,
    /// FIXT 1.1 transport carrying FIX 5.0 application messages.
    Fixt11,
}

impl ProtocolVersion {
    /// All versions, oldest first.
    pub const ALL: [Self; 6] = [
        Self::Fix40,
        Self::Fix41,
        Self::Fix42,
        Self::Fix43,
        Self::Fix44,
        Self::Fixt11,
    ];

    /// Parse a BeginString. Returns `None` for anything unrecognised.
    #[must_use]
    pub fn from_begin_string(begin_string: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|version| version.begin_string() == begin_string)
    }

    /// The BeginString (tag 8) value.
    #[must_use]
    pub const fn begin_string(&self) -> &'static str {
        match self {
            Self::Fix40 => "FIX.4.0",
            Self::Fix41 => "FIX.4.1",
            Self::Fix42 => "FIX.4.2",
            Self::Fix43 => "FIX.4.3",
            Self::Fix44 => "FIX.4.4",
            Self::Fixt11 => "FIXT.1.1",
        }
    }

    /// Label shown in the version menu.
    #[must_use]
    pub const fn menu_label(&self) -> &'static str {
        match self {
            Self::Fixt11 => "FIXT.1.1 (FIX.5.0)",
            other => other.begin_string(),
        }
    }

    /// ApplVerID for versions whose transport is separate from the
    /// application schema.
    #[must_use]
    pub const fn appl_ver_id(&self) -> Option<&'static str> {
        match self {
            Self::Fixt11 => Some(APPL_VER_ID_FIX50),
            _ => None,
        }
    }

    /// Whether execution reports for this version still carry ExecTransType.
    #[must_use]
    pub const fn uses_exec_trans_type(&self) -> bool {
        matches!(self, Self::Fix40 | Self::Fix41 | Self::Fix42)
    }
}

impl fmt::Display for ProtocolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.begin_string())
    }
}
