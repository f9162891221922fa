//! Per-version construction rules.
//!
//! Six entries, one per protocol version, drive the single message builder.

use super::value_objects::OrdType;
use crate::domain::fix::ProtocolVersion;

/// Where OrderQty is prompted relative to OrdType.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QtyPosition {
    /// Prompted after Side, before OrdType.
    BeforeOrdType,
    /// Prompted after OrdType.
    AfterOrdType,
}

/// Where TimeInForce is prompted relative to the price fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TifPosition {
    /// Prompted before Price and StopPx.
    BeforePrices,
    /// Prompted after Price and StopPx.
    AfterPrices,
}

/// How the routing identity is obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderStrategy {
    /// Prompt SenderCompID, TargetCompID and optionally TargetSubID.
    Interactive,
    /// Read SenderCompID and TargetCompID from the global settings.
    Configured,
}

/// Construction rules for one protocol version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionContract {
    /// Version this contract builds for.
    pub version: ProtocolVersion,
    /// OrderQty prompt position on order entry.
    pub qty_position: QtyPosition,
    /// Whether TransactTime is stamped on order entry and cancel.
    pub transact_time: bool,
    /// Whether Market orders carry Price = 0.
    pub market_price_zero: bool,
    /// TimeInForce prompt position on order entry.
    pub tif_position: TifPosition,
    /// CxlType written on cancel, if any.
    pub cxl_type: Option<&'static str>,
    /// Header population strategy.
    pub header: HeaderStrategy,
    /// Whether the market data test exists for this version.
    pub market_data: bool,
}

/// Fractional digits used for quantities and prices.
pub const DECIMAL_SCALE: u32 = 2;

/// HandlInst: automated execution, private, no broker intervention.
pub const HANDL_INST_AUTOMATED_PRIVATE: &str = "1";

/// CxlType used by FIX 4.0 cancels.
pub const CXL_TYPE_FULL: &str = "F";

/// Contract table in [`ProtocolVersion::ALL`] order.
pub static CONTRACTS: [VersionContract; 6] = [
    VersionContract {
        version: ProtocolVersion::Fix40,
        qty_position: QtyPosition::BeforeOrdType,
        transact_time: false,
        market_price_zero: false,
        tif_position: TifPosition::AfterPrices,
        cxl_type: Some(CXL_TYPE_FULL),
        header: HeaderStrategy::Interactive,
        market_data: false,
    },
    VersionContract {
        version: ProtocolVersion::Fix41,
        qty_position: QtyPosition::AfterOrdType,
        transact_time: false,
        market_price_zero: false,
        tif_position: TifPosition::AfterPrices,
        cxl_type: None,
        header: HeaderStrategy::Interactive,
        market_data: false,
    },
    VersionContract {
        version: ProtocolVersion::Fix42,
        qty_position: QtyPosition::AfterOrdType,
        transact_time: true,
        market_price_zero: true,
        tif_position: TifPosition::AfterPrices,
        cxl_type: None,
        header: HeaderStrategy::Configured,
        market_data: true,
    },
    VersionContract {
        version: ProtocolVersion::Fix43,
        qty_position: QtyPosition::AfterOrdType,
        transact_time: true,
        market_price_zero: false,
        tif_position: TifPosition::AfterPrices,
        cxl_type: None,
        header: HeaderStrategy::Interactive,
        market_data: true,
    },
    VersionContract {
        version: ProtocolVersion::Fix44,
        qty_position: QtyPosition::AfterOrdType,
        transact_time: true,
        market_price_zero: false,
        tif_position: TifPosition::AfterPrices,
        cxl_type: None,
        header: HeaderStrategy::Interactive,
        market_data: true,
    },
    VersionContract {
        version: ProtocolVersion::Fixt11,
        qty_position: QtyPosition::AfterOrdType,
        transact_time: true,
        market_price_zero: false,
        tif_position: TifPosition::BeforePrices,
        cxl_type: None,
        header: HeaderStrategy::Interactive,
        market_data: true,
    },
];

impl VersionContract {
    /// Contract for a version.
    #[must_use]
    pub fn for_version(version: ProtocolVersion) -> &'static Self {
        match version {
            ProtocolVersion::Fix40 => &CONTRACTS[0],
            ProtocolVersion::Fix41 => &CONTRACTS[1],
            ProtocolVersion::Fix42 => &CONTRACTS[2],
            ProtocolVersion::Fix43 => &CONTRACTS[3],
            ProtocolVersion::Fix44 => &CONTRACTS[4],
            ProtocolVersion::Fixt11 => &CONTRACTS[5],
        }
    }

    /// Whether an order of this type carries Price under this contract.
    #[must_use]
    pub const fn carries_price(&self, ord_type: OrdType) -> bool {
        ord_type.requires_limit_price() || (ord_type.is_market() && self.market_price_zero)
    }
}
