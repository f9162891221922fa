//! Operator intents gathered by the prompts.

use rust_decimal::Decimal;

use super::value_objects::{OrdType, Side, TimeInForce};
use crate::domain::fix::{FieldMap, Tag};

/// MDReqID used by the market data test.
pub const MARKET_DATA_REQ_ID: &str = "MARKETDATAID";

/// Instrument requested by the market data test.
pub const MARKET_DATA_SYMBOL: &str = "LNUX";

/// SubscriptionRequestType snapshot.
pub const SUBSCRIPTION_SNAPSHOT: &str = "0";

/// MDEntryType bid.
pub const MD_ENTRY_BID: &str = "0";

/// A new single order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderIntent {
    /// Client order ID.
    pub cl_ord_id: String,
    /// Instrument symbol.
    pub symbol: String,
    /// Side.
    pub side: Side,
    /// Order type.
    pub ord_type: OrdType,
    /// Order quantity.
    pub order_qty: Decimal,
    /// Limit price, or zero for Market under the zero-price rule.
    pub price: Option<Decimal>,
    /// Stop price.
    pub stop_px: Option<Decimal>,
    /// Time in force.
    pub time_in_force: TimeInForce,
}

/// A cancel of a previously entered order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancelIntent {
    /// ClOrdID of the order being cancelled.
    pub orig_cl_ord_id: String,
    /// ClOrdID of this request.
    pub cl_ord_id: String,
    /// Instrument symbol.
    pub symbol: String,
    /// Side of the original order.
    pub side: Side,
    /// Quantity of the original order.
    pub order_qty: Decimal,
}

/// Fixed market data snapshot request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketDataIntent {
    /// Request ID.
    pub md_req_id: String,
    /// SubscriptionRequestType code.
    pub subscription_request_type: String,
    /// Book depth; zero is full book.
    pub market_depth: i64,
    /// MDEntryType codes requested.
    pub md_entry_types: Vec<String>,
    /// Instruments requested.
    pub symbols: Vec<String>,
}

impl Default for MarketDataIntent {
    fn default() -> Self {
        Self {
            md_req_id: MARKET_DATA_REQ_ID.to_string(),
            subscription_request_type: SUBSCRIPTION_SNAPSHOT.to_string(),
            market_depth: 0,
            md_entry_types: vec![MD_ENTRY_BID.to_string()],
            symbols: vec![MARKET_DATA_SYMBOL.to_string()],
        }
    }
}

/// Routing identity written into the standard header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderIdentity {
    /// SenderCompID.
    pub sender_comp_id: String,
    /// TargetCompID.
    pub target_comp_id: String,
    /// TargetSubID, only when the operator asked for one.
    pub target_sub_id: Option<String>,
}

impl HeaderIdentity {
    /// Write the identity into a message header.
    pub fn apply(&self, header: &mut FieldMap) {
        header
            .set_string(Tag::SENDER_COMP_ID, &self.sender_comp_id)
            .set_string(Tag::TARGET_COMP_ID, &self.target_comp_id);
        if let Some(sub_id) = &self.target_sub_id {
            header.set_string(Tag::TARGET_SUB_ID, sub_id);
        }
    }
}
