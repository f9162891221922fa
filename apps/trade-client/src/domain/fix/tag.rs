//! FIX tag numbers.
//!
//! Only the tags the client writes, or the loopback counterparty emits,
//! are named here.

use std::fmt;

/// A FIX field tag number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tag(u32);

impl Tag {
    // Standard header
    /// Tag 8 - BeginString.
    pub const BEGIN_STRING: Self = Self(8);
    /// Tag 35 - MsgType.
    pub const MSG_TYPE: Self = Self(35);
    /// Tag 49 - SenderCompID.
    pub const SENDER_COMP_ID: Self = Self(49);
    /// Tag 52 - SendingTime.
    pub const SENDING_TIME: Self = Self(52);
    /// Tag 56 - TargetCompID.
    pub const TARGET_COMP_ID: Self = Self(56);
    /// Tag 57 - TargetSubID.
    pub const TARGET_SUB_ID: Self = Self(57);
    /// Tag 1128 - ApplVerID (FIXT.1.1 payload schema).
    pub const APPL_VER_ID: Self = Self(1128);

    // Order entry
    /// Tag 11 - ClOrdID.
    pub const CL_ORD_ID: Self = Self(11);
    /// Tag 21 - HandlInst.
    pub const HANDL_INST: Self = Self(21);
    /// Tag 38 - OrderQty.
    pub const ORDER_QTY: Self = Self(38);
    /// Tag 40 - OrdType.
    pub const ORD_TYPE: Self = Self(40);
    /// Tag 41 - OrigClOrdID.
    pub const ORIG_CL_ORD_ID: Self = Self(41);
    /// Tag 44 - Price.
    pub const PRICE: Self = Self(44);
    /// Tag 54 - Side.
    pub const SIDE: Self = Self(54);
    /// Tag 55 - Symbol.
    pub const SYMBOL: Self = Self(55);
    /// Tag 59 - TimeInForce.
    pub const TIME_IN_FORCE: Self = Self(59);
    /// Tag 60 - TransactTime.
    pub const TRANSACT_TIME: Self = Self(60);
    /// Tag 99 - StopPx.
    pub const STOP_PX: Self = Self(99);
    /// Tag 125 - CxlType (FIX 4.0 only).
    pub const CXL_TYPE: Self = Self(125);

    // Execution reports
    /// Tag 6 - AvgPx.
    pub const AVG_PX: Self = Self(6);
    /// Tag 14 - CumQty.
    pub const CUM_QTY: Self = Self(14);
    /// Tag 17 - ExecID.
    pub const EXEC_ID: Self = Self(17);
    /// Tag 20 - ExecTransType (FIX 4.0 - 4.2).
    pub const EXEC_TRANS_TYPE: Self = Self(20);
    /// Tag 37 - OrderID.
    pub const ORDER_ID: Self = Self(37);
    /// Tag 39 - OrdStatus.
    pub const ORD_STATUS: Self = Self(39);
    /// Tag 150 - ExecType.
    pub const EXEC_TYPE: Self = Self(150);
    /// Tag 151 - LeavesQty.
    pub const LEAVES_QTY: Self = Self(151);

    // Market data
    /// Tag 146 - NoRelatedSym.
    pub const NO_RELATED_SYM: Self = Self(146);
    /// Tag 262 - MDReqID.
    pub const MD_REQ_ID: Self = Self(262);
    /// Tag 263 - SubscriptionRequestType.
    pub const SUBSCRIPTION_REQUEST_TYPE: Self = Self(263);
    /// Tag 264 - MarketDepth.
    pub const MARKET_DEPTH: Self = Self(264);
    /// Tag 267 - NoMDEntryTypes.
    pub const NO_MD_ENTRY_TYPES: Self = Self(267);
    /// Tag 268 - NoMDEntries.
    pub const NO_MD_ENTRIES: Self = Self(268);
    /// Tag 269 - MDEntryType.
    pub const MD_ENTRY_TYPE: Self = Self(269);
    /// Tag 270 - MDEntryPx.
    pub const MD_ENTRY_PX: Self = Self(270);

    // Session
    /// Tag 98 - EncryptMethod.
    pub const ENCRYPT_METHOD: Self = Self(98);
    /// Tag 108 - HeartBtInt.
    pub const HEART_BT_INT: Self = Self(108);

    /// Create a tag from its number.
    #[must_use]
    pub const fn new(number: u32) -> Self {
        Self(number)
    }

    /// The tag number.
    #[must_use]
    pub const fn number(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for Tag {
    fn from(number: u32) -> Self {
        Self(number)
    }
}
