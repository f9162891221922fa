//! Intent to message encoding under a version contract.
//!
//! Body fields are written in prompt order. The header carries only
//! BeginString, MsgType and ApplVerID; routing identity is added by the
//! caller.

use chrono::{DateTime, Utc};

use super::contracts::{
    DECIMAL_SCALE, HANDL_INST_AUTOMATED_PRIVATE, QtyPosition, TifPosition, VersionContract,
};
use super::intents::{CancelIntent, MarketDataIntent, OrderIntent};
use super::value_objects::EnumeratedField;
use crate::domain::errors::DomainError;
use crate::domain::fix::{FieldMap, Message, Tag, msg_type};

/// Encode a NewOrderSingle (`D`).
///
/// # Errors
///
/// Returns [`DomainError::InvariantViolation`] when Price or StopPx presence
/// does not match the order type under this contract.
pub fn encode_order(
    contract: &VersionContract,
    intent: &OrderIntent,
    transact_time: DateTime<Utc>,
) -> Result<Message, DomainError> {
    check_order_invariants(contract, intent)?;

    let mut message = Message::new(contract.version, msg_type::NEW_ORDER_SINGLE);
    let body = &mut message.body;

    body.set_string(Tag::CL_ORD_ID, &intent.cl_ord_id)
        .set_string(Tag::HANDL_INST, HANDL_INST_AUTOMATED_PRIVATE)
        .set_string(Tag::SYMBOL, &intent.symbol)
        .set_string(Tag::SIDE, intent.side.code());

    if contract.qty_position == QtyPosition::BeforeOrdType {
        body.set_decimal(Tag::ORDER_QTY, intent.order_qty, DECIMAL_SCALE);
    }
    body.set_string(Tag::ORD_TYPE, intent.ord_type.code());
    if contract.qty_position == QtyPosition::AfterOrdType {
        body.set_decimal(Tag::ORDER_QTY, intent.order_qty, DECIMAL_SCALE);
    }

    if contract.tif_position == TifPosition::BeforePrices {
        body.set_string(Tag::TIME_IN_FORCE, intent.time_in_force.code());
    }
    if let Some(price) = intent.price {
        body.set_decimal(Tag::PRICE, price, DECIMAL_SCALE);
    }
    if let Some(stop_px) = intent.stop_px {
        body.set_decimal(Tag::STOP_PX, stop_px, DECIMAL_SCALE);
    }
    if contract.tif_position == TifPosition::AfterPrices {
        body.set_string(Tag::TIME_IN_FORCE, intent.time_in_force.code());
    }

    if contract.transact_time {
        body.set_time(Tag::TRANSACT_TIME, &transact_time);
    }

    Ok(message)
}

/// Encode an OrderCancelRequest (`F`).
#[must_use]
pub fn encode_cancel(
    contract: &VersionContract,
    intent: &CancelIntent,
    transact_time: DateTime<Utc>,
) -> Message {
    let mut message = Message::new(contract.version, msg_type::ORDER_CANCEL_REQUEST);
    let body = &mut message.body;

    body.set_string(Tag::ORIG_CL_ORD_ID, &intent.orig_cl_ord_id)
        .set_string(Tag::CL_ORD_ID, &intent.cl_ord_id);
    if let Some(cxl_type) = contract.cxl_type {
        body.set_string(Tag::CXL_TYPE, cxl_type);
    }
    body.set_string(Tag::SYMBOL, &intent.symbol)
        .set_string(Tag::SIDE, intent.side.code());
    if contract.transact_time {
        body.set_time(Tag::TRANSACT_TIME, &transact_time);
    }
    body.set_decimal(Tag::ORDER_QTY, intent.order_qty, DECIMAL_SCALE);

    message
}

/// Encode a MarketDataRequest (`V`).
///
/// # Errors
///
/// Returns [`DomainError::UnsupportedMessage`] for versions without the
/// market data test.
pub fn encode_market_data(
    contract: &VersionContract,
    intent: &MarketDataIntent,
) -> Result<Message, DomainError> {
    if !contract.market_data {
        return Err(DomainError::UnsupportedMessage {
            version: contract.version,
            msg_type: msg_type::MARKET_DATA_REQUEST,
        });
    }

    let mut message = Message::new(contract.version, msg_type::MARKET_DATA_REQUEST);

    let entry_types = intent
        .md_entry_types
        .iter()
        .map(|entry_type| {
            let mut entry = FieldMap::new();
            entry.set_string(Tag::MD_ENTRY_TYPE, entry_type);
            entry
        })
        .collect();
    let related = intent
        .symbols
        .iter()
        .map(|symbol| {
            let mut entry = FieldMap::new();
            entry.set_string(Tag::SYMBOL, symbol);
            entry
        })
        .collect();

    message
        .body
        .set_string(Tag::MD_REQ_ID, &intent.md_req_id)
        .set_string(
            Tag::SUBSCRIPTION_REQUEST_TYPE,
            &intent.subscription_request_type,
        )
        .set_int(Tag::MARKET_DEPTH, intent.market_depth)
        .set_group(Tag::NO_MD_ENTRY_TYPES, entry_types)
        .set_group(Tag::NO_RELATED_SYM, related);

    Ok(message)
}

fn check_order_invariants(
    contract: &VersionContract,
    intent: &OrderIntent,
) -> Result<(), DomainError> {
    let ord_type = intent.ord_type;

    if contract.carries_price(ord_type) != intent.price.is_some() {
        return Err(DomainError::invariant(
            "Price present iff OrdType is Limit or StopLimit, or Market under the zero-price rule",
            format!("OrdType={ord_type}, Price={:?}", intent.price),
        ));
    }
    if ord_type.is_market() && intent.price.is_some_and(|price| !price.is_zero()) {
        return Err(DomainError::invariant(
            "Market orders carry Price = 0",
            format!("Price={:?}", intent.price),
        ));
    }
    if ord_type.requires_stop_price() != intent.stop_px.is_some() {
        return Err(DomainError::invariant(
            "StopPx present iff OrdType is Stop or StopLimit",
            format!("OrdType={ord_type}, StopPx={:?}", intent.stop_px),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fix::ProtocolVersion;
    use crate::domain::order_entry::value_objects::{OrdType, Side, TimeInForce};
    use chrono::TimeZone;
    use rust_decimal::Decimal;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 14, 30, 5).unwrap()
    }

    fn limit_order() -> OrderIntent {
        OrderIntent {
            cl_ord_id: "ORD1".to_string(),
            symbol: "AAPL".to_string(),
            side: Side::Buy,
            ord_type: OrdType::Limit,
            order_qty: Decimal::new(100, 0),
            price: Some(Decimal::new(15_050, 2)),
            stop_px: None,
            time_in_force: TimeInForce::Day,
        }
    }

    fn body_tags(message: &Message) -> Vec<u32> {
        message.body.tags().map(Tag::number).collect()
    }

    #[test]
    fn fix44_limit_order() {
        let contract = VersionContract::for_version(ProtocolVersion::Fix44);
        let message = encode_order(contract, &limit_order(), now()).unwrap();

        assert_eq!(message.msg_type(), Ok("D"));
        assert_eq!(body_tags(&message), vec![11, 21, 55, 54, 40, 38, 44, 59, 60]);
        assert_eq!(message.body.get_string(Tag::ORDER_QTY), Ok("100.00"));
        assert_eq!(message.body.get_string(Tag::PRICE), Ok("150.50"));
        assert_eq!(message.body.get_string(Tag::HANDL_INST), Ok("1"));
        assert_eq!(
            message.body.get_string(Tag::TRANSACT_TIME),
            Ok("20240315-14:30:05.000")
        );
    }

    #[test]
    fn fix40_puts_qty_before_ord_type_without_transact_time() {
        let contract = VersionContract::for_version(ProtocolVersion::Fix40);
        let message = encode_order(contract, &limit_order(), now()).unwrap();

        assert_eq!(body_tags(&message), vec![11, 21, 55, 54, 38, 40, 44, 59]);
    }

    #[test]
    fn fixt_puts_tif_before_prices() {
        let contract = VersionContract::for_version(ProtocolVersion::Fixt11);
        let mut intent = limit_order();
        intent.ord_type = OrdType::StopLimit;
        intent.stop_px = Some(Decimal::new(149, 0));
        let message = encode_order(contract, &intent, now()).unwrap();

        assert_eq!(body_tags(&message), vec![11, 21, 55, 54, 40, 38, 59, 44, 99, 60]);
        assert_eq!(message.header.get_string(Tag::APPL_VER_ID), Ok("7"));
        assert_eq!(message.body.get_string(Tag::STOP_PX), Ok("149.00"));
    }

    #[test]
    fn fix42_market_order_carries_zero_price() {
        let contract = VersionContract::for_version(ProtocolVersion::Fix42);
        let mut intent = limit_order();
        intent.ord_type = OrdType::Market;
        intent.price = Some(Decimal::ZERO);
        let message = encode_order(contract, &intent, now()).unwrap();

        assert_eq!(message.body.get_string(Tag::PRICE), Ok("0.00"));
    }

    #[test]
    fn market_price_rejected_outside_zero_rule() {
        let contract = VersionContract::for_version(ProtocolVersion::Fix44);
        let mut intent = limit_order();
        intent.ord_type = OrdType::Market;
        intent.price = Some(Decimal::ZERO);

        assert!(matches!(
            encode_order(contract, &intent, now()),
            Err(DomainError::InvariantViolation { .. })
        ));
    }

    #[test]
    fn nonzero_market_price_rejected() {
        let contract = VersionContract::for_version(ProtocolVersion::Fix42);
        let mut intent = limit_order();
        intent.ord_type = OrdType::Market;

        assert!(matches!(
            encode_order(contract, &intent, now()),
            Err(DomainError::InvariantViolation { .. })
        ));
    }

    #[test]
    fn missing_stop_px_rejected() {
        let contract = VersionContract::for_version(ProtocolVersion::Fix43);
        let mut intent = limit_order();
        intent.ord_type = OrdType::Stop;
        intent.price = None;

        assert!(matches!(
            encode_order(contract, &intent, now()),
            Err(DomainError::InvariantViolation { .. })
        ));
    }

    #[test]
    fn fix40_cancel_carries_cxl_type() {
        let intent = CancelIntent {
            orig_cl_ord_id: "ORD1".to_string(),
            cl_ord_id: "CXL1".to_string(),
            symbol: "AAPL".to_string(),
            side: Side::Sell,
            order_qty: Decimal::new(25, 0),
        };
        let fix40 = encode_cancel(
            VersionContract::for_version(ProtocolVersion::Fix40),
            &intent,
            now(),
        );
        let fix44 = encode_cancel(
            VersionContract::for_version(ProtocolVersion::Fix44),
            &intent,
            now(),
        );

        assert_eq!(fix40.msg_type(), Ok("F"));
        assert_eq!(body_tags(&fix40), vec![41, 11, 125, 55, 54, 38]);
        assert_eq!(fix40.body.get_string(Tag::CXL_TYPE), Ok("F"));
        assert_eq!(body_tags(&fix44), vec![41, 11, 55, 54, 60, 38]);
        assert_eq!(fix44.body.get_string(Tag::ORDER_QTY), Ok("25.00"));
    }

    #[test]
    fn market_data_request_groups() {
        let contract = VersionContract::for_version(ProtocolVersion::Fix43);
        let message = encode_market_data(contract, &MarketDataIntent::default()).unwrap();

        assert_eq!(message.msg_type(), Ok("V"));
        assert_eq!(message.body.get_string(Tag::MD_REQ_ID), Ok("MARKETDATAID"));
        assert_eq!(message.body.get_int(Tag::MARKET_DEPTH), Ok(0));
        let symbols = message.body.group(Tag::NO_RELATED_SYM).unwrap();
        assert_eq!(symbols[0].get_string(Tag::SYMBOL), Ok("LNUX"));
        let entries = message.body.group(Tag::NO_MD_ENTRY_TYPES).unwrap();
        assert_eq!(entries[0].get_string(Tag::MD_ENTRY_TYPE), Ok("0"));
    }

    #[test]
    fn market_data_unsupported_before_fix42() {
        let contract = VersionContract::for_version(ProtocolVersion::Fix41);
        assert_eq!(
            encode_market_data(contract, &MarketDataIntent::default()),
            Err(DomainError::UnsupportedMessage {
                version: ProtocolVersion::Fix41,
                msg_type: "V",
            })
        );
    }
}
