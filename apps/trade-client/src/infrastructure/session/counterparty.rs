//! Simulated counterparty replies.
//!
//! Accepts every order and cancel and answers the market data test with a
//! one-level bid.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::fix::{FieldMap, Message, ProtocolVersion, SessionId, Tag, msg_type};
use crate::domain::order_entry::DECIMAL_SCALE;

/// OrdStatus / ExecType New.
const STATUS_NEW: &str = "0";
/// OrdStatus / ExecType Canceled.
const STATUS_CANCELED: &str = "4";
/// ExecTransType New (FIX 4.0 - 4.2).
const EXEC_TRANS_NEW: &str = "0";
/// Bid price quoted by the market data reply.
const QUOTED_BID: Decimal = Decimal::from_parts(10_000, 0, 0, false, 2);

/// Session-layer message from `session`'s sender, addressed to its target.
#[must_use]
pub fn admin_message(
    version: ProtocolVersion,
    session: &SessionId,
    kind: &str,
    now: DateTime<Utc>,
) -> Message {
    let mut message = header(version, session, kind, now);
    if kind == msg_type::LOGON {
        message
            .body
            .set_int(Tag::ENCRYPT_METHOD, 0)
            .set_int(Tag::HEART_BT_INT, 30);
    }
    message
}

/// Counterparty reply to an application message, if it answers that type.
///
/// `session` is the request's session as the client sees it.
#[must_use]
pub fn reply(request: &Message, session: &SessionId, now: DateTime<Utc>) -> Option<Message> {
    let version = request.version()?;
    let from = session.reversed();

    match request.msg_type().ok()? {
        msg_type::NEW_ORDER_SINGLE => Some(execution_report(version, &from, request, STATUS_NEW, now)),
        msg_type::ORDER_CANCEL_REQUEST => {
            Some(execution_report(version, &from, request, STATUS_CANCELED, now))
        }
        msg_type::MARKET_DATA_REQUEST => Some(snapshot(version, &from, request, now)),
        _ => None,
    }
}

fn header(version: ProtocolVersion, from: &SessionId, kind: &str, now: DateTime<Utc>) -> Message {
    let mut message = Message::new(version, kind);
    message
        .header
        .set_string(Tag::SENDER_COMP_ID, &from.sender_comp_id)
        .set_string(Tag::TARGET_COMP_ID, &from.target_comp_id)
        .set_time(Tag::SENDING_TIME, &now);
    message
}

fn execution_report(
    version: ProtocolVersion,
    from: &SessionId,
    request: &Message,
    status: &str,
    now: DateTime<Utc>,
) -> Message {
    let mut message = header(version, from, msg_type::EXECUTION_REPORT, now);
    let order_qty = request.body.get_decimal(Tag::ORDER_QTY).unwrap_or_default();
    let leaves_qty = if status == STATUS_NEW {
        order_qty
    } else {
        Decimal::ZERO
    };

    let body = &mut message.body;
    body.set_string(Tag::ORDER_ID, Uuid::new_v4().to_string())
        .set_string(Tag::EXEC_ID, Uuid::new_v4().to_string());
    if version.uses_exec_trans_type() {
        body.set_string(Tag::EXEC_TRANS_TYPE, EXEC_TRANS_NEW);
    }
    body.set_string(Tag::EXEC_TYPE, status)
        .set_string(Tag::ORD_STATUS, status);

    for tag in [Tag::CL_ORD_ID, Tag::ORIG_CL_ORD_ID, Tag::SYMBOL, Tag::SIDE] {
        if let Ok(value) = request.body.get_string(tag) {
            body.set_string(tag, value);
        }
    }

    body.set_decimal(Tag::ORDER_QTY, order_qty, DECIMAL_SCALE)
        .set_decimal(Tag::LEAVES_QTY, leaves_qty, DECIMAL_SCALE)
        .set_decimal(Tag::CUM_QTY, Decimal::ZERO, DECIMAL_SCALE)
        .set_decimal(Tag::AVG_PX, Decimal::ZERO, DECIMAL_SCALE)
        .set_time(Tag::TRANSACT_TIME, &now);
    message
}

fn snapshot(
    version: ProtocolVersion,
    from: &SessionId,
    request: &Message,
    now: DateTime<Utc>,
) -> Message {
    let mut message = header(version, from, msg_type::MARKET_DATA_SNAPSHOT, now);

    let symbol = request
        .body
        .group(Tag::NO_RELATED_SYM)
        .and_then(|entries| entries.first())
        .and_then(|entry| entry.get_string(Tag::SYMBOL).ok())
        .unwrap_or_default()
        .to_string();

    let mut bid = FieldMap::new();
    bid.set_string(Tag::MD_ENTRY_TYPE, "0")
        .set_decimal(Tag::MD_ENTRY_PX, QUOTED_BID, DECIMAL_SCALE);

    if let Ok(md_req_id) = request.body.get_string(Tag::MD_REQ_ID) {
        message.body.set_string(Tag::MD_REQ_ID, md_req_id);
    }
    message
        .body
        .set_string(Tag::SYMBOL, symbol)
        .set_group(Tag::NO_MD_ENTRIES, vec![bid]);
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 14, 30, 5).unwrap()
    }

    fn session() -> SessionId {
        SessionId::new("FIX.4.2", "TW", "ISLD")
    }

    #[test]
    fn order_is_acknowledged_new() {
        let mut order = Message::new(ProtocolVersion::Fix42, msg_type::NEW_ORDER_SINGLE);
        order
            .body
            .set_string(Tag::CL_ORD_ID, "ORD1")
            .set_string(Tag::SYMBOL, "AAPL")
            .set_string(Tag::SIDE, "1")
            .set_string(Tag::ORDER_QTY, "100.00");

        let report = reply(&order, &session(), now()).unwrap();
        assert_eq!(report.msg_type(), Ok("8"));
        assert_eq!(report.header.get_string(Tag::SENDER_COMP_ID), Ok("ISLD"));
        assert_eq!(report.header.get_string(Tag::TARGET_COMP_ID), Ok("TW"));
        assert_eq!(report.body.get_string(Tag::ORD_STATUS), Ok("0"));
        assert_eq!(report.body.get_string(Tag::EXEC_TRANS_TYPE), Ok("0"));
        assert_eq!(report.body.get_string(Tag::CL_ORD_ID), Ok("ORD1"));
        assert_eq!(report.body.get_string(Tag::LEAVES_QTY), Ok("100.00"));
        assert!(!report.body.has(Tag::ORIG_CL_ORD_ID));
    }

    #[test]
    fn cancel_is_acknowledged_canceled() {
        let mut cancel = Message::new(ProtocolVersion::Fix44, msg_type::ORDER_CANCEL_REQUEST);
        cancel
            .body
            .set_string(Tag::ORIG_CL_ORD_ID, "ORD1")
            .set_string(Tag::CL_ORD_ID, "CXL1");

        let report = reply(&cancel, &SessionId::new("FIX.4.4", "TW", "ISLD"), now()).unwrap();
        assert_eq!(report.body.get_string(Tag::EXEC_TYPE), Ok("4"));
        assert_eq!(report.body.get_string(Tag::ORIG_CL_ORD_ID), Ok("ORD1"));
        assert_eq!(report.body.get_string(Tag::LEAVES_QTY), Ok("0.00"));
        assert!(!report.body.has(Tag::EXEC_TRANS_TYPE));
    }

    #[test]
    fn market_data_gets_one_bid() {
        let mut related = FieldMap::new();
        related.set_string(Tag::SYMBOL, "LNUX");
        let mut request = Message::new(ProtocolVersion::Fix42, msg_type::MARKET_DATA_REQUEST);
        request
            .body
            .set_string(Tag::MD_REQ_ID, "MARKETDATAID")
            .set_group(Tag::NO_RELATED_SYM, vec![related]);

        let snapshot = reply(&request, &session(), now()).unwrap();
        assert_eq!(snapshot.msg_type(), Ok("W"));
        assert_eq!(snapshot.body.get_string(Tag::SYMBOL), Ok("LNUX"));
        assert_eq!(snapshot.body.get_int(Tag::NO_MD_ENTRIES), Ok(1));
        let entries = snapshot.body.group(Tag::NO_MD_ENTRIES).unwrap();
        assert_eq!(entries[0].get_string(Tag::MD_ENTRY_PX), Ok("100.00"));
    }

    #[test]
    fn other_types_get_no_reply() {
        let report = Message::new(ProtocolVersion::Fix42, msg_type::EXECUTION_REPORT);
        assert!(reply(&report, &session(), now()).is_none());
    }

    #[test]
    fn logon_carries_heartbeat_interval() {
        let logon = admin_message(ProtocolVersion::Fix42, &session(), msg_type::LOGON, now());
        assert_eq!(logon.body.get_int(Tag::HEART_BT_INT), Ok(30));
        assert_eq!(logon.header.get_string(Tag::SENDER_COMP_ID), Ok("TW"));
    }
}
