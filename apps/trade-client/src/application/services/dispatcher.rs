//! Version Dispatcher
//!
//! Maps an action and a BeginString to the contract the builder follows.

use std::fmt;

use super::message_builder::BuildError;
use crate::domain::order_entry::{CONTRACTS, VersionContract};

/// Operator actions that produce a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    /// NewOrderSingle.
    EnterOrder,
    /// OrderCancelRequest.
    CancelOrder,
    /// MarketDataRequest snapshot test.
    MarketDataTest,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EnterOrder => write!(f, "enter_order"),
            Self::CancelOrder => write!(f, "cancel_order"),
            Self::MarketDataTest => write!(f, "market_data_test"),
        }
    }
}

/// Contract lookup by action and version identifier.
#[derive(Debug, Clone, Copy)]
pub struct VersionDispatcher {
    contracts: &'static [VersionContract],
}

impl Default for VersionDispatcher {
    fn default() -> Self {
        Self::new(&CONTRACTS)
    }
}

impl VersionDispatcher {
    /// Dispatcher over a contract table.
    #[must_use]
    pub const fn new(contracts: &'static [VersionContract]) -> Self {
        Self { contracts }
    }

    /// Resolve the contract for an action.
    ///
    /// Order entry and cancel with an unrecognised identifier resolve to
    /// `Ok(None)`: nothing is built and nothing is reported to the operator.
    ///
    /// # Errors
    ///
    /// [`BuildError::UnsupportedVersion`] for the market data test when the
    /// identifier is unknown or its contract has no market data support.
    pub fn resolve(
        &self,
        kind: ActionKind,
        identifier: &str,
    ) -> Result<Option<&'static VersionContract>, BuildError> {
        let contract = self
            .contracts
            .iter()
            .find(|c| c.version.begin_string() == identifier);

        match kind {
            ActionKind::EnterOrder | ActionKind::CancelOrder => {
                if contract.is_none() {
                    tracing::warn!(
                        action = %kind,
                        begin_string = identifier,
                        "No contract for version, nothing built"
                    );
                }
                Ok(contract)
            }
            ActionKind::MarketDataTest => contract
                .filter(|c| c.market_data)
                .map(Some)
                .ok_or_else(|| BuildError::UnsupportedVersion(identifier.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fix::ProtocolVersion;

    #[test]
    fn resolves_every_version_for_orders() {
        let dispatcher = VersionDispatcher::default();
        for version in ProtocolVersion::ALL {
            for kind in [ActionKind::EnterOrder, ActionKind::CancelOrder] {
                let contract = dispatcher
                    .resolve(kind, version.begin_string())
                    .unwrap()
                    .unwrap();
                assert_eq!(contract.version, version);
            }
        }
    }

    #[test]
    fn unknown_version_is_silent_for_orders() {
        let dispatcher = VersionDispatcher::default();
        assert!(dispatcher.resolve(ActionKind::EnterOrder, "FIX.9.9").unwrap().is_none());
        assert!(dispatcher.resolve(ActionKind::CancelOrder, "").unwrap().is_none());
    }

    #[test]
    fn market_data_rejects_unknown_and_early_versions() {
        let dispatcher = VersionDispatcher::default();
        for id in ["FIX.4.0", "FIX.4.1", "FIX.9.9"] {
            let err = dispatcher.resolve(ActionKind::MarketDataTest, id).unwrap_err();
            assert_eq!(err.to_string(), format!("No test for version {id}"));
        }
    }

    #[test]
    fn market_data_resolves_supported_versions() {
        let dispatcher = VersionDispatcher::default();
        for id in ["FIX.4.2", "FIX.4.3", "FIX.4.4", "FIXT.1.1"] {
            let contract = dispatcher
                .resolve(ActionKind::MarketDataTest, id)
                .unwrap()
                .unwrap();
            assert!(contract.market_data);
        }
    }
}
