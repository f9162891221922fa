//! Message Builder
//!
//! One builder for every protocol version. The [`VersionContract`] decides
//! prompt order, optional fields and header strategy.

use std::io::BufRead;
use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;

use super::dispatcher::ActionKind;
use super::header::HeaderPopulator;
use super::prompter::{FieldPrompter, PromptError};
use crate::application::ports::SettingsLookup;
use crate::domain::DomainError;
use crate::domain::fix::Message;
use crate::domain::order_entry::{
    CancelIntent, MarketDataIntent, OrdType, OrderIntent, QtyPosition, Side, TifPosition,
    TimeInForce, VersionContract, encode_cancel, encode_market_data, encode_order,
};

/// Errors building a message from operator input.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// A prompt failed.
    #[error(transparent)]
    Prompt(#[from] PromptError),

    /// No market data test exists for the version.
    #[error("No test for version {0}")]
    UnsupportedVersion(String),

    /// A configured header setting is absent.
    #[error("Missing setting: {0}")]
    MissingSetting(String),

    /// The gathered fields violate an order invariant.
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl BuildError {
    /// True when input can no longer be read.
    #[must_use]
    pub const fn is_input_failure(&self) -> bool {
        match self {
            Self::Prompt(err) => err.is_input_failure(),
            _ => false,
        }
    }
}

/// Table-driven message builder.
pub struct MessageBuilder<C: ?Sized> {
    header: HeaderPopulator<C>,
}

impl<C: SettingsLookup + ?Sized> MessageBuilder<C> {
    /// Create a builder; `settings` backs the configured header strategy.
    pub const fn new(settings: Arc<C>) -> Self {
        Self {
            header: HeaderPopulator::new(settings),
        }
    }

    /// Build the message for an action under a contract.
    ///
    /// # Errors
    ///
    /// As the per-kind builders.
    pub fn build<R: BufRead>(
        &self,
        kind: ActionKind,
        contract: &VersionContract,
        prompter: &mut FieldPrompter<R>,
    ) -> Result<Message, BuildError> {
        match kind {
            ActionKind::EnterOrder => self.build_order(contract, prompter),
            ActionKind::CancelOrder => self.build_cancel(contract, prompter),
            ActionKind::MarketDataTest => self.build_market_data(contract, prompter),
        }
    }

    /// Prompt for and build a NewOrderSingle.
    ///
    /// # Errors
    ///
    /// Prompt failures, header resolution failures, or an invariant
    /// violation from encoding.
    pub fn build_order<R: BufRead>(
        &self,
        contract: &VersionContract,
        prompter: &mut FieldPrompter<R>,
    ) -> Result<Message, BuildError> {
        let cl_ord_id = prompter.query_text("ClOrdID")?;
        let symbol = prompter.query_text("Symbol")?;
        let side = prompter.query_field::<Side>()?;

        let (order_qty, ord_type) = match contract.qty_position {
            QtyPosition::BeforeOrdType => {
                let order_qty = prompter.query_decimal("OrderQty")?;
                (order_qty, prompter.query_field::<OrdType>()?)
            }
            QtyPosition::AfterOrdType => {
                let ord_type = prompter.query_field::<OrdType>()?;
                (prompter.query_decimal("OrderQty")?, ord_type)
            }
        };

        let mut time_in_force = None;
        if contract.tif_position == TifPosition::BeforePrices {
            time_in_force = Some(prompter.query_field::<TimeInForce>()?);
        }

        let price = if ord_type.requires_limit_price() {
            Some(prompter.query_decimal("Price")?)
        } else if contract.carries_price(ord_type) {
            Some(Decimal::ZERO)
        } else {
            None
        };
        let stop_px = if ord_type.requires_stop_price() {
            Some(prompter.query_decimal("Stop Price")?)
        } else {
            None
        };

        let time_in_force = match time_in_force {
            Some(tif) => tif,
            None => prompter.query_field::<TimeInForce>()?,
        };

        let intent = OrderIntent {
            cl_ord_id,
            symbol,
            side,
            ord_type,
            order_qty,
            price,
            stop_px,
            time_in_force,
        };
        let identity = self.header.resolve(contract.header, prompter)?;

        let mut message = encode_order(contract, &intent, Utc::now())?;
        identity.apply(&mut message.header);
        Ok(message)
    }

    /// Prompt for and build an OrderCancelRequest.
    ///
    /// # Errors
    ///
    /// Prompt failures or header resolution failures.
    pub fn build_cancel<R: BufRead>(
        &self,
        contract: &VersionContract,
        prompter: &mut FieldPrompter<R>,
    ) -> Result<Message, BuildError> {
        let intent = CancelIntent {
            orig_cl_ord_id: prompter.query_text("OrigClOrdID")?,
            cl_ord_id: prompter.query_text("ClOrdID")?,
            symbol: prompter.query_text("Symbol")?,
            side: prompter.query_field::<Side>()?,
            order_qty: prompter.query_decimal("OrderQty")?,
        };
        let identity = self.header.resolve(contract.header, prompter)?;

        let mut message = encode_cancel(contract, &intent, Utc::now());
        identity.apply(&mut message.header);
        Ok(message)
    }

    /// Build the fixed market data snapshot request.
    ///
    /// # Errors
    ///
    /// [`BuildError::UnsupportedVersion`] when the contract has no market
    /// data test; header resolution failures otherwise.
    pub fn build_market_data<R: BufRead>(
        &self,
        contract: &VersionContract,
        prompter: &mut FieldPrompter<R>,
    ) -> Result<Message, BuildError> {
        if !contract.market_data {
            return Err(BuildError::UnsupportedVersion(
                contract.version.begin_string().to_string(),
            ));
        }

        let mut message = encode_market_data(contract, &MarketDataIntent::default())?;
        let identity = self.header.resolve(contract.header, prompter)?;
        identity.apply(&mut message.header);
        Ok(message)
    }
}
