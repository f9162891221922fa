//! Header Populator
//!
//! Resolves the routing identity for an outbound message, either from the
//! operator or from the global settings, depending on the version contract.

use std::io::BufRead;
use std::sync::Arc;

use super::message_builder::BuildError;
use super::prompter::FieldPrompter;
use crate::application::ports::SettingsLookup;
use crate::domain::order_entry::{HeaderIdentity, HeaderStrategy};

/// Settings key for our CompID.
pub const SENDER_COMP_ID_KEY: &str = "SenderCompID";

/// Settings key for the counterparty CompID.
pub const TARGET_COMP_ID_KEY: &str = "TargetCompID";

/// Resolves [`HeaderIdentity`] per [`HeaderStrategy`].
pub struct HeaderPopulator<C: ?Sized> {
    settings: Arc<C>,
}

impl<C: SettingsLookup + ?Sized> HeaderPopulator<C> {
    /// Create a populator reading configured identities from `settings`.
    pub const fn new(settings: Arc<C>) -> Self {
        Self { settings }
    }

    /// Resolve the identity.
    ///
    /// # Errors
    ///
    /// Prompt failures for [`HeaderStrategy::Interactive`];
    /// [`BuildError::MissingSetting`] for [`HeaderStrategy::Configured`] when
    /// a key is absent.
    pub fn resolve<R: BufRead>(
        &self,
        strategy: HeaderStrategy,
        prompter: &mut FieldPrompter<R>,
    ) -> Result<HeaderIdentity, BuildError> {
        match strategy {
            HeaderStrategy::Interactive => Self::interactive(prompter),
            HeaderStrategy::Configured => self.configured(),
        }
    }

    fn interactive<R: BufRead>(
        prompter: &mut FieldPrompter<R>,
    ) -> Result<HeaderIdentity, BuildError> {
        let sender_comp_id = prompter.query_text(SENDER_COMP_ID_KEY)?;
        let target_comp_id = prompter.query_text(TARGET_COMP_ID_KEY)?;
        let target_sub_id = if prompter.query_confirm("Use a TargetSubID")? {
            Some(prompter.query_text("TargetSubID")?)
        } else {
            None
        };

        Ok(HeaderIdentity {
            sender_comp_id,
            target_comp_id,
            target_sub_id,
        })
    }

    fn configured(&self) -> Result<HeaderIdentity, BuildError> {
        let lookup = |key: &str| {
            self.settings
                .global_setting(key)
                .map(str::to_string)
                .ok_or_else(|| BuildError::MissingSetting(key.to_string()))
        };

        Ok(HeaderIdentity {
            sender_comp_id: lookup(SENDER_COMP_ID_KEY)?,
            target_comp_id: lookup(TARGET_COMP_ID_KEY)?,
            target_sub_id: None,
        })
    }
}
