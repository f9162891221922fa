//! Loopback Session Adapter
//!
//! In-process stand-in for the FIX session collaborator. It performs the
//! callback sequence a real initiator would (create, logon, logout) and
//! answers application messages from a background task through
//! `from_app`, so the client runs end to end without a counterparty.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::counterparty::{admin_message, reply};
use crate::application::ports::{
    InitiatorPort, SessionApplication, SessionError, SessionPort, TransmitError,
};
use crate::domain::fix::{Message, ProtocolVersion, SessionId, Tag, msg_type};

/// Header fields `send` requires before routing.
const ROUTING_FIELDS: [Tag; 4] = [
    Tag::BEGIN_STRING,
    Tag::MSG_TYPE,
    Tag::SENDER_COMP_ID,
    Tag::TARGET_COMP_ID,
];

struct Outbound {
    session: SessionId,
    message: Message,
}

#[derive(Default)]
struct Running {
    outbound: Option<mpsc::UnboundedSender<Outbound>>,
    cancel: Option<CancellationToken>,
    task: Option<JoinHandle<()>>,
}

/// Loopback initiator over a fixed set of sessions.
pub struct LoopbackInitiator<A: SessionApplication + ?Sized + 'static> {
    app: Arc<A>,
    sessions: Vec<(SessionId, ProtocolVersion)>,
    unknown: Vec<SessionId>,
    running: Mutex<Running>,
}

impl<A: SessionApplication + ?Sized + 'static> LoopbackInitiator<A> {
    /// Create an initiator for `sessions`, reporting events to `app`.
    pub fn new(app: Arc<A>, sessions: Vec<SessionId>) -> Self {
        let mut known = Vec::with_capacity(sessions.len());
        let mut unknown = Vec::new();
        for id in sessions {
            match ProtocolVersion::from_begin_string(&id.begin_string) {
                Some(version) => known.push((id, version)),
                None => unknown.push(id),
            }
        }

        Self {
            app,
            sessions: known,
            unknown,
            running: Mutex::new(Running::default()),
        }
    }

    /// Whether the sessions are logged on.
    #[must_use]
    pub fn is_logged_on(&self) -> bool {
        self.running.lock().outbound.is_some()
    }

    /// Configured session identities.
    pub fn session_ids(&self) -> impl Iterator<Item = &SessionId> {
        self.sessions.iter().map(|(id, _)| id)
    }
}

impl<A: SessionApplication + ?Sized + 'static> SessionPort for LoopbackInitiator<A> {
    fn send(&self, message: Message) -> Result<(), TransmitError> {
        let Some(outbound) = self.running.lock().outbound.clone() else {
            return Err(TransmitError::NotLoggedOn);
        };

        if let Some(tag) = ROUTING_FIELDS
            .into_iter()
            .find(|tag| message.header.get_string(*tag).is_err())
        {
            return Err(TransmitError::MissingHeaderField(tag));
        }

        let session = SessionId::from_outbound(&message).map_err(TransmitError::MissingHeaderField)?;
        if !self.sessions.iter().any(|(id, _)| *id == session) {
            return Err(TransmitError::SessionNotFound(session));
        }

        if message.is_admin() {
            self.app.to_admin(&message, &session);
            debug!(session = %session, "Admin message sent");
            return Ok(());
        }

        self.app.to_app(&message, &session);
        debug!(session = %session, "Message queued");
        outbound
            .send(Outbound { session, message })
            .map_err(|_| TransmitError::Closed)
    }
}

#[async_trait]
impl<A: SessionApplication + ?Sized + 'static> InitiatorPort for LoopbackInitiator<A> {
    async fn start(&self) -> Result<(), SessionError> {
        if let Some(id) = self.unknown.first() {
            return Err(SessionError::Startup {
                message: format!("unsupported BeginString for {id}"),
            });
        }
        if self.sessions.is_empty() {
            return Err(SessionError::NoSessions);
        }

        let mut running = self.running.lock();
        if running.outbound.is_some() {
            return Err(SessionError::AlreadyStarted);
        }

        for (id, version) in &self.sessions {
            let now = Utc::now();
            self.app.on_create(id);
            self.app
                .to_admin(&admin_message(*version, id, msg_type::LOGON, now), id);
            self.app.from_admin(
                &admin_message(*version, &id.reversed(), msg_type::LOGON, now),
                id,
            );
            self.app.on_logon(id);
        }

        let (tx, rx) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();
        let task = tokio::spawn(counterparty(Arc::clone(&self.app), rx, cancel.clone()));

        running.outbound = Some(tx);
        running.cancel = Some(cancel);
        running.task = Some(task);
        info!(sessions = self.sessions.len(), "Loopback sessions logged on");
        Ok(())
    }

    async fn stop(&self) {
        let (cancel, task) = {
            let mut running = self.running.lock();
            running.outbound = None;
            (running.cancel.take(), running.task.take())
        };
        let Some(cancel) = cancel else {
            return;
        };

        cancel.cancel();
        if let Some(task) = task
            && let Err(e) = task.await
        {
            warn!(error = %e, "Counterparty task ended abnormally");
        }

        for (id, version) in &self.sessions {
            self.app
                .to_admin(&admin_message(*version, id, msg_type::LOGOUT, Utc::now()), id);
            self.app.on_logout(id);
        }
        info!("Loopback sessions logged out");
    }
}

async fn counterparty<A: SessionApplication + ?Sized>(
    app: Arc<A>,
    mut rx: mpsc::UnboundedReceiver<Outbound>,
    cancel: CancellationToken,
) {
    loop {
        tokio::select! {
            () = cancel.cancelled() => break,
            next = rx.recv() => {
                let Some(Outbound { session, message }) = next else {
                    break;
                };
                if let Some(response) = reply(&message, &session, Utc::now()) {
                    app.from_app(&response, &session);
                }
            }
        }
    }
}
