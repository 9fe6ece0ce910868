//! Session lifecycle and the retry-on-expiry call path

use fsapi_client::{ClientError, FsapiClient};
use tracing::{debug, warn};
use xmltree::Element;

use crate::{Endpoint, Method, Node, Result, SessionError};

/// A remote-control session bound to one device endpoint
///
/// Owns at most one session id at a time. The id is created lazily on first
/// use, renewed when the device rejects a request under it, and released
/// (best-effort) by [`close_session`](RemoteSession::close_session) or on
/// drop. Callers should still close explicitly on shutdown rather than
/// relying on drop timing.
#[derive(Debug)]
pub struct RemoteSession {
    client: FsapiClient,
    endpoint: Endpoint,
    session_id: Option<String>,
}

impl RemoteSession {
    /// Create a session handle with the default client configuration
    pub fn new(endpoint: Endpoint) -> Self {
        Self::with_client(FsapiClient::new(), endpoint)
    }

    /// Create a session handle with a custom client (for advanced use cases)
    pub fn with_client(client: FsapiClient, endpoint: Endpoint) -> Self {
        Self {
            client,
            endpoint,
            session_id: None,
        }
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Get the current session id, if one is held
    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    /// Guarantee a session id exists, creating one if absent
    ///
    /// A no-op while an id is held; on failure the session stays absent.
    pub fn ensure_session(&mut self) -> Result<()> {
        if self.session_id.is_some() {
            return Ok(());
        }

        let url = format!(
            "{}/CREATE_SESSION?pin={}",
            self.endpoint.base_url(),
            self.endpoint.pin()
        );

        let xml = self.client.get(&url).map_err(|e| match e {
            ClientError::Parse(_) => SessionError::Parse(e),
            refused => SessionError::SessionCreation(refused),
        })?;

        let sid = fsapi_client::read_text(&xml, "sessionId").map_err(SessionError::Parse)?;
        debug!(sid = %sid, host = self.endpoint.host(), "session created");
        self.session_id = Some(sid);
        Ok(())
    }

    /// Release the current session, if any
    ///
    /// Requests `DELETE_SESSION` best-effort and clears local state
    /// unconditionally, so a device that refuses the deletion cannot leave
    /// this handle inconsistent. Idempotent.
    pub fn close_session(&mut self) {
        let Some(sid) = self.session_id.take() else {
            return;
        };

        let url = format!(
            "{}/DELETE_SESSION?pin={}&sid={}",
            self.endpoint.base_url(),
            self.endpoint.pin(),
            sid
        );

        if let Err(e) = self.client.get(&url) {
            debug!(sid = %sid, error = %e, "session deletion refused, dropping local state");
        }
    }

    /// Issue a GET/SET command against a node, renewing the session once on
    /// rejection
    ///
    /// A non-success response is treated as session expiry: the session is
    /// closed, recreated, and the command retried exactly once. A second
    /// failure surfaces as [`SessionError::RemoteCall`]; there is never a
    /// third network attempt. Note that even read-only calls can renew the
    /// session id as a side effect.
    pub fn call(&mut self, method: Method, node: Node, params: &[(&str, &str)]) -> Result<Element> {
        self.ensure_session()?;
        let sid = self.session_id.clone().unwrap_or_default();

        match self.send(&sid, method, node, params) {
            Ok(xml) => Ok(xml),
            // A 200 body we cannot read is a contract break, not expiry.
            Err(e @ ClientError::Parse(_)) => Err(SessionError::Parse(e)),
            Err(first) => {
                warn!(
                    method = method.segment(),
                    node = node.name(),
                    error = %first,
                    "call rejected, renewing session"
                );
                self.close_session();
                self.ensure_session()?;
                let sid = self.session_id.clone().unwrap_or_default();

                self.send(&sid, method, node, params).map_err(|e| match e {
                    ClientError::Parse(_) => SessionError::Parse(e),
                    source => SessionError::RemoteCall {
                        method: method.segment(),
                        node: node.name(),
                        source,
                    },
                })
            }
        }
    }

    fn send(
        &self,
        sid: &str,
        method: Method,
        node: Node,
        params: &[(&str, &str)],
    ) -> std::result::Result<Element, ClientError> {
        let mut url = format!(
            "{}/{}/{}?pin={}&sid={}",
            self.endpoint.base_url(),
            method.segment(),
            node.name(),
            self.endpoint.pin(),
            sid
        );
        for (key, value) in params {
            url.push_str(&format!("&{}={}", key, value));
        }

        self.client.get(&url)
    }

    /// Read the current input mode
    pub fn mode(&mut self) -> Result<u32> {
        let xml = self.call(Method::Get, Node::SysMode, &[])?;
        fsapi_client::read_u32(&xml).map_err(SessionError::Parse)
    }

    /// Read the current playback status
    pub fn play_status(&mut self) -> Result<u8> {
        let xml = self.call(Method::Get, Node::PlayStatus, &[])?;
        fsapi_client::read_u8(&xml).map_err(SessionError::Parse)
    }

    /// Read the current track duration (0 when no track metadata exists)
    pub fn play_duration(&mut self) -> Result<u32> {
        let xml = self.call(Method::Get, Node::PlayInfoDuration, &[])?;
        fsapi_client::read_u32(&xml).map_err(SessionError::Parse)
    }

    /// Read the power state
    pub fn power(&mut self) -> Result<u8> {
        let xml = self.call(Method::Get, Node::SysPower, &[])?;
        fsapi_client::read_u8(&xml).map_err(SessionError::Parse)
    }

    /// Switch the input mode
    pub fn set_mode(&mut self, mode: u32) -> Result<()> {
        self.call(Method::Set, Node::SysMode, &[("value", &mode.to_string())])
            .map(|_| ())
    }

    /// Write the playback control node (2 requests a pause)
    pub fn set_play_control(&mut self, state: u8) -> Result<()> {
        self.call(Method::Set, Node::PlayControl, &[("value", &state.to_string())])
            .map(|_| ())
    }

    /// Write the power state (0 = standby, 1 = on)
    pub fn set_power(&mut self, state: u8) -> Result<()> {
        self.call(Method::Set, Node::SysPower, &[("value", &state.to_string())])
            .map(|_| ())
    }
}

impl Drop for RemoteSession {
    fn drop(&mut self) {
        // Best-effort: a stale session on the device only expires later.
        self.close_session();
    }
}
