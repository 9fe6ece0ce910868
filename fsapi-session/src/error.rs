use fsapi_client::ClientError;
use thiserror::Error;

/// Errors surfaced by the session layer
///
/// The session layer recovers transparently from one session expiry per
/// call; everything else propagates as one of these typed outcomes so the
/// caller can decide what to log and whether to keep looping.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Device refused or was unreachable while opening a session
    #[error("Session creation failed: {0}")]
    SessionCreation(#[source] ClientError),

    /// Command failed even after one session-renewal retry
    #[error("Remote call {method}/{node} failed: {source}")]
    RemoteCall {
        method: &'static str,
        node: &'static str,
        #[source]
        source: ClientError,
    },

    /// Response body lacked an expected tag or carried a malformed value
    #[error("Response parse failed: {0}")]
    Parse(#[source] ClientError),
}

/// Type alias for results that can return a SessionError
pub type Result<T> = std::result::Result<T, SessionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SessionError::SessionCreation(ClientError::Status(404));
        assert_eq!(
            format!("{}", err),
            "Session creation failed: Device returned HTTP 404"
        );

        let err = SessionError::RemoteCall {
            method: "SET",
            node: "netRemote.play.control",
            source: ClientError::Status(403),
        };
        let rendered = format!("{}", err);
        assert!(rendered.contains("SET/netRemote.play.control"));
        assert!(rendered.contains("403"));
    }
}
