//! Session-backed client for the FSAPI remote-control protocol
//!
//! Frontier Silicon based receivers gate every remote-control command behind
//! a server-issued session id obtained from `CREATE_SESSION`. This crate owns
//! that lifecycle: [`RemoteSession`] creates the session lazily, renews it
//! transparently when the device stops honoring it, and releases it
//! (best-effort) on close or drop.
//!
//! ```rust,no_run
//! use fsapi_session::{Endpoint, RemoteSession};
//!
//! let endpoint = Endpoint::new("192.168.1.42", 80, "1234");
//! let mut session = RemoteSession::new(endpoint);
//!
//! let mode = session.mode()?;
//! if mode != 1 {
//!     session.set_mode(1)?;
//! }
//! session.close_session();
//! # Ok::<(), fsapi_session::SessionError>(())
//! ```

pub mod endpoint;
pub mod error;
pub mod node;
pub mod session;

pub use endpoint::Endpoint;
pub use error::{Result, SessionError};
pub use node::{Method, Node};
pub use session::RemoteSession;
