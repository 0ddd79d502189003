// ABOUTME: HTTP stack and wiring for the costview shell.
// ABOUTME: Capability traits, auth-redirect middleware, session headers, and the composed Shell.

pub mod config;
pub mod cookies;
pub mod intercept;
pub mod navigate;
pub mod session;
pub mod shell;
pub mod testing;
pub mod transport;

pub use config::{ConfigError, ShellConfig};
pub use cookies::{CookieStore, HeaderCookies};
pub use intercept::AuthRedirectLayer;
pub use navigate::{Navigator, TracingNavigator};
pub use session::CsrfHeaderLayer;
pub use shell::Shell;
pub use transport::{ReqwestTransport, Transport, TransportError, TransportService};
