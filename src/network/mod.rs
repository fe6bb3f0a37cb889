// Network layer: endpoint builders, client options and the fetch transport.
pub mod api_client;
pub mod config;
pub mod transport;

pub use api_client::{ApiClient, HttpRequest, Method};
pub use config::{ClientConfig, ResponseOrdering, SessionContext};
pub use transport::{Completion, FetchError, FetchTransport, Transport};
