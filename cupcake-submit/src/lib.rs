pub mod config;
pub mod service;
pub mod transport;

pub use config::SubmitConfig;
pub use service::{Confirmation, SubmissionError, SubmissionPhase, SubmissionService};
pub use transport::{HttpTransport, MockTransport, Transport, TransportError};
