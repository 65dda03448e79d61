//! HTTP request descriptor and the transport that sends it.
mod client;
mod request;
mod tls;
mod transport;


pub use client::{ReqwestTransport, TransportOptions, build_client};
pub use request::{REQUESTED_WITH_HEADER, REQUESTED_WITH_VALUE, RequestDescriptor};
pub use transport::{ProbeResponse, Transport};
