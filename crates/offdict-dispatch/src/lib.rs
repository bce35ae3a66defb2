mod client;
mod dispatcher;
mod error;
mod request;

pub use client::{HttpLookupClient, LookupClient, LookupResponse};
pub use dispatcher::{DispatchHandle, LookupDispatcher, SelectionDispatcher};
pub use error::DispatchError;
pub use request::{LookupRequest, LookupTarget};
