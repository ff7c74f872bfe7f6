//! Network session state and the requests a guest can send to the host.

mod requests;
mod state;

pub use requests::SessionRequests;
pub use state::{ConnectionState, SessionState};
