//! HTTP clients for the remote scoring and identity services.

mod error;
mod http_client;
mod identity_client;
mod logout_response;
mod score_client;

pub use error::{ClientError, Result as ClientResult};
pub use identity_client::IdentityClient;
pub use logout_response::LogoutResponse;
pub use score_client::ScoreClient;
