//! Token endpoint grants: code exchange and refresh.

mod exchange;
mod refresh;
mod request;
mod response;
mod tokens;

pub use exchange::TokenExchanger;
pub use refresh::TokenRefresher;
pub use request::{TokenReply, TokenRequest};
pub use response::{ProviderErrorResponse, TokenResponse};
pub use tokens::Tokens;
