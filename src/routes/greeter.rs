//! Liveness greeting.

pub const WELCOME_MESSAGE: &str = "Bienvenido a MeliVote API";

/// `GET /` — static welcome string.
pub async fn welcome() -> &'static str {
    WELCOME_MESSAGE
}
