// src/services/session.rs
use uuid::Uuid;

pub const TOKEN_LEN: usize = 8;

/// Mint the opaque token echoed back with every reply. It is never stored
/// or checked server-side; conversations carry no memory here.
pub fn new_session_token() -> String {
    let mut token = Uuid::new_v4().simple().to_string();
    token.truncate(TOKEN_LEN);
    token
}
