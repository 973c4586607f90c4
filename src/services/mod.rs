pub mod endpoints;
pub mod gemini;
pub mod session;
