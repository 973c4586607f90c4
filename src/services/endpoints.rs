//! Endpoint and model-name resolution for fallback probing.

/// API versions tried for each candidate model, in order.
pub const API_VERSIONS: [&str; 3] = ["v1beta2", "v1beta", "v1"];

/// Models probed when neither the config nor the primary URL names one.
pub const DEFAULT_MODEL_FALLBACKS: [&str; 4] =
    ["gemini-2.5-flash", "gemini-2.5", "gemini-pro", "gemini-2.1"];

/// Pull a model name out of a full endpoint URL. The `models/` segment is
/// matched case-insensitively; the name runs until the next `:` or `/` and
/// keeps its original casing. An empty capture moves on to a later match.
pub fn extract_model_from_url(url: &str) -> Option<String> {
    let lower = url.to_ascii_lowercase();
    let mut from = 0;
    while let Some(found) = lower[from..].find("models/") {
        let start = from + found + "models/".len();
        let rest = &url[start..];
        let end = rest.find(|c| c == ':' || c == '/').unwrap_or(rest.len());
        if end > 0 {
            return Some(rest[..end].to_string());
        }
        from = start;
    }
    None
}

/// Candidate models in probe order: configured name, then the one extracted
/// from the primary URL, then the defaults when neither exists.
pub fn candidate_models(configured: &str, api_url: &str) -> Vec<String> {
    let mut models = Vec::new();
    if !configured.is_empty() {
        models.push(configured.to_string());
    }
    if let Some(extracted) = extract_model_from_url(api_url) {
        if !models.contains(&extracted) {
            models.push(extracted);
        }
    }
    if models.is_empty() {
        models = DEFAULT_MODEL_FALLBACKS.iter().map(|m| m.to_string()).collect();
    }
    models
}

/// Fallback URLs for one model, one per API version.
pub fn versioned_endpoints(base: &str, model: &str) -> Vec<String> {
    API_VERSIONS
        .iter()
        .map(|version| format!("{}/{}/models/{}:generateContent", base, version, model))
        .collect()
}
