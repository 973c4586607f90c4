use netia_backend::services::endpoints::{
    API_VERSIONS, DEFAULT_MODEL_FALLBACKS, candidate_models, extract_model_from_url,
    versioned_endpoints,
};

#[test]
fn extracts_model_between_models_segment_and_colon() {
    let url = "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash-lite-preview-06-17:generateContent";
    assert_eq!(
        extract_model_from_url(url).as_deref(),
        Some("gemini-2.5-flash-lite-preview-06-17")
    );
}

#[test]
fn extracts_model_up_to_slash_or_end() {
    assert_eq!(
        extract_model_from_url("https://host/v1/models/gemini-pro/extra").as_deref(),
        Some("gemini-pro")
    );
    assert_eq!(
        extract_model_from_url("https://host/v1/models/gemini-pro").as_deref(),
        Some("gemini-pro")
    );
}

#[test]
fn segment_match_is_case_insensitive_but_name_keeps_case() {
    assert_eq!(
        extract_model_from_url("https://host/v1/MODELS/Gemini-Pro:generateContent").as_deref(),
        Some("Gemini-Pro")
    );
}

#[test]
fn no_model_segment_means_no_match() {
    assert_eq!(extract_model_from_url("https://host/v1/chat"), None);
    assert_eq!(extract_model_from_url("https://host/models/"), None);
    assert_eq!(extract_model_from_url(""), None);
}

#[test]
fn empty_capture_falls_through_to_later_segment() {
    assert_eq!(
        extract_model_from_url("https://host/models/:x/models/real:generateContent").as_deref(),
        Some("real")
    );
}

#[test]
fn candidate_order_is_configured_then_extracted() {
    let models = candidate_models(
        "my-model",
        "https://host/v1beta/models/url-model:generateContent",
    );
    assert_eq!(models, vec!["my-model".to_string(), "url-model".to_string()]);
}

#[test]
fn configured_and_extracted_deduplicate() {
    let models = candidate_models(
        "gemini-pro",
        "https://host/v1/models/gemini-pro:generateContent",
    );
    assert_eq!(models, vec!["gemini-pro".to_string()]);
}

#[test]
fn defaults_used_only_when_nothing_is_known() {
    let models = candidate_models("", "https://host/no-model-here");
    assert_eq!(models, DEFAULT_MODEL_FALLBACKS.map(String::from).to_vec());

    let models = candidate_models("", "https://host/v1/models/found:generateContent");
    assert_eq!(models, vec!["found".to_string()]);
}

#[test]
fn versioned_endpoints_cover_all_api_versions_in_order() {
    let urls = versioned_endpoints("https://generativelanguage.googleapis.com", "gemini-pro");
    assert_eq!(urls.len(), API_VERSIONS.len());
    assert_eq!(
        urls,
        vec![
            "https://generativelanguage.googleapis.com/v1beta2/models/gemini-pro:generateContent",
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro:generateContent",
            "https://generativelanguage.googleapis.com/v1/models/gemini-pro:generateContent",
        ]
    );
}
