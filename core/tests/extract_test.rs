use weft_core::extract::{extract_allowed_components, split_response, ExtractionError};

#[test]
fn splits_at_first_delimiter_occurrence() {
    let raw = "Here is your chart.\n---a2ui_JSON---\n[{\"x\": \"---a2ui_JSON---\"}]";
    let extracted = split_response(raw).unwrap();
    assert_eq!(extracted.conversational, "Here is your chart.");
    assert_eq!(extracted.json_text, "[{\"x\": \"---a2ui_JSON---\"}]");
}

#[test]
fn missing_delimiter_is_a_typed_error() {
    let err = split_response("just some prose without a payload").unwrap_err();
    assert_eq!(err, ExtractionError::DelimiterMissing);
}

#[test]
fn empty_json_segment_is_a_typed_error() {
    let err = split_response("text\n---a2ui_JSON---\n   \n").unwrap_err();
    assert_eq!(err, ExtractionError::EmptyJsonSegment);
}

#[test]
fn strips_json_code_fence() {
    let raw = "Done.\n---a2ui_JSON---\n```json\n[{\"beginRendering\": {}}]\n```";
    let extracted = split_response(raw).unwrap();
    assert_eq!(extracted.json_text, "[{\"beginRendering\": {}}]");
    // Raw segment keeps the fence for verbatim re-joining.
    assert!(extracted.json_raw.starts_with("```json"));
}

#[test]
fn strips_bare_code_fence_without_language_tag() {
    let raw = "Ok\n---a2ui_JSON---\n```\n[]\n```";
    let extracted = split_response(raw).unwrap();
    assert_eq!(extracted.json_text, "[]");
}

#[test]
fn unfenced_json_passes_through_untouched() {
    let raw = "Ok\n---a2ui_JSON---\n[1, 2, 3]";
    let extracted = split_response(raw).unwrap();
    assert_eq!(extracted.json_text, "[1, 2, 3]");
    assert_eq!(extracted.json_raw, "[1, 2, 3]");
}

#[test]
fn conversational_part_may_be_empty() {
    let extracted = split_response("---a2ui_JSON---\n[]").unwrap();
    assert_eq!(extracted.conversational, "");
    assert_eq!(extracted.json_text, "[]");
}

#[test]
fn allow_list_parses_widgets_and_lowercases() {
    let raw = r#"{"widgets": [{"name": "BarGraph"}, {"name": "OutageTable"}]}"#;
    let allowed = extract_allowed_components(raw).unwrap();
    assert_eq!(allowed, vec!["bargraph", "outagetable"]);
}

#[test]
fn allow_list_preserves_order() {
    let raw = r#"{"widgets": [{"name": "b"}, {"name": "a"}, {"name": "c"}]}"#;
    assert_eq!(extract_allowed_components(raw).unwrap(), vec!["b", "a", "c"]);
}

#[test]
fn allow_list_falls_back_to_none() {
    assert_eq!(extract_allowed_components("not json at all"), None);
    assert_eq!(extract_allowed_components(r#"{"other": 1}"#), None);
    assert_eq!(extract_allowed_components(r#"{"widgets": []}"#), None);
    assert_eq!(extract_allowed_components(r#"{"widgets": [{"title": "x"}]}"#), None);
}
