use super::*;

#[test]
fn default_matches_template_conventions() {
    let cfg = BehaviorConfig::default();
    assert_eq!(cfg.toggle_id_prefix, "togglePassword");
    assert_eq!(cfg.alert_role, "alert");
    assert_eq!(cfg.dismiss_class, "flash-close");
    assert_eq!(cfg.fade_ms, 300);
    assert_eq!(cfg.auto_dismiss_ms, 5000);
    assert_eq!(cfg.year_class, "current-year");
}

#[test]
fn from_json_overrides_only_given_keys() {
    let cfg = BehaviorConfig::from_json(r#"{ "autoDismissMs": 8000, "fadedClass": "fade-out" }"#).unwrap();
    assert_eq!(cfg.auto_dismiss_ms, 8000);
    assert_eq!(cfg.faded_class, "fade-out");
    assert_eq!(cfg.fade_ms, 300);
    assert_eq!(cfg.hidden_class, "hidden");
}

#[test]
fn from_json_accepts_empty_object() {
    assert_eq!(BehaviorConfig::from_json("{}").unwrap(), BehaviorConfig::default());
}

#[test]
fn from_json_rejects_zero_fade() {
    let err = BehaviorConfig::from_json(r#"{ "fadeMs": 0 }"#).unwrap_err();
    assert!(matches!(err, PageError::InvalidConfig(_)));
}

#[test]
fn from_json_rejects_blank_toggle_prefix() {
    let err = BehaviorConfig::from_json(r#"{ "toggleIdPrefix": "  " }"#).unwrap_err();
    assert!(matches!(err, PageError::InvalidConfig(_)));
}

#[test]
fn from_json_reports_malformed_input() {
    let err = BehaviorConfig::from_json("{ not json").unwrap_err();
    assert!(matches!(err, PageError::Config(_)));
}

#[test]
fn derived_ids_append_suffixes() {
    let cfg = BehaviorConfig::default();
    assert_eq!(cfg.file_name_id("upload"), "upload-name");
    assert_eq!(cfg.error_id("email"), "email-error");
    assert_eq!(cfg.error_id(""), "-error");
}

#[test]
fn markup_conventions_are_overridable() {
    let cfg = BehaviorConfig::from_json(
        r#"{ "fileInputType": "file", "requiredAttribute": "data-required", "errorMessageTag": "span" }"#,
    )
    .unwrap();
    assert_eq!(cfg.required_attribute, "data-required");
    assert_eq!(cfg.error_message_tag, "span");
    assert_eq!(cfg.file_input_type, "file");

    let defaults = BehaviorConfig::default();
    assert_eq!(defaults.required_attribute, "required");
    assert_eq!(defaults.error_message_tag, "p");
}
