//! Page behavior configuration.
//!
//! Every DOM convention the behaviors bind to, plus both flash delays. The
//! defaults match the server templates; a host can override any subset by
//! passing a JSON object to `initPageBehaviors`.

use serde::Deserialize;

use crate::consts;
use crate::error::PageError;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BehaviorConfig {
    pub toggle_id_prefix: String,
    pub masked_input_type: String,
    pub plain_input_type: String,
    pub icon_tag: String,
    pub icon_masked_class: String,
    pub icon_plain_class: String,
    pub alert_role: String,
    pub dismiss_class: String,
    pub faded_class: String,
    pub fade_ms: u32,
    pub auto_dismiss_ms: u32,
    pub file_input_type: String,
    pub file_name_suffix: String,
    pub hidden_class: String,
    pub year_class: String,
    pub required_attribute: String,
    pub field_error_class: String,
    pub error_message_tag: String,
    pub error_message_classes: String,
    pub error_id_suffix: String,
    pub fallback_field_label: String,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            toggle_id_prefix: consts::TOGGLE_ID_PREFIX.to_owned(),
            masked_input_type: consts::MASKED_INPUT_TYPE.to_owned(),
            plain_input_type: consts::PLAIN_INPUT_TYPE.to_owned(),
            icon_tag: consts::ICON_TAG.to_owned(),
            icon_masked_class: consts::ICON_MASKED_CLASS.to_owned(),
            icon_plain_class: consts::ICON_PLAIN_CLASS.to_owned(),
            alert_role: consts::ALERT_ROLE.to_owned(),
            dismiss_class: consts::DISMISS_CLASS.to_owned(),
            faded_class: consts::FADED_CLASS.to_owned(),
            fade_ms: consts::FADE_MS,
            auto_dismiss_ms: consts::AUTO_DISMISS_MS,
            file_input_type: consts::FILE_INPUT_TYPE.to_owned(),
            file_name_suffix: consts::FILE_NAME_SUFFIX.to_owned(),
            hidden_class: consts::HIDDEN_CLASS.to_owned(),
            year_class: consts::YEAR_CLASS.to_owned(),
            required_attribute: consts::REQUIRED_ATTR.to_owned(),
            field_error_class: consts::FIELD_ERROR_CLASS.to_owned(),
            error_message_tag: consts::ERROR_MESSAGE_TAG.to_owned(),
            error_message_classes: consts::ERROR_MESSAGE_CLASSES.to_owned(),
            error_id_suffix: consts::ERROR_ID_SUFFIX.to_owned(),
            fallback_field_label: consts::FALLBACK_FIELD_LABEL.to_owned(),
        }
    }
}

impl BehaviorConfig {
    /// Parse overrides from a JSON object. Missing keys keep their defaults.
    ///
    /// A zero fade delay is rejected: the fade class would never be visible
    /// before the element disappears.
    pub fn from_json(raw: &str) -> Result<Self, PageError> {
        let config: Self = serde_json::from_str(raw)?;
        if config.fade_ms == 0 {
            return Err(PageError::InvalidConfig("fadeMs must be greater than zero".into()));
        }
        if config.toggle_id_prefix.trim().is_empty() {
            return Err(PageError::InvalidConfig("toggleIdPrefix must not be empty".into()));
        }
        Ok(config)
    }

    /// Id of the element that displays the chosen file name for `input_id`.
    pub fn file_name_id(&self, input_id: &str) -> String {
        format!("{input_id}{}", self.file_name_suffix)
    }

    /// Id of the inline error message for `field_id`.
    pub fn error_id(&self, field_id: &str) -> String {
        format!("{field_id}{}", self.error_id_suffix)
    }
}
