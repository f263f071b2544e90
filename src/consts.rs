//! Default DOM conventions and delays.

// ── Password toggles ────────────────────────────────────────────

/// Id prefix shared by every password visibility toggle.
pub const TOGGLE_ID_PREFIX: &str = "togglePassword";

/// `type` attribute of a masked password input.
pub const MASKED_INPUT_TYPE: &str = "password";

/// `type` attribute of an unmasked password input.
pub const PLAIN_INPUT_TYPE: &str = "text";

/// Tag of the icon inside a toggle.
pub const ICON_TAG: &str = "i";

/// Icon class shown while the password is masked.
pub const ICON_MASKED_CLASS: &str = "fa-eye";

/// Icon class shown while the password is plain text.
pub const ICON_PLAIN_CLASS: &str = "fa-eye-slash";

// ── Flash messages ──────────────────────────────────────────────

pub const ALERT_ROLE: &str = "alert";
pub const DISMISS_CLASS: &str = "flash-close";
pub const FADED_CLASS: &str = "opacity-0";

/// Delay between the fade class and `display: none`, in milliseconds.
pub const FADE_MS: u32 = 300;

/// Delay after init before every alert is dismissed, in milliseconds.
pub const AUTO_DISMISS_MS: u32 = 5000;

// ── File inputs ─────────────────────────────────────────────────

pub const FILE_INPUT_TYPE: &str = "file";
pub const FILE_NAME_SUFFIX: &str = "-name";
pub const HIDDEN_CLASS: &str = "hidden";

// ── Footer ──────────────────────────────────────────────────────

pub const YEAR_CLASS: &str = "current-year";

// ── Validation ──────────────────────────────────────────────────

pub const REQUIRED_ATTR: &str = "required";
pub const FIELD_ERROR_CLASS: &str = "border-red-500";
pub const ERROR_MESSAGE_TAG: &str = "p";
pub const ERROR_MESSAGE_CLASSES: &str = "text-red-500 text-xs mt-1";
pub const ERROR_ID_SUFFIX: &str = "-error";

/// Label used in the error message when a field has no placeholder.
pub const FALLBACK_FIELD_LABEL: &str = "This field";
