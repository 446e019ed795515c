pub(super) fn default_name() -> String {
    "madrasa".to_string()
}
pub(super) fn default_log_level() -> String {
    "info".to_string()
}
pub(super) fn default_locale() -> String {
    "ar".to_string()
}
pub(super) fn default_pseudo_locale() -> String {
    "pseudo".to_string()
}
pub(super) fn default_rtl_locales() -> Vec<String> {
    vec!["ar".into()]
}
pub(super) fn default_override_env() -> String {
    "MADRASA_TEST_LOCALE".to_string()
}
