/// Test-override store, where QA tooling parks a forced locale.
///
/// A translation session reads the override exactly once, when it is
/// initialized. Switching to or away from the pseudo locale writes back
/// through `record`/`clear` so the next session starts in the same mode.
/// Read-only sources keep the default no-op writers.
pub trait OverrideStore: Send + Sync {
    /// Human-readable store name (for logs).
    fn name(&self) -> &str;

    /// The forced locale, if one is set.
    fn read(&self) -> Option<String>;

    /// Remember `locale` as the forced locale.
    fn record(&self, _locale: &str) {}

    /// Forget any forced locale.
    fn clear(&self) {}
}
