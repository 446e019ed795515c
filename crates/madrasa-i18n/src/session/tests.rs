use super::*;
use madrasa_core::overrides::{EnvOverride, MemoryOverride, NoOverride};
use serde_json::json;

fn registry() -> Arc<LocaleRegistry> {
    Arc::new(
        LocaleRegistry::builder()
            .insert(
                "ar",
                LocaleTable::from_value(&json!({
                    "app": { "installApp": "تثبيت" },
                    "dashboard": { "welcome": "مرحباً {name}" }
                }))
                .unwrap(),
            )
            .insert(
                "en",
                LocaleTable::from_value(&json!({
                    "dashboard": { "welcome": "Hello {name}" }
                }))
                .unwrap(),
            )
            .ensure("pseudo")
            .build(),
    )
}

fn session() -> TranslationSession {
    TranslationSession::init(registry(), &I18nConfig::default(), Arc::new(NoOverride)).unwrap()
}

#[test]
fn test_starts_on_default_locale() {
    let s = session();
    assert_eq!(s.locale(), "ar");
    assert_eq!(s.direction(), Direction::Rtl);
    assert!(!s.is_pseudo());
}

#[test]
fn test_end_to_end_scenario() {
    let registry = Arc::new(
        LocaleRegistry::builder()
            .insert(
                "ar",
                LocaleTable::from_value(&json!({"app": {"installApp": "تثبيت"}})).unwrap(),
            )
            .insert("pseudo", LocaleTable::from_value(&json!({})).unwrap())
            .build(),
    );
    let s = TranslationSession::init(registry, &I18nConfig::default(), Arc::new(NoOverride))
        .unwrap();

    s.set_locale("ar").unwrap();
    assert_eq!(s.t_plain("app.installApp"), "تثبيت");

    s.set_locale("pseudo").unwrap();
    assert_eq!(s.t_plain("app.installApp"), "[MISSING: app.installApp]");
}

#[test]
fn test_direction_follows_locale() {
    let s = session();
    s.set_locale("en").unwrap();
    assert_eq!(s.direction(), Direction::Ltr);
    s.set_locale("ar").unwrap();
    assert_eq!(s.direction(), Direction::Rtl);
    s.set_locale("pseudo").unwrap();
    assert_eq!(s.direction(), Direction::Ltr);
}

#[test]
fn test_invalid_locale_rejected_and_kept() {
    let s = session();
    s.set_locale("en").unwrap();
    let err = s.set_locale("xx").unwrap_err();
    assert!(matches!(err, MadrasaError::InvalidLocale(ref l) if l == "xx"));
    assert_eq!(s.locale(), "en");
    assert_eq!(s.direction(), Direction::Ltr);
}

#[test]
fn test_missing_key_in_real_locale_returns_key() {
    let s = session();
    assert_eq!(s.t_plain("nav.unknown"), "nav.unknown");
}

#[test]
fn test_t_with_params() {
    let s = session();
    let params = Params::new().with("name", "Sara");
    assert_eq!(s.t("dashboard.welcome", &params), "مرحباً Sara");
    s.set_locale("en").unwrap();
    assert_eq!(s.t("dashboard.welcome", &params), "Hello Sara");
    assert_eq!(s.t_plain("dashboard.welcome"), "Hello {name}");
}

#[test]
fn test_t_macro() {
    let s = session();
    s.set_locale("en").unwrap();
    assert_eq!(crate::t!(s, "dashboard.welcome", name = "Omar"), "Hello Omar");
    assert_eq!(crate::t!(s, "dashboard.welcome"), "Hello {name}");
}

#[test]
fn test_unknown_default_locale_fails_init() {
    let config = I18nConfig {
        default_locale: "fr".to_string(),
        ..Default::default()
    };
    let err = TranslationSession::init(registry(), &config, Arc::new(NoOverride)).unwrap_err();
    assert!(matches!(err, MadrasaError::UnknownLocale(ref l) if l == "fr"));
}

#[test]
fn test_override_forces_pseudo_locale() {
    let store = Arc::new(MemoryOverride::with_value("pseudo"));
    let s = TranslationSession::init(registry(), &I18nConfig::default(), store).unwrap();
    assert_eq!(s.locale(), "pseudo");
    assert!(s.is_pseudo());
    assert_eq!(s.t_plain("app.installApp"), "[MISSING: app.installApp]");
}

#[test]
fn test_unregistered_override_ignored() {
    let store = Arc::new(MemoryOverride::with_value("klingon"));
    let s = TranslationSession::init(registry(), &I18nConfig::default(), store).unwrap();
    assert_eq!(s.locale(), "ar");
}

#[test]
fn test_override_read_only_at_init() {
    let store = Arc::new(MemoryOverride::new());
    let s = TranslationSession::init(registry(), &I18nConfig::default(), store.clone()).unwrap();
    store.record("pseudo");
    assert_eq!(s.locale(), "ar");
}

#[test]
fn test_pseudo_switch_is_persisted_and_cleared() {
    let store = Arc::new(MemoryOverride::new());
    let s = TranslationSession::init(registry(), &I18nConfig::default(), store.clone()).unwrap();

    s.set_locale("pseudo").unwrap();
    assert_eq!(store.read().as_deref(), Some("pseudo"));

    // The next session restores the pseudo locale.
    let next = TranslationSession::init(registry(), &I18nConfig::default(), store.clone()).unwrap();
    assert_eq!(next.locale(), "pseudo");

    s.set_locale("en").unwrap();
    assert_eq!(store.read(), None);
}

#[test]
fn test_switching_between_real_locales_keeps_override() {
    let store = Arc::new(MemoryOverride::with_value("en"));
    let s = TranslationSession::init(registry(), &I18nConfig::default(), store.clone()).unwrap();
    s.set_locale("ar").unwrap();
    assert_eq!(store.read().as_deref(), Some("en"));
}

#[test]
fn test_env_override() {
    let var = "__MADRASA_TEST_SESSION_OVERRIDE__";
    std::env::set_var(var, "pseudo");
    let s = TranslationSession::init(
        registry(),
        &I18nConfig::default(),
        Arc::new(EnvOverride::new(var)),
    )
    .unwrap();
    std::env::remove_var(var);
    assert_eq!(s.locale(), "pseudo");
}

#[test]
fn test_custom_rtl_locales() {
    let config = I18nConfig {
        default_locale: "en".to_string(),
        rtl_locales: vec!["en".to_string()],
        ..Default::default()
    };
    let s = TranslationSession::init(registry(), &config, Arc::new(NoOverride)).unwrap();
    assert_eq!(s.direction(), Direction::Rtl);
}

#[test]
fn test_direction_follows_config_rtl_list() {
    let config = I18nConfig {
        rtl_locales: vec!["ar".to_string(), "fa".to_string()],
        ..Default::default()
    };
    assert_eq!(Direction::of("fa", &config), Direction::Rtl);
    assert_eq!(Direction::of("ar", &config), Direction::Rtl);
    assert_eq!(Direction::of("en", &config), Direction::Ltr);
    assert_eq!(Direction::of("pseudo", &config), Direction::Ltr);
}

#[test]
fn test_direction_display_and_serialize() {
    assert_eq!(Direction::Rtl.to_string(), "rtl");
    assert_eq!(Direction::Ltr.as_str(), "ltr");
    assert_eq!(serde_json::to_string(&Direction::Rtl).unwrap(), "\"rtl\"");
}

#[test]
fn test_concurrent_switches_stay_consistent() {
    let s = Arc::new(session());
    let mut handles = Vec::new();

    for i in 0..4 {
        let s = Arc::clone(&s);
        handles.push(std::thread::spawn(move || {
            for j in 0..200 {
                let locale = if (i + j) % 2 == 0 { "ar" } else { "en" };
                s.set_locale(locale).unwrap();
                let (current, direction) = s.snapshot();
                let expected = if current == "ar" {
                    Direction::Rtl
                } else {
                    Direction::Ltr
                };
                assert_eq!(direction, expected);
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }
    assert!(["ar", "en"].contains(&s.locale().as_str()));
}
