// SPDX-License-Identifier: MPL-2.0
use chopexpress::app::config;
use chopexpress::app::persisted_state::StateStore;
use chopexpress::i18n::format::interpolate;
use chopexpress::i18n::{DetectionConfig, DetectionContext, I18n, Language, LanguageStorage};
use chopexpress::router::{Page, Router};
use chopexpress::ui::notifications::{Kind, Manager, ToastText};
use std::fs;
use std::time::{Duration, Instant};
use tempfile::tempdir;

fn context_without_signals() -> DetectionContext {
    DetectionContext::default()
}

#[test]
fn unknown_path_renders_menu_page() {
    let router = Router::default();
    assert_eq!(router.match_path("/unknown-path"), Page::Menu);
    assert_eq!(router.match_path("/unknown-path"), router.match_path("/menu"));
    assert_eq!(router.match_path("/Orders/?tab=open"), Page::Orders);
}

#[test]
fn chosen_language_survives_restart_through_state_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let data_dir = Some(dir.path().to_path_buf());

    let (store, warning) = StateStore::open(data_dir.clone());
    assert!(warning.is_none());
    let mut i18n = I18n::new(DetectionConfig::default(), Language::Fr, Box::new(store));
    assert_eq!(i18n.resolve(&context_without_signals()), Language::Fr);
    i18n.set_language(Language::En);

    // Fresh context over the same directory, as after a restart.
    let (store, warning) = StateStore::open(data_dir);
    assert!(warning.is_none());
    assert_eq!(store.get("chopexpress-language").as_deref(), Some("en"));
    let mut reloaded = I18n::new(DetectionConfig::default(), Language::Fr, Box::new(store));
    assert_eq!(reloaded.resolve(&context_without_signals()), Language::En);
    assert_eq!(reloaded.tr("nav.settings"), "Settings");
}

#[test]
fn configured_fallback_applies_when_nothing_is_detected() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(
        dir.path().join("settings.toml"),
        "[i18n]\nfallback_language = \"en\"\n\n[i18n.detection]\norder = [\"html-tag\"]\n",
    )
    .expect("write settings");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none(), "unexpected warning: {warning:?}");

    let (store, _) = StateStore::open(Some(dir.path().to_path_buf()));
    let mut i18n = I18n::new(
        config.i18n.detection,
        config.i18n.fallback_language,
        Box::new(store),
    );
    assert_eq!(i18n.resolve(&context_without_signals()), Language::En);

    let hinted = DetectionContext {
        html_tag: Some("fr-CM".into()),
        ..DetectionContext::default()
    };
    assert_eq!(i18n.resolve(&hinted), Language::Fr);
}

#[test]
fn missing_keys_fall_back_to_literal() {
    let i18n = I18n::default();
    assert!(!i18n.tr("menu.title").is_empty());
    assert_eq!(i18n.tr_or("menu.does_not_exist", "X"), "X");
}

#[test]
fn currency_in_french_groups_thousands_without_decimals() {
    let rendered = interpolate("{{price, currency}}", &[("price", "1000")], Language::Fr);
    assert!(rendered.contains("1 000"), "got {rendered}");
    assert!(rendered.contains("FCFA"), "got {rendered}");
    assert!(!rendered.contains(','), "got {rendered}");
}

#[test]
fn success_toast_lifetime_is_bounded() {
    let mut manager = Manager::new();
    let start = Instant::now();
    manager.notify(
        Kind::Success,
        ToastText::Plain("Commande envoyée".into()),
        None,
        start,
    );

    manager.tick(start + Duration::from_millis(2999));
    assert_eq!(manager.visible_count(), 1);

    manager.tick(start + Duration::from_millis(3000));
    assert_eq!(manager.visible_count(), 0);
}
