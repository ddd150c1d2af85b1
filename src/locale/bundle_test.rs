use super::*;

fn registry() -> LocaleRegistry {
    LocaleRegistry::parse("ru,en", "ru").unwrap()
}

fn locale(id: &str) -> Locale {
    registry().get(id).unwrap().clone()
}

#[test]
fn empty_bundles_return_the_key() {
    let bundles = MessageBundles::empty(&registry());
    assert_eq!(bundles.translate(&locale("en"), "page.landing.title"), "page.landing.title");
}

#[test]
fn translate_prefers_requested_locale() {
    let mut bundles = MessageBundles::empty(&registry());
    bundles.insert(locale("ru"), Bundle::from([("hello".to_owned(), "Привет".to_owned())]));
    bundles.insert(locale("en"), Bundle::from([("hello".to_owned(), "Hello".to_owned())]));
    assert_eq!(bundles.translate(&locale("en"), "hello"), "Hello");
    assert_eq!(bundles.translate(&locale("ru"), "hello"), "Привет");
}

#[test]
fn translate_falls_back_to_default_locale() {
    let mut bundles = MessageBundles::empty(&registry());
    bundles.insert(locale("ru"), Bundle::from([("only_ru".to_owned(), "Только".to_owned())]));
    assert_eq!(bundles.translate(&locale("en"), "only_ru"), "Только");
}

#[test]
fn load_reads_present_files_and_skips_missing() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("en.json"), r#"{"title":"Welcome"}"#).unwrap();

    let bundles = MessageBundles::load(dir.path(), &registry()).unwrap();
    assert_eq!(bundles.bundle(&locale("en")).and_then(|b| b.get("title")).map(String::as_str), Some("Welcome"));
    assert!(bundles.bundle(&locale("ru")).is_none());
}

#[test]
fn load_rejects_nested_json() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("ru.json"), r#"{"title":{"nested":true}}"#).unwrap();

    let err = MessageBundles::load(dir.path(), &registry()).unwrap_err();
    assert!(matches!(err, BundleError::Parse { .. }));
}
