use trackui::prefs::{
    lookup, CookieJar, FileStore, IndicatorState, KeyValueStore, MemoryStore, PreferenceFlags,
    HINTS,
};
use trackui::storage::Storage;

#[test]
fn set_true_then_set_empty() {
    let mut flags = PreferenceFlags::new(CookieJar::new());

    flags.set_flag(HINTS, "true");
    assert!(flags.is_flag_set(HINTS));

    flags.set_flag(HINTS, "");
    assert!(!flags.is_flag_set(HINTS));
}

#[test]
fn missing_flag_on_empty_store_is_empty_string() {
    let flags = PreferenceFlags::new(CookieJar::from_header(""));
    assert_eq!(flags.get_flag("missing"), "");
    assert_eq!(lookup("", "missing"), "");
}

#[test]
fn toggle_is_its_own_inverse_on_every_backend() {
    fn check<S: KeyValueStore>(store: S) {
        let mut flags = PreferenceFlags::new(store);
        for _ in 0..2 {
            let before = flags.is_flag_set(HINTS);
            flags.toggle_flag(HINTS);
            flags.toggle_flag(HINTS);
            assert_eq!(flags.is_flag_set(HINTS), before);
            flags.toggle_flag(HINTS);
        }
    }

    check(MemoryStore::new());
    check(CookieJar::from_header("theme=dark; hints=true"));

    let dir = tempfile::tempdir().expect("tempdir");
    let storage = Storage::new(dir.path().to_path_buf());
    check(FileStore::open(storage, "prefs.json", "/").expect("open"));
}

#[test]
fn toggle_reports_new_state_for_indicators() {
    let mut flags = PreferenceFlags::new(MemoryStore::new());

    let on = flags.toggle_flag(HINTS);
    assert!(on);
    assert_eq!(IndicatorState::for_flag(on), IndicatorState::for_flag(flags.is_flag_set(HINTS)));

    let off = flags.toggle_flag(HINTS);
    assert!(!off);
    let indicators = IndicatorState::for_flag(off);
    assert!(indicators.enable_control_visible);
    assert!(!indicators.disable_control_visible);
}

#[test]
fn cookie_header_with_noise() {
    let jar = CookieJar::from_header("JSESSIONID=abc123;  hint=; hints=true; broken");
    let flags = PreferenceFlags::new(jar);

    assert!(flags.is_flag_set(HINTS));
    assert!(!flags.is_flag_set("hint"));
    assert!(!flags.is_flag_set("broken"));
    assert_eq!(flags.get_flag("JSESSIONID"), "abc123");
}

#[test]
fn file_store_survives_reopen() {
    let dir = tempfile::tempdir().expect("tempdir");
    let storage = Storage::new(dir.path().to_path_buf());

    let mut flags =
        PreferenceFlags::new(FileStore::open(storage.clone(), "prefs.json", "/").expect("open"));
    assert!(flags.toggle_flag(HINTS));

    let reopened =
        PreferenceFlags::new(FileStore::open(storage, "prefs.json", "/").expect("reopen"));
    assert!(reopened.is_flag_set(HINTS));
}

#[test]
fn corrupt_prefs_file_reads_unset_and_recovers_on_set() {
    let dir = tempfile::tempdir().expect("tempdir");
    let storage = Storage::new(dir.path().to_path_buf());
    std::fs::write(storage.file("prefs.json"), "{not json").expect("write prefs");

    let mut flags =
        PreferenceFlags::new(FileStore::open(storage.clone(), "prefs.json", "/").expect("open"));
    assert!(!flags.is_flag_set(HINTS));
    assert_eq!(flags.get_flag(HINTS), "");

    flags.set_flag(HINTS, "true");
    assert!(flags.is_flag_set(HINTS));

    let reopened =
        PreferenceFlags::new(FileStore::open(storage, "prefs.json", "/").expect("reopen"));
    assert!(reopened.is_flag_set(HINTS));
}
