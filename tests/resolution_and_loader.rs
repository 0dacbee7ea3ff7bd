use std::fs;
use std::io::Write;
use std::sync::{Arc, Mutex};

use once_cell::sync::Lazy;
use scenario_engine::step::Captures;
use scenario_engine::{step, FeatureLoader, FilesystemFeatureLoader, LoaderError, World};

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

#[test]
fn named_capture_groups_reach_the_handler() {
    let _guard = TEST_LOCK.lock().unwrap();
    step::clear();
    let seen = Arc::new(Mutex::new(None));
    let captured = Arc::clone(&seen);
    step::register(
        r#"^When a (?P<what>\w+) at "(?P<city>.*)"$"#,
        Arc::new(move |_s, captures: &Captures, _w: &mut World| {
            if let Captures::Named(map) = captures {
                *captured.lock().unwrap() = Some(map.clone());
            }
            Ok(())
        }),
    )
    .unwrap();

    let resolved = step::resolve_sentence(r#"When a foreign at "Rio de Janeiro""#, true).unwrap();
    (resolved.handler)(
        &scenario_engine::Step {
            keyword: scenario_engine::Keyword::When,
            keyword_text: "When".into(),
            sentence: r#"When a foreign at "Rio de Janeiro""#.into(),
            table: None,
            docstring: None,
            line: 1,
        },
        &resolved.captures,
        &mut World::new(),
    )
    .unwrap();

    let map = seen.lock().unwrap().clone().unwrap();
    assert_eq!(map.get("what").map(String::as_str), Some("foreign"));
    assert_eq!(map.get("city").map(String::as_str), Some("Rio de Janeiro"));
    step::clear();
}

#[test]
fn invalid_pattern_registration_raises_step_loading_error() {
    let _guard = TEST_LOCK.lock().unwrap();
    step::clear();
    let err = step::register(
        "invalid step regex(.*",
        Arc::new(|_s, _c, _w: &mut World| Ok(())),
    )
    .unwrap_err();
    assert_eq!(err.pattern, "invalid step regex(.*");
    step::clear();
}

#[test]
fn loader_reads_and_parses_every_feature_file_sorted_by_path() {
    let dir = tempfile::tempdir().unwrap();
    fs::File::create(dir.path().join("b.feature"))
        .unwrap()
        .write_all(b"Feature: B\n  Scenario: S\n    Given b\n")
        .unwrap();
    fs::File::create(dir.path().join("a.feature"))
        .unwrap()
        .write_all(b"Feature: A\n  Scenario: S\n    Given a\n")
        .unwrap();

    let loader = FilesystemFeatureLoader::new();
    let features = loader.load(dir.path()).unwrap();
    assert_eq!(features.len(), 2);
    assert_eq!(features[0].name, "A");
    assert_eq!(features[1].name, "B");
}

#[test]
fn loader_wraps_a_parse_failure_in_loader_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::File::create(dir.path().join("broken.feature"))
        .unwrap()
        .write_all(b"not a feature at all\n")
        .unwrap();

    let loader = FilesystemFeatureLoader::new();
    let err = loader.load(dir.path()).unwrap_err();
    assert!(matches!(err, LoaderError::Parse(_)));
}
