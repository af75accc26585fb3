//! Integration tests for the locale translator
//!
//! These tests drive the public API end to end: a source document on disk,
//! a mocked translation backend, and the documents written per locale.

use std::time::Duration;
use tempfile::TempDir;
use wiremock::{
    matchers::{method, query_param},
    Mock, MockServer, ResponseTemplate,
};

use locale_translator::config::Config;
use locale_translator::document::{load_document, write_document};
use locale_translator::i18n::Locale;
use locale_translator::orchestrator;
use locale_translator::synthetic;
use locale_translator::tree::{flatten, KeyPath, ResourceTree};

// ==================== Test Helpers ====================

/// Create a test config pointing at a temp locales dir and a mock backend
fn create_test_config(api_url: &str, temp_dir: &TempDir) -> Config {
    Config {
        locales_dir: temp_dir.path().to_path_buf(),
        translate_api_url: api_url.to_string(),
        chunk_size: 30,
        throttle: Duration::ZERO,
    }
}

fn create_translate_response(text: &str) -> serde_json::Value {
    serde_json::json!([[[text, "source", null, null, 10]], null, "en"])
}

fn parse(json: &str) -> ResourceTree {
    serde_json::from_str(json).expect("valid test document")
}

const SOURCE: &str = r#"{"header":{"title":"Hello"},"common":{"save":"Save"}}"#;

/// Write the source document where the binaries expect it
fn write_source(config: &Config, json: &str) -> ResourceTree {
    let tree = parse(json);
    write_document(&config.source_path(), &tree).expect("write source");
    tree
}

fn dotted_paths(tree: &ResourceTree) -> Vec<String> {
    flatten(tree).paths.iter().map(|p| p.to_string()).collect()
}

// ==================== Extraction ====================

#[test]
fn test_extraction_of_loaded_source() {
    let temp_dir = TempDir::new().unwrap();
    let config = create_test_config("http://unused.test", &temp_dir);
    write_source(&config, SOURCE);

    let source = load_document(&config.source_path()).unwrap();
    let extraction = flatten(&source);

    assert_eq!(extraction.values, vec!["Hello", "Save"]);
    assert_eq!(dotted_paths(&source), vec!["header.title", "common.save"]);
}

// ==================== Translation Pipeline ====================

#[tokio::test]
async fn test_full_translation_to_danish() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("tl", "da"))
        .and(query_param("q", "Hello ||| Save"))
        .respond_with(ResponseTemplate::new(200).set_body_json(create_translate_response("Hej ||| Gem")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let temp_dir = TempDir::new().unwrap();
    let config = create_test_config(&format!("{}/translate_a/single", mock_server.uri()), &temp_dir);
    let source = write_source(&config, SOURCE);

    let locales = vec![Locale::from_code("da").unwrap()];
    orchestrator::run(&reqwest::Client::new(), &config, &source, &locales)
        .await
        .unwrap();

    let danish = load_document(&temp_dir.path().join("da").join("translation.json")).unwrap();
    assert_eq!(danish, parse(r#"{"header":{"title":"Hej"},"common":{"save":"Gem"}}"#));

    // Source document on disk is untouched
    assert_eq!(load_document(&config.source_path()).unwrap(), source);
}

#[tokio::test]
async fn test_short_response_falls_back_for_missing_tail() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(create_translate_response("Hej")))
        .mount(&mock_server)
        .await;

    let temp_dir = TempDir::new().unwrap();
    let config = create_test_config(&format!("{}/translate_a/single", mock_server.uri()), &temp_dir);
    let source = write_source(&config, SOURCE);

    let locales = vec![Locale::from_code("da").unwrap()];
    let (_, report) = orchestrator::run(&reqwest::Client::new(), &config, &source, &locales)
        .await
        .unwrap();

    let danish = load_document(&temp_dir.path().join("da").join("translation.json")).unwrap();
    assert_eq!(danish, parse(r#"{"header":{"title":"Hej"},"common":{"save":"Save"}}"#));
    assert_eq!(report.segments_padded, 1);
}

#[tokio::test]
async fn test_shape_is_preserved_across_chunks_and_failures() {
    let mock_server = MockServer::start().await;
    // First chunk translated, every later chunk fails
    Mock::given(method("GET"))
        .and(query_param("q", "s0 ||| s1 ||| s2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(create_translate_response("t0 ||| t1 ||| t2 ||| t3")))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&mock_server)
        .await;

    let temp_dir = TempDir::new().unwrap();
    let mut config = create_test_config(&format!("{}/translate_a/single", mock_server.uri()), &temp_dir);
    config.chunk_size = 3;

    let mut source = ResourceTree::empty_node();
    for group in 0..3 {
        let mut node = ResourceTree::empty_node();
        for item in 0..3 {
            node.insert(format!("k{}", item), ResourceTree::Leaf(format!("s{}", group * 3 + item)));
        }
        source.insert(format!("g{}", group), node);
    }
    write_document(&config.source_path(), &source).unwrap();

    let locales = vec![Locale::from_code("fi").unwrap()];
    let (summaries, report) = orchestrator::run(&reqwest::Client::new(), &config, &source, &locales)
        .await
        .unwrap();

    assert_eq!(summaries[0].chunks, 3);
    assert_eq!(summaries[0].fallback_chunks, 2);
    assert_eq!(report.segments_truncated, 1);

    let finnish = load_document(&temp_dir.path().join("fi").join("translation.json")).unwrap();
    assert_eq!(dotted_paths(&finnish), dotted_paths(&source));
    assert_eq!(flatten(&finnish).values, vec!["t0", "t1", "t2", "s3", "s4", "s5", "s6", "s7", "s8"]);
}

#[tokio::test]
async fn test_rerun_overwrites_previous_output() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(create_translate_response("Hej ||| Gem")))
        .mount(&mock_server)
        .await;

    let temp_dir = TempDir::new().unwrap();
    let config = create_test_config(&format!("{}/translate_a/single", mock_server.uri()), &temp_dir);
    let source = write_source(&config, SOURCE);
    let output = temp_dir.path().join("da").join("translation.json");
    write_document(&output, &parse(r#"{"stale":"entry"}"#)).unwrap();

    let locales = vec![Locale::from_code("da").unwrap()];
    orchestrator::run(&reqwest::Client::new(), &config, &source, &locales)
        .await
        .unwrap();

    let danish = load_document(&output).unwrap();
    assert!(danish.get("stale").is_none());
    assert_eq!(dotted_paths(&danish), dotted_paths(&source));
}

#[test]
fn test_malformed_source_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let config = create_test_config("http://unused.test", &temp_dir);
    std::fs::create_dir_all(temp_dir.path().join("en")).unwrap();
    std::fs::write(config.source_path(), "{ not json").unwrap();

    let err = load_document(&config.source_path()).unwrap_err();
    assert!(err.to_string().contains("Failed to load resource document"));
}

// ==================== Synthetic Locale ====================

#[test]
fn test_synthetic_report_for_new_source_leaf() {
    let temp_dir = TempDir::new().unwrap();
    let config = create_test_config("http://unused.test", &temp_dir);
    let source = write_source(
        &config,
        r#"{"header":{"title":"Hello"},"common":{"save":"Save","cancel":"Cancel"}}"#,
    );
    write_document(
        &config.synthetic_path(),
        &parse(r#"{"header":{"title":"QaQ"},"common":{"save":"choD"}}"#),
    )
    .unwrap();

    let report = synthetic::audit(&config, &source).unwrap();

    let missing: Vec<(String, String)> = report
        .iter()
        .map(|(p, v)| (p.to_string(), v.to_string()))
        .collect();
    assert_eq!(missing, vec![("common.cancel".to_string(), "Cancel".to_string())]);
    assert_eq!(
        serde_json::to_string(&report.to_tree()).unwrap(),
        r#"{"common":{"cancel":"Cancel"}}"#
    );
}

#[test]
fn test_synthetic_first_run_seeds_curated_document() {
    let temp_dir = TempDir::new().unwrap();
    let config = create_test_config("http://unused.test", &temp_dir);
    let source = write_source(
        &config,
        r#"{"header":{"title":"Hello","tagline":"Get things done"},"common":{"delete":"Delete"}}"#,
    );

    let report = synthetic::audit(&config, &source).unwrap();

    let curated = load_document(&config.synthetic_path()).unwrap();
    assert_eq!(
        curated.at(&KeyPath::from("header.title")).and_then(ResourceTree::as_leaf),
        Some("QaQ")
    );
    assert_eq!(
        curated.at(&KeyPath::from("common.delete")).and_then(ResourceTree::as_leaf),
        Some("Qaw'")
    );
    assert_eq!(report.len(), 1);
    assert_eq!(report.get(&KeyPath::from("header.tagline")), Some("Get things done"));
}
