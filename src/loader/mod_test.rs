use super::*;
use crate::error::ColoringError;
use std::fs;

const COMPARISON: &str = r#"{
    "id1": "alice",
    "id2": "bob",
    "similarities": { "AVG": 0.61, "MAX": 0.72 },
    "matches": [
        { "file1": "src\\Main.java", "file2": "src/Main.java",
          "start1": 0, "end1": 10, "start2": 0, "end2": 10, "tokens": 10 },
        { "file1": "src\\Main.java", "file2": "src/Main.java",
          "start1": 20, "end1": 25, "start2": 20, "end2": 25, "tokens": 5 },
        { "file1": "src\\Main.java", "file2": "src/Main.java",
          "start1": 40, "end1": 60, "start2": 40, "end2": 60, "tokens": 20 }
    ]
}"#;

#[test]
fn parse_valid_comparison() {
    let raw = parse_comparison(COMPARISON).unwrap();
    assert_eq!(raw.id1, "alice");
    assert_eq!(raw.id2, "bob");
    assert_eq!(raw.matches.len(), 3);
    assert!(raw.similarity.is_none());
}

#[test]
fn missing_field_is_malformed() {
    let json = r#"{ "id1": "a", "id2": "b", "similarity": 0.5,
        "matches": [ { "file1": "x", "file2": "y", "start1": 0 } ] }"#;
    let err = parse_comparison(json).unwrap_err();
    assert!(matches!(err, LoadError::MalformedInput { .. }));
    assert!(err.to_string().starts_with("malformed comparison"));
}

#[test]
fn negative_offset_is_malformed() {
    let json = r#"{ "id1": "a", "id2": "b", "similarity": 0.5,
        "matches": [ { "file1": "x", "file2": "y", "start1": -1, "end1": 2,
                       "start2": 0, "end2": 2, "tokens": 2 } ] }"#;
    assert!(matches!(
        parse_comparison(json),
        Err(LoadError::MalformedInput { .. })
    ));
}

#[test]
fn similarities_from_map() {
    let raw = parse_comparison(COMPARISON).unwrap();
    let similarities = extract_similarities(&raw).unwrap();
    assert_eq!(similarities.len(), 2);
    assert_eq!(similarities[&MetricType::Average], 0.61);
    assert_eq!(similarities[&MetricType::Maximum], 0.72);
}

#[test]
fn unknown_metric_keys_skipped() {
    let json = r#"{ "id1": "a", "id2": "b",
        "similarities": { "AVG": 0.4, "MEDIAN": 0.9, "LONGEST_MATCH": 12.0 },
        "matches": [] }"#;
    let similarities = extract_similarities(&parse_comparison(json).unwrap()).unwrap();
    assert_eq!(similarities.len(), 2);
    assert_eq!(similarities[&MetricType::Average], 0.4);
    assert_eq!(similarities[&MetricType::LongestMatch], 12.0);
}

#[test]
fn legacy_single_value_spread_over_average_and_maximum() {
    let json = r#"{ "id1": "a", "id2": "b", "similarity": 0.35, "matches": [] }"#;
    let similarities = extract_similarities(&parse_comparison(json).unwrap()).unwrap();
    assert_eq!(similarities.len(), 2);
    assert_eq!(similarities[&MetricType::Average], 0.35);
    assert!(similarities[&MetricType::Maximum].is_nan());
}

#[test]
fn legacy_zero_similarity_is_still_data() {
    let json = r#"{ "id1": "a", "id2": "b", "similarity": 0.0, "matches": [] }"#;
    let similarities = extract_similarities(&parse_comparison(json).unwrap()).unwrap();
    assert_eq!(similarities[&MetricType::Average], 0.0);
}

#[test]
fn map_preferred_over_legacy_value() {
    let json = r#"{ "id1": "a", "id2": "b", "similarity": 0.1,
        "similarities": { "MAX": 0.8 }, "matches": [] }"#;
    let similarities = extract_similarities(&parse_comparison(json).unwrap()).unwrap();
    assert_eq!(similarities.len(), 1);
    assert_eq!(similarities[&MetricType::Maximum], 0.8);
}

#[test]
fn no_similarity_data() {
    let json = r#"{ "id1": "a", "id2": "b", "matches": [] }"#;
    let err = extract_similarities(&parse_comparison(json).unwrap()).unwrap_err();
    match err {
        LoadError::NoSimilarityData { first, second } => {
            assert_eq!(first, "a");
            assert_eq!(second, "b");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn to_match_normalizes_paths() {
    let raw = RawMatch {
        file1: r"pkg\sub\A.java".to_string(),
        file2: "pkg/sub/B.java".to_string(),
        start1: 1,
        end1: 9,
        start2: 3,
        end2: 11,
        tokens: 8,
    };
    let m = to_match(&raw);
    assert_eq!(m.first_file, "pkg/sub/A.java");
    assert_eq!(m.second_file, "pkg/sub/B.java");
    assert_eq!(
        (m.start_in_first, m.end_in_first, m.start_in_second, m.end_in_second),
        (1, 9, 3, 11)
    );
    assert_eq!(m.tokens, 8);
}

#[test]
fn build_comparison_colors_matches_by_size() {
    let raw = parse_comparison(COMPARISON).unwrap();
    let comparison = build_comparison(raw, vec![], vec![], 3).unwrap();

    assert_eq!(comparison.first_submission_id, "alice");
    assert_eq!(comparison.second_submission_id, "bob");
    assert_eq!(comparison.similarities[&MetricType::Average], 0.61);

    let tokens: Vec<usize> = comparison.matches.iter().map(|m| m.region.tokens).collect();
    assert_eq!(tokens, vec![5, 10, 20]);
    let colors: Vec<usize> = comparison.matches.iter().map(|m| m.color_index).collect();
    assert_eq!(colors, vec![1, 0, 2]);
    assert!(
        comparison
            .matches
            .iter()
            .all(|m| m.region.first_file == "src/Main.java")
    );
}

#[test]
fn build_comparison_propagates_infeasible_coloring() {
    let raw = parse_comparison(COMPARISON).unwrap();
    let err = build_comparison(raw, vec![], vec![], 2).unwrap_err();
    assert!(matches!(
        err,
        LoadError::Coloring(ColoringError::Infeasible { .. })
    ));
}

#[test]
fn build_comparison_keeps_submission_files() {
    let raw = parse_comparison(COMPARISON).unwrap();
    let files = vec![SubmissionFile {
        name: "src/Main.java".to_string(),
        content: "class Main {}".to_string(),
    }];
    let comparison = build_comparison(raw, files.clone(), vec![], 7).unwrap();
    assert_eq!(comparison.files_of_first_submission, files);
    assert!(comparison.files_of_second_submission.is_empty());
}

#[test]
fn load_comparison_file_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("alice-bob.json");
    fs::write(&path, COMPARISON).unwrap();

    let comparison = load_comparison_file(&path, 7).unwrap();
    assert_eq!(comparison.matches.len(), 3);
    assert!(comparison.files_of_first_submission.is_empty());
}

#[test]
fn load_missing_comparison_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_comparison_file(&dir.path().join("nope.json"), 7).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
}
