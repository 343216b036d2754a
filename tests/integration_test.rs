/// Integration tests for the application layer
mod test_utilities;

use sbom_compare::prelude::*;
use test_utilities::mocks::*;

const COMPARISON_BODY: &str = r#"{
  "targetSbom": "target.json",
  "diffReports": [
    {
      "sbomConflict": { "conflictTypes": ["AUTHOR_MISMATCH"], "conflicts": [] },
      "componentConflicts": [
        {
          "componentA": { "name": "openssl", "version": "3.0.1" },
          "componentB": { "name": "openssl", "version": "1.1.1" },
          "conflictTypes": ["COMPONENT_VERSION_MISMATCH"],
          "conflicts": []
        }
      ]
    }
  ],
  "comparisons": {
    "zlib": [
      { "componentName": "zlib", "componentVersion": "1.3", "appearances": [0, 1, 2] }
    ],
    "openssl": [
      {
        "componentName": "openssl",
        "componentVersion": "3.0.1",
        "appearances": [0, 2],
        "purls": { "pkg:generic/openssl@3.0.1": { "appearances": [0, 2] } },
        "cpes": { "cpe:2.3:a:openssl:openssl:3.0.1": { "appearances": [0] } }
      },
      { "componentName": "openssl", "componentVersion": "1.1.1", "appearances": [1] }
    ],
    "curl": [
      {
        "componentName": "curl",
        "componentVersion": "8.4.0",
        "appearances": [0, 1, 2],
        "swids": { "swid:curl-8.4.0": { "appearances": [0, 1] } }
      }
    ]
  }
}"#;

fn three_documents() -> MockDocumentFetcher {
    MockDocumentFetcher::new()
        .with_document("target.json", r#"{"bomFormat":"CycloneDX"}"#)
        .with_document("a.json", r#"{"spdxVersion":"SPDX-2.3"}"#)
        .with_document("b.json", r#"{"bomFormat":"CycloneDX"}"#)
}

#[tokio::test]
async fn test_compare_happy_path() {
    let compare_service = MockCompareService::returning_json(COMPARISON_BODY);
    let progress_reporter = MockProgressReporter::new();

    let use_case = CompareDocumentsUseCase::new(
        three_documents(),
        compare_service.clone(),
        progress_reporter.clone(),
    );

    let request = CompareRequest::new("target.json", ["a.json", "b.json"]).unwrap();
    let response = use_case.execute(request).await.unwrap();

    assert_eq!(response.document_count(), 3);
    assert_eq!(response.comparison.comparisons.len(), 3);
    assert_eq!(response.comparison.target_sbom.as_deref(), Some("target.json"));
    assert_eq!(compare_service.call_count(), 1);

    assert_eq!(progress_reporter.progress(), vec![(1, 3), (2, 3), (3, 3)]);
    assert!(progress_reporter.errors().is_empty());
    assert_eq!(progress_reporter.completions().len(), 1);
    assert!(progress_reporter.completions()[0].contains("3 component(s) across 3 document(s)"));
}

#[tokio::test]
async fn test_payload_is_target_first_regardless_of_fetch_order() {
    // The target finishes last, the first "other" finishes first
    let fetcher = MockDocumentFetcher::new()
        .with_delayed_document("target.json", 60, "T")
        .with_delayed_document("a.json", 0, "A")
        .with_delayed_document("b.json", 30, "B");
    let compare_service = MockCompareService::returning(Comparison::default());
    let progress_reporter = MockProgressReporter::new();

    let use_case = CompareDocumentsUseCase::new(
        fetcher.clone(),
        compare_service.clone(),
        progress_reporter.clone(),
    );

    let request = CompareRequest::new("target.json", ["a.json", "b.json"]).unwrap();
    use_case.execute(request).await.unwrap();

    assert_eq!(fetcher.completion_order(), vec!["a.json", "b.json", "target.json"]);
    // Progress follows completion order; the payload does not
    assert_eq!(
        progress_reporter.progressed_documents(),
        vec!["a.json", "b.json", "target.json"]
    );
    assert_eq!(progress_reporter.progress(), vec![(1, 3), (2, 3), (3, 3)]);

    let payloads = compare_service.payloads();
    assert_eq!(payloads.len(), 1);
    assert_eq!(
        payloads[0].decoded_file_names().unwrap(),
        vec!["target.json", "a.json", "b.json"]
    );
    assert_eq!(payloads[0].decoded_contents().unwrap(), vec!["T", "A", "B"]);
}

#[tokio::test]
async fn test_fetch_failure_never_reaches_the_service() {
    let fetcher = MockDocumentFetcher::new()
        .with_document("target.json", "{}")
        .with_failure("missing.json", "No such file or directory");
    let compare_service = MockCompareService::returning(Comparison::default());
    let progress_reporter = MockProgressReporter::new();

    let use_case = CompareDocumentsUseCase::new(
        fetcher,
        compare_service.clone(),
        progress_reporter.clone(),
    );

    let request = CompareRequest::new("target.json", ["missing.json"]).unwrap();
    let err = use_case.execute(request).await.unwrap_err();

    match err.downcast_ref::<CompareError>() {
        Some(CompareError::Fetch { document, details }) => {
            assert_eq!(document, "missing.json");
            assert!(details.contains("No such file or directory"));
        }
        other => panic!("expected a fetch error, got {:?}", other),
    }
    assert_eq!(compare_service.call_count(), 0);
    assert!(progress_reporter
        .errors()
        .iter()
        .any(|m| m.contains("missing.json")));
    assert!(progress_reporter.completions().is_empty());
}

#[tokio::test]
async fn test_service_failure_is_a_request_error() {
    let use_case = CompareDocumentsUseCase::new(
        three_documents(),
        MockCompareService::with_failure("status 503 Service Unavailable"),
        MockProgressReporter::new(),
    );

    let request = CompareRequest::new("target.json", ["a.json", "b.json"]).unwrap();
    let err = use_case.execute(request).await.unwrap_err();

    assert!(matches!(
        err.downcast_ref::<CompareError>(),
        Some(CompareError::Request { .. })
    ));
    assert!(err.to_string().contains("503"));
}

#[tokio::test]
async fn test_out_of_range_appearance_is_malformed() {
    let body = r#"{
      "comparisons": {
        "zlib": [ { "componentName": "zlib", "componentVersion": "1.3", "appearances": [0, 5] } ]
      }
    }"#;
    let use_case = CompareDocumentsUseCase::new(
        three_documents(),
        MockCompareService::returning_json(body),
        MockProgressReporter::new(),
    );

    let request = CompareRequest::new("target.json", ["a.json", "b.json"]).unwrap();
    let err = use_case.execute(request).await.unwrap_err();

    match err.downcast_ref::<CompareError>() {
        Some(CompareError::MalformedResponse { details, .. }) => {
            assert!(details.contains("zlib@1.3"));
            assert!(details.contains('5'));
        }
        other => panic!("expected a malformed response, got {:?}", other),
    }
}

#[tokio::test]
async fn test_duplicate_target_is_rejected_before_fetching() {
    let result = CompareRequest::new("target.json", ["target.json"]);
    let err = result.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<CompareError>(),
        Some(CompareError::Validation { .. })
    ));
}

#[tokio::test]
async fn test_conflicts_only_navigation_to_leaf() {
    let use_case = CompareDocumentsUseCase::new(
        three_documents(),
        MockCompareService::returning_json(COMPARISON_BODY),
        MockProgressReporter::new(),
    );
    let request = CompareRequest::new("target.json", ["a.json", "b.json"]).unwrap();
    let response = use_case.execute(request).await.unwrap();
    let document_count = response.document_count();

    let mut filter = ConflictFilter::new();
    let view = filter.toggle(&response.comparison, document_count);
    // zlib is in every document; curl diverges only through its SWID
    assert_eq!(view.keys(), vec!["openssl", "curl"]);

    let mut navigation = NavigationState::new(view);
    navigation.descend_into_component("openssl").unwrap();
    navigation.descend_into_version("3.0.1").unwrap();
    assert_eq!(navigation.breadcrumb(), "Components / openssl / 3.0.1");

    let leaf = navigation.leaf_view().expect("version location has a leaf view");
    assert_eq!(leaf.entries(IdentifierKind::Purl).len(), 1);
    assert_eq!(leaf.entries(IdentifierKind::Cpe).len(), 1);
    assert!(leaf.entries(IdentifierKind::Swid).is_empty());

    // zlib was filtered out, so it cannot be selected from the root
    assert!(navigation.ascend(0));
    assert!(navigation.descend_into_component("zlib").is_err());
    assert_eq!(navigation.depth(), 1);
}

#[tokio::test]
async fn test_report_rendering_end_to_end() {
    let use_case = CompareDocumentsUseCase::new(
        three_documents(),
        MockCompareService::returning_json(COMPARISON_BODY),
        MockProgressReporter::new(),
    );
    let request = CompareRequest::new("target.json", ["a.json", "b.json"]).unwrap();
    let response = use_case.execute(request).await.unwrap();

    let mut filter = ConflictFilter::new();
    let view = filter.toggle(&response.comparison, response.document_count());
    let navigation = NavigationState::new(view);
    let report = ComparisonReportBuilder::build(&response, &navigation, filter.is_filtered(), None);

    assert_eq!(report.summary.total_components, 3);
    assert_eq!(report.summary.shown_components, 2);
    assert_eq!(report.summary.divergent_components, 2);
    assert_eq!(report.summary.sbom_conflicts, 1);
    assert_eq!(report.summary.component_conflicts, 1);
    assert_eq!(report.document_name(1), "a.json");

    let markdown = MarkdownFormatter::new().format(&report).unwrap();
    assert!(markdown.starts_with("# SBOM Comparison Report"));
    assert!(markdown.contains("### openssl"));
    assert!(!markdown.contains("### zlib"));
    assert!(markdown.contains("## Reported Conflicts"));
    assert!(markdown.contains("COMPONENT_VERSION_MISMATCH"));

    let json: serde_json::Value =
        serde_json::from_str(&JsonFormatter::new().format(&report).unwrap()).unwrap();
    assert_eq!(json["conflictsOnly"], true);
    assert_eq!(json["breadcrumb"], "Components");
    assert_eq!(json["documents"][0]["name"], "target.json");
    assert_eq!(json["documents"][0]["target"], true);
    assert!(json["location"]["components"]["openssl"].is_array());
    assert!(json["location"]["components"].get("zlib").is_none());
}

#[tokio::test]
async fn test_quality_flow_keeps_going_after_a_failure() {
    let documents = vec![
        DocumentRef::new("target.json").unwrap(),
        DocumentRef::new("a.json").unwrap(),
        DocumentRef::new("b.json").unwrap(),
    ];
    let progress_reporter = MockProgressReporter::new();
    let use_case = AnalyzeQualityUseCase::new(
        three_documents(),
        MockQualityService::new().with_failure("a.json"),
        progress_reporter.clone(),
    );

    let results = use_case.execute(&documents).await;

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].document.as_str(), "target.json");
    assert!(results[0].is_available());
    assert!(!results[1].is_available());
    assert!(results[2].is_available());
    assert_eq!(results[2].metrics.as_ref().unwrap()["fileName"], "b.json");
    let errors = progress_reporter.errors();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("a.json"));
    // Quality collection does not drive the fetch counter
    assert!(progress_reporter.progress().is_empty());
}
