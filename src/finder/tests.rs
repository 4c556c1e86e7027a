use super::*;
use std::time::Duration;

use crate::classifier::{ClassifierError, MockClassifier};
use crate::label::LabelError;
use crate::metadata::{MetadataCache, MockMetadataSource};

fn finder(
    classifier: MockClassifier,
    metadata: MockMetadataSource,
) -> EmoteFinder<MockClassifier, MockMetadataSource> {
    EmoteFinder::new(classifier, MetadataCache::new(metadata))
}

#[tokio::test]
async fn test_end_to_end_bttv_result() {
    let finder = finder(
        MockClassifier::with_confidences(vec![Confidence::new("bttv__CryingBlob__abc123", 0.87)]),
        MockMetadataSource::new().with_owner("abc123", "SomeUser"),
    );

    let results = finder.find("crying pink blob").await.expect("query succeeds");

    assert_eq!(
        results,
        vec![ClassificationResult {
            source: EmoteSource::Bttv,
            emote_name: "CryingBlob".to_string(),
            id: "abc123".to_string(),
            emote_page_url: "https://betterttv.com/emotes/abc123".to_string(),
            emote_image_url: "https://cdn.betterttv.net/emote/abc123/3x.webp".to_string(),
            user: EmoteUser {
                display_name: "SomeUser".to_string()
            },
            confidence: 0.87,
        }]
    );
    assert_eq!(finder.classifier().texts(), vec!["crying pink blob"]);
}

#[tokio::test]
async fn test_result_serializes_to_wire_shape() {
    let finder = finder(
        MockClassifier::with_confidences(vec![Confidence::new("bttv__CryingBlob__abc123", 0.87)]),
        MockMetadataSource::new().with_owner("abc123", "SomeUser"),
    );

    let results = finder.find("crying pink blob").await.unwrap();

    assert_eq!(
        serde_json::to_value(&results).unwrap(),
        serde_json::json!([{
            "source": "bttv",
            "emoteName": "CryingBlob",
            "id": "abc123",
            "emotePageUrl": "https://betterttv.com/emotes/abc123",
            "emoteImageUrl": "https://cdn.betterttv.net/emote/abc123/3x.webp",
            "user": { "displayName": "SomeUser" },
            "confidence": 0.87
        }])
    );
}

#[tokio::test]
async fn test_twitch_global_needs_no_lookup() {
    let finder = finder(
        MockClassifier::with_confidences(vec![Confidence::new(
            "twitch-global__Jebaited__160401",
            0.5,
        )]),
        MockMetadataSource::new(),
    );

    let results = finder.find("jebaited").await.unwrap();

    assert_eq!(results[0].user.display_name, "Twitch");
    assert_eq!(
        results[0].emote_image_url,
        "https://static-cdn.jtvnw.net/emoticons/v2/160401/static/light/3.0"
    );
    assert_eq!(
        results[0].emote_page_url,
        "https://twitchemotes.com/global/emotes/160401"
    );
    assert_eq!(finder.metadata().source().total_calls(), 0);
}

#[tokio::test]
async fn test_order_follows_classifier_not_lookup_completion() {
    let finder = finder(
        MockClassifier::with_labels(&[
            "bttv__Slow__slow1",
            "twitch-global__Kappa__25",
            "bttv__Fast__fast1",
            "bttv__Medium__mid1",
        ]),
        MockMetadataSource::new()
            .with_owner("slow1", "SlowUser")
            .with_delay("slow1", Duration::from_millis(60))
            .with_owner("mid1", "MidUser")
            .with_delay("mid1", Duration::from_millis(20))
            .with_owner("fast1", "FastUser"),
    );

    let results = finder.find("anything").await.unwrap();
    let names: Vec<&str> = results.iter().map(|r| r.emote_name.as_str()).collect();
    let owners: Vec<&str> = results
        .iter()
        .map(|r| r.user.display_name.as_str())
        .collect();

    assert_eq!(names, vec!["Slow", "Kappa", "Fast", "Medium"]);
    assert_eq!(owners, vec!["SlowUser", "Twitch", "FastUser", "MidUser"]);
}

#[tokio::test]
async fn test_confidence_passes_through_unchanged() {
    let finder = finder(
        MockClassifier::with_confidences(vec![
            Confidence::new("twitch-global__Kappa__25", 0.123456789),
            Confidence::new("twitch-global__PogChamp__305954156", 0.9),
        ]),
        MockMetadataSource::new(),
    );

    let results = finder.find("anything").await.unwrap();

    assert_eq!(results[0].confidence, 0.123456789);
    assert_eq!(results[1].confidence, 0.9);
}

#[tokio::test]
async fn test_repeated_queries_reuse_cached_owner() {
    let finder = finder(
        MockClassifier::with_labels(&["bttv__CryingBlob__abc123"]),
        MockMetadataSource::new().with_owner("abc123", "SomeUser"),
    );

    finder.find("crying pink blob").await.unwrap();
    finder.find("sad blob").await.unwrap();
    finder.find("blob crying").await.unwrap();

    assert_eq!(finder.classifier().calls(), 3);
    assert_eq!(finder.metadata().source().calls_for("abc123"), 1);
}

#[tokio::test]
async fn test_classifier_failure_skips_metadata() {
    let finder = finder(
        MockClassifier::failing(502),
        MockMetadataSource::new().with_owner("abc123", "SomeUser"),
    );

    let err = finder.find("anything").await.unwrap_err();

    assert!(matches!(
        err,
        FinderError::Classifier(ClassifierError::Status { status: 502 })
    ));
    assert_eq!(err.kind(), ErrorKind::UpstreamUnavailable);
    assert_eq!(finder.metadata().source().total_calls(), 0);
}

#[tokio::test]
async fn test_malformed_classifier_body_has_its_own_kind() {
    let finder = finder(MockClassifier::malformed(), MockMetadataSource::new());

    let err = finder.find("anything").await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::MalformedUpstreamResponse);
}

#[tokio::test]
async fn test_metadata_failure_fails_whole_query() {
    let finder = finder(
        MockClassifier::with_labels(&["twitch-global__Kappa__25", "bttv__Gone__deleted1"]),
        MockMetadataSource::new(),
    );

    let err = finder.find("anything").await.unwrap_err();

    match &err {
        FinderError::Metadata { id, .. } => assert_eq!(id, "deleted1"),
        other => panic!("Expected Metadata error, got {other:?}"),
    }
    assert_eq!(err.kind(), ErrorKind::UpstreamUnavailable);
}

#[tokio::test]
async fn test_malformed_metadata_has_its_own_kind() {
    let finder = finder(
        MockClassifier::with_labels(&["bttv__Weird__w1"]),
        MockMetadataSource::new().with_malformed("w1"),
    );

    let err = finder.find("anything").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedUpstreamResponse);
}

#[tokio::test]
async fn test_unknown_source_is_rejected_before_lookups() {
    let finder = finder(
        MockClassifier::with_labels(&["bttv__CryingBlob__abc123", "ffz__Pog__99"]),
        MockMetadataSource::new().with_owner("abc123", "SomeUser"),
    );

    let err = finder.find("anything").await.unwrap_err();

    assert!(matches!(
        err,
        FinderError::Label(LabelError::UnknownSource { .. })
    ));
    assert_eq!(err.kind(), ErrorKind::LabelParse);
    assert_eq!(finder.metadata().source().total_calls(), 0);
}

#[tokio::test]
async fn test_malformed_label_is_a_label_error() {
    let finder = finder(
        MockClassifier::with_labels(&["bttv__NoId"]),
        MockMetadataSource::new(),
    );

    let err = finder.find("anything").await.unwrap_err();
    assert!(matches!(err, FinderError::Label(LabelError::FieldCount { .. })));
}

#[tokio::test]
async fn test_empty_confidences_yield_empty_results() {
    let finder = finder(
        MockClassifier::with_confidences(Vec::new()),
        MockMetadataSource::new(),
    );

    let results = finder.find("anything").await.unwrap();
    assert!(results.is_empty());
}

#[test]
fn test_error_kind_strings() {
    assert_eq!(
        ErrorKind::UpstreamUnavailable.to_string(),
        "upstream_unavailable"
    );
    assert_eq!(
        ErrorKind::MalformedUpstreamResponse.as_str(),
        "malformed_upstream_response"
    );
    assert_eq!(ErrorKind::LabelParse.as_str(), "label_parse_error");
}
