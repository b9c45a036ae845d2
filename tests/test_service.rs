use paratree::service::{
    BAD_REQUEST, ParaphraseRequest, ParaphraseResponse, ServiceError, TreeRecord, handle,
};
use pretty_assertions::assert_eq;
use serde_json::json;

const GOTHIC_QUARTER: &str = "(S (NP (NP (DT The) (JJ charming) (NNP Gothic) (NNP Quarter)) (, ,) (CC or) (NP (NNP Barri) (NNP Gòtic))) (, ,) (VP (VBZ has) (NP (NP (JJ narrow) (JJ medieval) (NNS streets)) (VP (VBN filled) (PP (IN with) (NP (NP (JJ trendy) (NNS bars)) (, ,) (NP (NNS clubs)) (CC and) (NP (JJ Catalan) (NNS restaurants))))))))";

const NO_COORDINATION: &str = "(S (NP I) (VP (V enjoyed) (NP my cookie)))";

fn error_body(request: &ParaphraseRequest) -> serde_json::Value {
    let err = handle(request).unwrap_err();
    assert_eq!(err.status_code(), BAD_REQUEST);
    err.to_error_body()
}

// --- SUCCESS ---
#[test]
fn test_default_limit() {
    let response = handle(&ParaphraseRequest::new(GOTHIC_QUARTER)).unwrap();
    assert_eq!(response.paraphrases.len(), 5);
}

#[test]
fn test_explicit_limit() {
    let request = ParaphraseRequest::new(GOTHIC_QUARTER).with_limit("3");
    let response = handle(&request).unwrap();
    assert_eq!(response.paraphrases.len(), 3);
}

#[test]
fn test_response_json_shape() {
    let request = ParaphraseRequest::new("(NP (NP (NNS cats)) (CC and) (NP (NNS dogs)))");
    let response = handle(&request).unwrap();
    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        json!({"paraphrases": [{"tree": "(NP (NP (NNS dogs)) (CC and) (NP (NNS cats)))"}]})
    );

    let parsed: ParaphraseResponse = serde_json::from_value(json!({
        "paraphrases": [{"tree": "(NP (NP (NNS dogs)) (CC and) (NP (NNS cats)))"}]
    }))
    .unwrap();
    assert_eq!(parsed, response);
    assert_eq!(
        parsed.paraphrases[0],
        TreeRecord {
            tree: "(NP (NP (NNS dogs)) (CC and) (NP (NNS cats)))".to_string()
        }
    );
}

#[test]
fn test_nested_coordination() {
    let request = ParaphraseRequest::new(
        "(S (NP (NP (NP a) (CC and) (NP b)) (CC or) (NP c)) (VP (V left)))",
    );
    let response = handle(&request).unwrap();
    assert_eq!(response.paraphrases.len(), 2);
}

#[test]
fn test_request_from_json() {
    let request: ParaphraseRequest =
        serde_json::from_value(json!({"tree": GOTHIC_QUARTER, "limit": "2"})).unwrap();
    assert_eq!(handle(&request).unwrap().paraphrases.len(), 2);
}

// --- ERRORS ---
#[test]
fn test_missing_tree() {
    let request = ParaphraseRequest::default();
    assert_eq!(error_body(&request), json!({"tree": ["This field may not be null."]}));
}

#[test]
fn test_invalid_tree() {
    let request = ParaphraseRequest::new("The charming Gothic Quarter has narrow streets");
    assert_eq!(error_body(&request), json!({"tree": ["Invalid parse tree"]}));

    let err = handle(&ParaphraseRequest::new("(S (NP I)")).unwrap_err();
    assert!(matches!(err, ServiceError::InvalidTree(_)));
}

#[test]
fn test_too_deep_tree_is_invalid() {
    let depth = 200_000;
    let text = format!("{}x{}", "(A ".repeat(depth), ")".repeat(depth));
    let request = ParaphraseRequest::new(text);
    assert_eq!(error_body(&request), json!({"tree": ["Invalid parse tree"]}));
}

#[test]
fn test_invalid_limits() {
    for limit in ["0", "-1", "abc", "", "1.5"] {
        let request = ParaphraseRequest::new(GOTHIC_QUARTER).with_limit(limit);
        assert_eq!(
            error_body(&request),
            json!({"limit": ["Limit must be a positive integer"]}),
            "limit {limit:?}"
        );
    }
}

#[test]
fn test_tree_checked_before_limit() {
    let request = ParaphraseRequest::new("not a tree").with_limit("0");
    assert_eq!(error_body(&request), json!({"tree": ["Invalid parse tree"]}));
}

#[test]
fn test_limit_checked_before_generation() {
    let request = ParaphraseRequest::new(NO_COORDINATION).with_limit("abc");
    assert_eq!(
        handle(&request),
        Err(ServiceError::InvalidLimit("abc".to_string()))
    );
}

#[test]
fn test_no_variations() {
    let request = ParaphraseRequest::new(NO_COORDINATION);
    assert_eq!(
        error_body(&request),
        json!({"tree": ["Cannot generate any variation of the given parse tree"]})
    );
}
