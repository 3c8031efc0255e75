use queryquill::query::{evaluate, evaluate_with, EvaluationState, GjsonBackend, Outcome};

const INVALID_DOCUMENTS: &[&str] = &["{bad json", "", "{", "[1,]", "nul", r#"{"a": }"#];

#[test]
fn test_scenario_simple_key() {
    let result = evaluate(r#"{"key":"value"}"#, "key");
    assert_eq!(result.value, "value");
    assert!(result.found);
    assert_eq!(result.document_error, "");
}

#[test]
fn test_scenario_empty_query() {
    let result = evaluate(r#"{"key":"value"}"#, "");
    assert_eq!(result.value, "");
    assert!(result.found);
    assert_eq!(result.document_error, "");
}

#[test]
fn test_scenario_missing_path() {
    let result = evaluate(r#"{"key":"value"}"#, "non.existent.path");
    assert_eq!(result.value, "");
    assert!(!result.found);
    assert_eq!(result.document_error, "");
}

#[test]
fn test_scenario_nested_path() {
    let result = evaluate(r#"{"name":{"first":"Tom","last":"Anderson"}}"#, "name.last");
    assert_eq!(result.value, "Anderson");
    assert!(result.found);
}

#[test]
fn test_scenario_invalid_document() {
    let result = evaluate("{bad json", "key");
    assert_eq!(result.value, "");
    assert!(!result.found);
    assert!(result.document_error.starts_with("Invalid JSON"));
}

#[test]
fn test_invalid_documents_never_match() {
    for document in INVALID_DOCUMENTS {
        for query in ["", "key", "a.b.c", "#"] {
            let result = evaluate(document, query);
            assert!(!result.found, "{:?} / {:?}", document, query);
            assert_eq!(result.value, "");
            assert!(!result.document_error.is_empty());
        }
    }
}

#[test]
fn test_empty_query_on_valid_documents() {
    for document in [r#"{}"#, "[]", "42", r#""text""#, "null"] {
        let result = evaluate(document, "");
        assert!(result.found, "{:?}", document);
        assert_eq!(result.value, "");
        assert_eq!(result.document_error, "");
    }
}

#[test]
fn test_scalar_and_container_values() {
    let document = r#"{"n": 1.5, "b": true, "z": null, "list": [1,2,3], "obj": {"x": 1}}"#;
    assert_eq!(evaluate(document, "n").value, "1.5");
    assert_eq!(evaluate(document, "b").value, "true");
    assert_eq!(evaluate(document, "list").value, "[1,2,3]");
    assert_eq!(evaluate(document, "obj").value, r#"{"x": 1}"#);
    assert_eq!(evaluate(document, "list.#").value, "3");
}

#[test]
fn test_evaluate_is_idempotent() {
    let cases = [
        (r#"{"key":"value"}"#, "key"),
        (r#"{"key":"value"}"#, "nope"),
        ("{bad json", "key"),
        ("[]", ""),
    ];
    for (document, query) in cases {
        assert_eq!(evaluate(document, query), evaluate(document, query));
    }
}

#[test]
fn test_explicit_backend_agrees_with_default() {
    let document = r#"{"friends": [{"last": "Murphy"}, {"last": "Craig"}]}"#;
    let query = "friends.#.last";
    assert_eq!(evaluate_with(&GjsonBackend, document, query), evaluate(document, query));
}

#[test]
fn test_outcomes() {
    let outcome = |document: &str, query: &str| {
        EvaluationState::new(document.to_string(), query.to_string()).outcome()
    };
    assert_eq!(outcome("{bad", ""), Outcome::Invalid);
    assert_eq!(outcome("{}", ""), Outcome::Empty);
    assert_eq!(outcome(r#"{"a":1}"#, "a"), Outcome::Found);
    assert_eq!(outcome(r#"{"a":1}"#, "b"), Outcome::NotFound);
}

#[test]
fn test_example_queries() {
    let state = EvaluationState::example();
    assert_eq!(state.value(), "Anderson");

    let document = state.document();
    assert_eq!(evaluate(document, "age").value, "37");
    assert_eq!(evaluate(document, "children.1").value, "Alex");
    assert_eq!(evaluate(document, r"fav\.movie").value, "Deer Hunter");
    assert_eq!(
        evaluate(document, r#"friends.#(last=="Murphy").first"#).value,
        "Dale"
    );
}

/// Runs `f` on a thread with the 2 MiB stack tokio gives its workers.
fn on_small_stack<F: FnOnce() + Send + 'static>(f: F) {
    std::thread::Builder::new()
        .stack_size(2 * 1024 * 1024)
        .spawn(f)
        .unwrap()
        .join()
        .unwrap();
}

#[test]
fn test_million_unclosed_brackets_is_invalid_not_fatal() {
    on_small_stack(|| {
        let document = "[".repeat(1_000_000);
        let result = evaluate(&document, "a");
        assert!(!result.found);
        assert_eq!(result.value, "");
        assert!(result.document_error.contains("nesting too deep"));
    });
}

#[test]
fn test_deep_objects_are_rejected_too() {
    on_small_stack(|| {
        let document = r#"{"a":"#.repeat(200_000);
        let result = evaluate(&document, "");
        assert!(!result.found);
        assert!(result.document_error.starts_with("Invalid JSON"));
    });
}

#[test]
fn test_moderate_nesting_still_evaluates() {
    on_small_stack(|| {
        let document = format!("{}1{}", "[".repeat(100), "]".repeat(100));
        assert!(evaluate(&document, "").found);
        assert_eq!(evaluate(&document, "0").value, "[".repeat(99) + "1" + &"]".repeat(99));
    });
}
