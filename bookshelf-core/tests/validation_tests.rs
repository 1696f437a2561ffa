//! Validation behaviour across the whole payload space
//!
//! Property tests cover the quantified guarantees of the schema and the
//! message policy; snapshots pin the exact violation wording.

use bookshelf_core::validation::{current_year, validate_book, validate_filter};
use bookshelf_core::{FailureContext, MessagePolicy, ValidationError};
use proptest::prelude::*;
use serde_json::{json, Value};

const NAME_MESSAGE: &str = "Gagal menambahkan buku. Mohon isi nama buku";
const READ_PAGE_MESSAGE: &str =
    "Gagal menambahkan buku. readPage tidak boleh lebih besar dari pageCount";

fn messages(err: &ValidationError) -> String {
    err.violations
        .iter()
        .map(|v| v.message.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

prop_compose! {
    fn pages()(page_count in 1u32..10_000)
        (page_count in Just(page_count), read_page in 0..=page_count) -> (u32, u32) {
        (page_count, read_page)
    }
}

prop_compose! {
    fn valid_payload()(
        name in "[A-Za-z0-9][A-Za-z0-9 ]{0,40}",
        year in 1900i32..=2024,
        author in "[A-Za-z .]{1,30}",
        summary in "\\PC{1,80}",
        publisher in "[A-Za-z]{1,20}",
        pages in pages(),
        reading in any::<bool>(),
    ) -> Value {
        let (page_count, read_page) = pages;
        json!({
            "name": name,
            "year": year,
            "author": author,
            "summary": summary,
            "publisher": publisher,
            "pageCount": page_count,
            "readPage": read_page,
            "reading": reading,
        })
    }
}

/// Values that break a field's schema, whatever the field
fn junk() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        Just(json!("")),
        Just(json!(-5)),
        Just(json!(1.5)),
        Just(json!([1, 2])),
        Just(json!({ "nested": true })),
    ]
}

proptest! {
    #[test]
    fn valid_payloads_pass(body in valid_payload()) {
        let book = validate_book(&body, current_year()).unwrap();
        prop_assert_eq!(book.name.as_str(), body["name"].as_str().unwrap());
        prop_assert!(book.read_page <= book.page_count);
    }

    #[test]
    fn missing_name_always_reports_name(
        mut body in valid_payload(),
        broken in proptest::sample::subsequence(
            vec!["year", "author", "summary", "publisher", "pageCount", "readPage", "reading"],
            0..=7,
        ),
        value in junk(),
    ) {
        body.as_object_mut().unwrap().remove("name");
        for field in broken {
            body[field] = value.clone();
        }

        let err = validate_book(&body, current_year()).unwrap_err();
        prop_assert!(err.touches("name"));
        prop_assert_eq!(
            MessagePolicy::default().select(FailureContext::Create, &err),
            NAME_MESSAGE
        );
    }

    #[test]
    fn read_page_over_page_count_reports_read_page(
        mut body in valid_payload(),
        extra in 1u32..1_000,
    ) {
        let page_count = body["pageCount"].as_u64().unwrap();
        body["readPage"] = json!(page_count + u64::from(extra));

        let err = validate_book(&body, current_year()).unwrap_err();
        prop_assert!(!err.touches("name"));
        prop_assert_eq!(
            MessagePolicy::default().select(FailureContext::Create, &err),
            READ_PAGE_MESSAGE
        );
    }

    #[test]
    fn flags_only_accept_zero_or_one(
        field in prop_oneof![Just("reading"), Just("finished")],
        value in "\\PC{0,4}",
    ) {
        let result = validate_filter(&[(field.to_string(), value.clone())]);
        prop_assert_eq!(result.is_ok(), value == "0" || value == "1");
    }
}

#[test]
fn test_missing_everything_snapshot() {
    let err = validate_book(&json!({}), 2024).unwrap_err();
    insta::assert_snapshot!(messages(&err), @r###"
    "name" is required
    "year" is required
    "author" is required
    "summary" is required
    "publisher" is required
    "pageCount" is required
    "readPage" is required
    "reading" is required
    "###);
}

#[test]
fn test_dune_over_read_snapshot() {
    let body = json!({
        "name": "Dune",
        "year": 1965,
        "author": "Herbert",
        "summary": "...",
        "publisher": "Ace",
        "pageCount": 500,
        "readPage": 600,
        "reading": true,
    });
    let err = validate_book(&body, 2024).unwrap_err();
    insta::assert_snapshot!(messages(&err), @r###""readPage" must be less than or equal to ref:pageCount"###);
    assert_eq!(
        MessagePolicy::default().select(FailureContext::Create, &err),
        READ_PAGE_MESSAGE
    );
    assert_eq!(
        MessagePolicy::default().select(FailureContext::Update, &err),
        "Gagal memperbarui buku. readPage tidak boleh lebih besar dari pageCount"
    );
}
