mod common;

use common::{doc, obj, operation, petstore_old, prim, query_param};
use swagger_diff::output::{json, markdown};
use swagger_diff::{diff_documents, DiffConfig, DiffReport, HttpMethod};

fn changed_report() -> DiffReport {
    let old = petstore_old();
    let new = doc(
        vec![
            (
                "/pets",
                vec![(
                    HttpMethod::Get,
                    operation(
                        "List pets",
                        vec![query_param("limit", true, prim("integer"))],
                        Some(obj(&[("id", prim("integer")), ("name", prim("string"))])),
                    ),
                )],
            ),
            (
                "/owners",
                vec![(HttpMethod::Get, operation("List owners", vec![], None))],
            ),
        ],
        vec![],
    );
    diff_documents(&old, &new, &DiffConfig::default())
}

#[test]
fn markdown_always_contains_all_three_sections() {
    let rendered = markdown::render(&DiffReport::new());
    assert!(rendered.contains("### What's New"));
    assert!(rendered.contains("### What's Deprecated"));
    assert!(rendered.contains("### What's Changed"));
}

#[test]
fn markdown_lists_new_endpoints_with_method_and_path() {
    let rendered = markdown::render(&changed_report());
    assert!(rendered.contains("* `GET` /owners List owners"));
}

#[test]
fn markdown_details_changed_operations() {
    let rendered = markdown::render(&changed_report());
    assert!(rendered.contains("* `GET` /pets List pets"));
    assert!(rendered.contains("Parameters"));
    assert!(rendered.contains("limit change into required"));
    assert!(rendered.contains("Return Type"));
    assert!(rendered.contains("Add name"));
}

#[test]
fn markdown_appends_property_descriptions() {
    let old = doc(
        vec![(
            "/pets",
            vec![(
                HttpMethod::Get,
                operation("List pets", vec![], Some(obj(&[]))),
            )],
        )],
        vec![],
    );
    let new = doc(
        vec![(
            "/pets",
            vec![(
                HttpMethod::Get,
                operation(
                    "List pets",
                    vec![],
                    Some(obj(&[(
                        "name",
                        prim("string").with_description("pet name"),
                    )])),
                ),
            )],
        )],
        vec![],
    );
    let rendered = markdown::render(&diff_documents(&old, &new, &DiffConfig::default()));
    assert!(rendered.contains("Add name //pet name"));
}

#[test]
fn json_report_round_trips() {
    let report = changed_report();
    let serialized = json::serialize_diff_report(&report).unwrap();
    let parsed: DiffReport = serde_json::from_str(&serialized).unwrap();
    assert_eq!(parsed, report);
}

#[test]
fn json_report_carries_the_schema_version() {
    let serialized = json::serialize_diff_report(&DiffReport::new()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&serialized).unwrap();
    assert_eq!(value["version"], DiffReport::SCHEMA_VERSION);
}

#[test]
fn pretty_output_is_multiline() {
    let pretty = json::serialize_diff_report_pretty(&changed_report()).unwrap();
    assert!(pretty.contains('\n'));
}
