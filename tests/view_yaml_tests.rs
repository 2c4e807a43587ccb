//! Saved-view YAML parsing and validation tests

use salesq_core::criteria::{AgeRange, DateRange};
use salesq_core::sort::{SortField, SortSpec};
use salesq_planner::{explain, parse_yaml_view, PlanError};

#[test]
fn test_parse_full_view() {
    let yaml = r#"
config:
  page_size: 20
  dataset: "data/sales.json"
search: "neha"
filters:
  regions: [North, East]
  genders: [Female]
  categories: [Electronics]
  tags: [VIP]
  payment_methods: [UPI]
  age: { min: 20, max: 40 }
  date: { start: "2023-01-01", end: "2023-12-31" }
sort: { field: customerName, direction: asc }
page: 2
"#;

    let view = parse_yaml_view(yaml).expect("view should parse");
    assert_eq!(view.search, "neha");
    assert_eq!(view.config.page_size, Some(20));
    assert_eq!(view.config.dataset.as_deref(), Some("data/sales.json"));
    assert!(view.criteria.regions.contains("North"));
    assert!(view.criteria.regions.contains("East"));
    assert_eq!(view.criteria.age_range, Some(AgeRange::new(20, 40)));
    assert_eq!(
        view.criteria.date_range,
        Some(DateRange::new("2023-01-01", "2023-12-31"))
    );

    let request = view.into_request(SortSpec::default());
    assert_eq!(request.sort, SortSpec::asc(SortField::CustomerName));
    assert_eq!(request.page, 2);
}

#[test]
fn test_unquoted_dates_stay_strings() {
    let yaml = "filters:\n  date: { start: 2023-01-01, end: 2023-06-30 }\n";
    let view = parse_yaml_view(yaml).expect("view should parse");
    assert_eq!(
        view.criteria.date_range,
        Some(DateRange::new("2023-01-01", "2023-06-30"))
    );
}

#[test]
fn test_empty_view_is_everything() {
    let view = parse_yaml_view("").expect("empty view should parse");
    assert!(!view.criteria.is_active());
    assert!(view.sort.is_none());
}

#[test]
fn test_parse_invalid_yaml() {
    let result = parse_yaml_view("invalid: yaml: [");
    assert!(matches!(result, Err(PlanError::Yaml(_))));
}

#[test]
fn test_unknown_filter_key_is_rejected() {
    let yaml = "filters:\n  region: [North]\n";
    assert!(parse_yaml_view(yaml).is_err());
}

#[test]
fn test_bad_sort_key_is_rejected() {
    let result = parse_yaml_view("sort: \"price:desc\"");
    assert!(matches!(result, Err(PlanError::Invalid(_))));
}

#[test]
fn test_explain_lists_active_stages() {
    let yaml = "search: ravi\nfilters:\n  tags: [VIP]\nsort: quantity:desc\n";
    let request = parse_yaml_view(yaml)
        .expect("view should parse")
        .into_request(SortSpec::default());
    let lines = explain(&request, 10);
    assert!(lines[0].contains("\"ravi\""));
    assert!(lines.iter().any(|l| l == "filter: tags (any of) in [VIP]"));
    assert!(lines
        .iter()
        .any(|l| l.starts_with("sort: quantity:desc (Quantity (High to Low))")));
}
