//! Render the stages a request activates, one line per stage (EXPLAIN).

use std::collections::BTreeSet;

use salesq_core::request::QueryRequest;

pub fn explain(request: &QueryRequest, page_size: usize) -> Vec<String> {
    let mut lines = Vec::new();

    let needle = request.search.trim();
    if needle.is_empty() {
        lines.push("search: (none)".to_string());
    } else {
        lines.push(format!(
            "search: customer name contains {needle:?} (case-insensitive) or phone contains it ignoring whitespace"
        ));
    }

    let c = &request.criteria;
    let mut filters = Vec::new();
    let sets: [(&str, &BTreeSet<String>); 5] = [
        ("region", &c.regions),
        ("gender", &c.genders),
        ("category", &c.categories),
        ("tags (any of)", &c.tags),
        ("payment method", &c.payment_methods),
    ];
    for (name, set) in sets {
        if !set.is_empty() {
            let values: Vec<&str> = set.iter().map(String::as_str).collect();
            filters.push(format!("{name} in [{}]", values.join(", ")));
        }
    }
    if let Some(r) = c.age_range {
        let note = if r.min > r.max { " (inverted: matches nothing)" } else { "" };
        filters.push(format!("age in [{}, {}]{note}", r.min, r.max));
    }
    if let Some(r) = &c.date_range {
        let note = if r.start > r.end { " (inverted: matches nothing)" } else { "" };
        filters.push(format!("date in [{}, {}]{note}", r.start, r.end));
    }
    if filters.is_empty() {
        lines.push("filter: (none)".to_string());
    } else {
        for f in filters {
            lines.push(format!("filter: {f}"));
        }
    }

    match request.sort.label() {
        Some(label) => lines.push(format!("sort: {} ({label}), stable", request.sort)),
        None => lines.push(format!("sort: {}, stable", request.sort)),
    }
    lines.push(format!("page: {} of size {page_size}", request.page));
    lines.push("summary: units, gross amount, discount, count over the filtered set".to_string());
    lines
}
