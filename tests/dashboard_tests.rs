//! End-to-end: file → dashboard → session changes → pages.


use std::fs;

use salesq_core::config::DashboardConfig;
use salesq_core::criteria::{selection, AgeRange};
use salesq_core::page::PageSlot;
use salesq_core::sort::{SortField, SortSpec};
use salesq_exec::{Dashboard, QueryPipeline};
use salesq_io::{export_records, load_dataset};
use test_data_gen::{create_temp_dir, generate_dataset};

#[test]
fn test_loaded_dataset_drives_dashboard() {
    let dir = create_temp_dir("dashboard");
    let path = format!("{}/sales.jsonl", dir);
    export_records(&path, &generate_dataset(240)).expect("fixture export failed");
    let records = load_dataset(&path).expect("load should succeed");

    let mut dashboard = Dashboard::new(records, &DashboardConfig::default());
    assert_eq!(dashboard.facets().regions, vec!["East", "North", "South", "West"]);
    assert_eq!(dashboard.facets().age_range, AgeRange::new(18, 67));

    assert_eq!(dashboard.total_pages(), 24);
    assert!(dashboard.go_to_page(12));
    assert_eq!(
        dashboard.visible_pages(),
        vec![
            PageSlot::Page(1),
            PageSlot::Gap,
            PageSlot::Page(11),
            PageSlot::Page(12),
            PageSlot::Page(13),
            PageSlot::Gap,
            PageSlot::Page(24),
        ]
    );

    dashboard
        .session_mut()
        .update_criteria(|c| c.regions = selection(["North"]));
    assert_eq!(dashboard.session().page(), 1);
    assert_eq!(dashboard.total_pages(), 6);

    dashboard
        .session_mut()
        .set_sort(SortSpec::desc(SortField::Quantity));
    let request = dashboard.session().request();
    let view = dashboard.view();
    assert_eq!(view.records.len(), 10);
    assert!(view.records.iter().all(|r| r.customer_region == "North"));
    assert!(view.records.windows(2).all(|w| w[0].quantity >= w[1].quantity));

    let data = generate_dataset(240);
    let direct = QueryPipeline::default().execute(&data, &request);
    assert_eq!(view.records, direct.records);
    assert_eq!(view.stats, direct.stats);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_custom_page_size_from_config() {
    let config = DashboardConfig {
        page_size: 25,
        ..Default::default()
    };
    let mut dashboard = Dashboard::new(generate_dataset(60), &config);
    assert_eq!(dashboard.total_pages(), 3);
    assert!(dashboard.go_to_page(3));
    let view = dashboard.view();
    assert_eq!(view.records.len(), 10);
    assert_eq!(view.pagination.item_range(), Some((51, 60)));
}
