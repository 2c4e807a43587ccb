//! salesq CLI: query a sales dataset from the terminal.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use salesq_core::config::DashboardConfig;
use salesq_core::criteria::{AgeRange, DateRange, FilterCriteria};
use salesq_core::page::{PageSlot, PaginationInfo};
use salesq_core::request::QueryRequest;
use salesq_core::sort::{SortSpec, SORT_OPTIONS};
use salesq_exec::{Dashboard, QueryOutput, Session};
use salesq_planner::{explain, parse_yaml_view, ParsedView, ViewConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "salesq")]
#[command(about = "Search, filter, sort and summarize sales records", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

/// Query parameters shared by `query` and `export`.
#[derive(clap::Args, Debug, Default)]
struct QueryArgs {
    /// Dataset file (.json, .jsonl, .csv); falls back to SALESQ_DATASET
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Saved view (YAML); flags below override it
    #[arg(short, long)]
    view: Option<PathBuf>,

    /// Customer name or phone number fragment
    #[arg(short, long)]
    search: Option<String>,

    #[arg(long)]
    region: Vec<String>,

    #[arg(long)]
    gender: Vec<String>,

    #[arg(long)]
    category: Vec<String>,

    #[arg(long)]
    tag: Vec<String>,

    #[arg(long)]
    payment: Vec<String>,

    #[arg(long, requires = "age_max")]
    age_min: Option<u32>,

    #[arg(long, requires = "age_min")]
    age_max: Option<u32>,

    /// Inclusive start date (YYYY-MM-DD)
    #[arg(long, requires = "date_to")]
    date_from: Option<String>,

    /// Inclusive end date (YYYY-MM-DD)
    #[arg(long, requires = "date_from")]
    date_to: Option<String>,

    /// Sort key, `field[:asc|desc]` with field one of date, quantity, customerName
    #[arg(long)]
    sort: Option<SortSpec>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print one page of matching records with pagination and summary
    Query {
        #[command(flatten)]
        args: QueryArgs,

        /// 1-indexed page; out-of-range pages are ignored
        #[arg(short, long)]
        page: Option<usize>,

        /// Rows per page (overrides config)
        #[arg(long)]
        page_size: Option<usize>,

        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// List the distinct filter values present in a dataset
    Facets {
        #[arg(short, long)]
        data: Option<PathBuf>,
    },

    /// Write every matching record (sorted) to a .csv or .jsonl file
    Export {
        #[command(flatten)]
        args: QueryArgs,

        #[arg(short, long)]
        out: PathBuf,
    },

    /// Validate a saved view file
    Validate {
        #[arg(short, long)]
        view: PathBuf,
    },

    /// Show which stages a saved view activates
    Explain {
        #[arg(short, long)]
        view: PathBuf,
    },

    /// List the built-in sort presets
    Sorts,
}

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Query {
            args,
            page,
            page_size,
            format,
        } => run_query(&args, page, page_size, format),
        Commands::Facets { data } => run_facets(data.as_deref()),
        Commands::Export { args, out } => run_export(&args, &out),
        Commands::Validate { view } => validate_view(&view).map(|()| {
            println!("✓ View is valid");
        }),
        Commands::Explain { view } => explain_view(&view),
        Commands::Sorts => {
            for o in SORT_OPTIONS {
                println!("{:<18} {}", o.spec.to_string(), o.label);
            }
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

fn run_query(
    args: &QueryArgs,
    page: Option<usize>,
    page_size: Option<usize>,
    format: OutputFormat,
) -> CliResult<()> {
    let (mut config, request) = resolve(args)?;
    if let Some(size) = page_size {
        config.page_size = size;
    }
    config.validate()?;

    let page = page.unwrap_or(request.page);
    let mut dashboard = open_dashboard(args, &config, request)?;
    if page != dashboard.session().page() && !dashboard.go_to_page(page) {
        tracing::warn!(
            page,
            total_pages = dashboard.total_pages(),
            "page out of range; staying on page 1"
        );
    }

    let slots = dashboard.visible_pages();
    let output = dashboard.view();
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&output)?),
        OutputFormat::Table => print_table(&output, &slots),
    }
    Ok(())
}

fn run_facets(data: Option<&Path>) -> CliResult<()> {
    let config = DashboardConfig::from_env();
    let path = dataset_path(data, &config)?;
    let records = salesq_io::load_dataset(&path)?;
    let dashboard = Dashboard::new(records, &config);
    let f = dashboard.facets();

    println!("Regions:         {}", f.regions.join(", "));
    println!("Genders:         {}", f.genders.join(", "));
    println!("Categories:      {}", f.categories.join(", "));
    println!("Tags:            {}", f.tags.join(", "));
    println!("Payment methods: {}", f.payment_methods.join(", "));
    println!("Age range:       {}-{}", f.age_range.min, f.age_range.max);
    Ok(())
}

fn run_export(args: &QueryArgs, out: &Path) -> CliResult<()> {
    let (config, request) = resolve(args)?;
    config.validate()?;
    let mut dashboard = open_dashboard(args, &config, request)?;
    let written = salesq_io::export_records(out, dashboard.all_matching())?;
    println!("✓ Exported {} records to {}", written, out.display());
    Ok(())
}

fn validate_view(path: &Path) -> CliResult<()> {
    let src = fs::read_to_string(path)?;
    let _ = parse_yaml_view(&src)?;
    Ok(())
}

fn explain_view(path: &Path) -> CliResult<()> {
    let src = fs::read_to_string(path)?;
    let parsed = parse_yaml_view(&src)?;
    let mut config = DashboardConfig::from_env();
    apply_view_config(&mut config, &parsed.config);
    let page_size = config.page_size;
    let request = parsed.into_request(config.default_sort);

    println!("Query Plan");
    println!("==========");
    for (i, line) in explain(&request, page_size).iter().enumerate() {
        println!("  {}. {}", i + 1, line);
    }
    Ok(())
}

/// Defaults → environment → view file → flags.
fn resolve(args: &QueryArgs) -> CliResult<(DashboardConfig, QueryRequest)> {
    let mut config = DashboardConfig::from_env();
    let view = match &args.view {
        Some(path) => parse_yaml_view(&fs::read_to_string(path)?)?,
        None => ParsedView::default(),
    };
    apply_view_config(&mut config, &view.config);

    let mut request = view.into_request(config.default_sort);
    apply_flags(&mut request, args);
    Ok((config, request))
}

fn apply_view_config(cfg: &mut DashboardConfig, view: &ViewConfig) {
    if let Some(size) = view.page_size {
        cfg.page_size = size;
    }
    if let Some(max) = view.max_visible_pages {
        cfg.max_visible_pages = max;
    }
    if let Some(dataset) = &view.dataset {
        cfg.dataset_path = Some(dataset.clone());
    }
}

fn apply_flags(request: &mut QueryRequest, args: &QueryArgs) {
    if let Some(search) = &args.search {
        request.search = search.clone();
    }
    let c: &mut FilterCriteria = &mut request.criteria;
    let sets = [
        (&mut c.regions, &args.region),
        (&mut c.genders, &args.gender),
        (&mut c.categories, &args.category),
        (&mut c.tags, &args.tag),
        (&mut c.payment_methods, &args.payment),
    ];
    for (set, values) in sets {
        if !values.is_empty() {
            *set = values.iter().cloned().collect();
        }
    }
    if let (Some(min), Some(max)) = (args.age_min, args.age_max) {
        c.age_range = Some(AgeRange::new(min, max));
    }
    if let (Some(start), Some(end)) = (&args.date_from, &args.date_to) {
        c.date_range = Some(DateRange::new(start.clone(), end.clone()));
    }
    if let Some(sort) = args.sort {
        request.sort = sort;
    }
}

fn dataset_path(data: Option<&Path>, config: &DashboardConfig) -> CliResult<PathBuf> {
    data.map(Path::to_path_buf)
        .or_else(|| config.dataset_path.as_ref().map(PathBuf::from))
        .ok_or_else(|| "no dataset given (use --data or SALESQ_DATASET)".into())
}

/// Load the dataset and seed a session from `request`, starting on page 1.
fn open_dashboard(
    args: &QueryArgs,
    config: &DashboardConfig,
    request: QueryRequest,
) -> CliResult<Dashboard> {
    let path = dataset_path(args.data.as_deref(), config)?;
    let records = salesq_io::load_dataset(&path)?;
    let mut dashboard = Dashboard::new(records, config);
    *dashboard.session_mut() = Session::from_request(QueryRequest { page: 1, ..request });
    Ok(dashboard)
}

/// `< 1 [2] 3 ... 9 >`, with the arrows only where a neighbouring page exists.
fn page_window(p: &PaginationInfo, slots: &[PageSlot]) -> String {
    let mut parts = Vec::with_capacity(slots.len() + 2);
    if p.has_prev() {
        parts.push("<".to_string());
    }
    parts.extend(slots.iter().map(|s| match s {
        PageSlot::Page(n) if *n == p.current_page => format!("[{}]", n),
        PageSlot::Page(n) => n.to_string(),
        PageSlot::Gap => "...".to_string(),
    }));
    if p.has_next() {
        parts.push(">".to_string());
    }
    parts.join(" ")
}

fn print_table(output: &QueryOutput<'_>, slots: &[PageSlot]) {
    println!(
        "{:<10} {:<10} {:<22} {:<14} {:<7} {:>4} {:<14} {:>4} {:>10} {:>10}",
        "Txn", "Date", "Customer", "Phone", "Gender", "Age", "Category", "Qty", "Total", "Final"
    );
    for r in &output.records {
        println!(
            "{:<10} {:<10} {:<22} {:<14} {:<7} {:>4} {:<14} {:>4} {:>10.2} {:>10.2}",
            truncate(&r.transaction_id, 10),
            truncate(&r.date, 10),
            truncate(&r.customer_name, 22),
            truncate(&r.phone_number, 14),
            truncate(&r.gender, 7),
            r.age,
            truncate(&r.product_category, 14),
            r.quantity,
            r.total_amount,
            r.final_amount,
        );
    }
    println!();

    let p = &output.pagination;
    match p.item_range() {
        Some((first, last)) => println!("Showing {}-{} of {} results", first, last, p.total_items),
        None => println!("No results"),
    }
    if !slots.is_empty() {
        println!("Pages: {}", page_window(p, slots));
    }

    let s = &output.stats;
    println!();
    println!("Total units sold: {}", s.total_units_sold);
    println!("Total amount:     {:.2}", s.total_amount);
    println!("Total discount:   {:.2}", s.total_discount);
    println!("Records:          {}", s.record_count);
}

fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(width.saturating_sub(1)).collect();
        out.push('…');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use salesq_core::sort::SortField;

    #[test]
    fn page_window_marks_current_page_and_neighbours() {
        let middle = PaginationInfo::new(90, 2, 10);
        assert_eq!(
            page_window(&middle, &middle.visible_pages(5)),
            "< 1 [2] 3 4 ... 9 >"
        );

        let first = PaginationInfo::new(15, 1, 10);
        assert_eq!(page_window(&first, &first.visible_pages(5)), "[1] 2 >");

        let last = PaginationInfo::new(15, 2, 10);
        assert_eq!(page_window(&last, &last.visible_pages(5)), "< 1 [2]");
    }

    #[test]
    fn view_config_overrides_env_defaults() {
        let mut config = DashboardConfig::default();
        let view = ViewConfig {
            page_size: Some(25),
            dataset: Some("data/sales.json".into()),
            ..Default::default()
        };
        apply_view_config(&mut config, &view);
        assert_eq!(config.page_size, 25);
        assert_eq!(config.dataset_path.as_deref(), Some("data/sales.json"));
        assert_eq!(config.max_visible_pages, 5);
    }

    #[test]
    fn flags_override_view_per_dimension() {
        let mut request = QueryRequest::default();
        request.criteria.regions.insert("North".into());
        request.criteria.genders.insert("Female".into());

        let args = QueryArgs {
            region: vec!["East".into(), "West".into()],
            age_min: Some(20),
            age_max: Some(40),
            sort: Some(SortSpec::asc(SortField::Quantity)),
            ..Default::default()
        };
        apply_flags(&mut request, &args);

        let regions: Vec<&str> = request.criteria.regions.iter().map(String::as_str).collect();
        assert_eq!(regions, ["East", "West"]);
        assert!(request.criteria.genders.contains("Female"));
        assert_eq!(request.criteria.age_range, Some(AgeRange::new(20, 40)));
        assert_eq!(request.sort, SortSpec::asc(SortField::Quantity));
    }

    #[test]
    fn truncates_long_cells() {
        assert_eq!(truncate("Customer", 22), "Customer");
        assert_eq!(truncate("abcdef", 4), "abc…");
    }

    #[test]
    fn cli_parses_query_flags() {
        let cli = Cli::try_parse_from([
            "salesq", "query", "--data", "sales.json", "--tag", "VIP", "--tag", "New",
            "--sort", "customerName:asc", "--page", "2",
        ])
        .unwrap();
        match cli.command {
            Commands::Query { args, page, .. } => {
                assert_eq!(args.tag, vec!["VIP", "New"]);
                assert_eq!(args.sort, Some(SortSpec::asc(SortField::CustomerName)));
                assert_eq!(page, Some(2));
            }
            _ => panic!("expected query"),
        }
    }
}
