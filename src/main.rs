//! pagebar - page-window planning for pagination controls.
//!
//! Usage:
//!   pagebar [--total-count N]      Launch the interactive pager
//!   pagebar plan                   Print the button row for a page
//!   pagebar range                  Print the "Showing X to Y of Z" caption
//!   pagebar show                   Print both, deriving pages from counts
//!   pagebar --help                 Show help

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Context, Result};
use itertools::Itertools;
use tracing_subscriber::EnvFilter;

use pagebar_core::{
    DEFAULT_ITEMS_PER_PAGE, PageWindowPlanner, PaginationConfig, PaginationPlan, PaginationState,
    ResultSummary, result_range,
};
use pagebar_tui::{ThemeVariant, TuiConfig, UserSettings};

#[derive(Parser)]
#[command(
    name = "pagebar",
    version,
    about = "Page-window planning for pagination controls",
    long_about = "pagebar computes which page buttons a pagination control shows and \
                  the result range caption that goes with them.\n\n\
                  Launch the interactive pager by running `pagebar`, or use \
                  subcommands to print plans for scripting."
)]
struct Cli {
    /// Number of results to page through in the interactive pager
    #[arg(short = 'c', long, default_value = "95")]
    total_count: usize,

    /// Results per page (defaults to the saved setting)
    #[arg(short = 'n', long)]
    per_page: Option<usize>,

    /// Page to open on
    #[arg(short, long, default_value = "1")]
    page: usize,

    /// Color theme (defaults to the saved setting)
    #[arg(short, long)]
    theme: Option<ThemeVariant>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the button row for a page
    Plan {
        /// Current page (1-based)
        #[arg(short, long, default_value = "1")]
        page: usize,

        /// Number of pages
        #[arg(short = 't', long)]
        total_pages: usize,

        /// Page count above which the row is compressed
        #[arg(short, long, default_value = "5")]
        max_pages: usize,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Print the result range caption for a page
    Range {
        /// Current page (1-based)
        #[arg(short, long, default_value = "1")]
        page: usize,

        /// Number of results across all pages
        #[arg(short = 'c', long)]
        total_count: usize,

        /// Results per page
        #[arg(short = 'n', long, default_value_t = DEFAULT_ITEMS_PER_PAGE)]
        per_page: usize,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Print the button row and caption, deriving the page count from the result count
    Show {
        /// Current page (1-based)
        #[arg(short, long, default_value = "1")]
        page: usize,

        /// Number of results across all pages
        #[arg(short = 'c', long)]
        total_count: usize,

        /// Results per page
        #[arg(short = 'n', long, default_value_t = DEFAULT_ITEMS_PER_PAGE)]
        per_page: usize,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Command::Plan {
            page,
            total_pages,
            max_pages,
            format,
        }) => {
            run_plan(page, total_pages, max_pages, format)?;
        }
        Some(Command::Range {
            page,
            total_count,
            per_page,
            format,
        }) => {
            run_range(page, total_count, per_page, format)?;
        }
        Some(Command::Show {
            page,
            total_count,
            per_page,
            format,
        }) => {
            run_show(page, total_count, per_page, format)?;
        }
        None => {
            let mut config = TuiConfig::from_settings(UserSettings::load()).with_start_page(cli.page);
            if let Some(theme) = cli.theme {
                config = config.with_theme(theme);
            }
            if let Some(per_page) = cli.per_page {
                let pagination = PaginationConfig::builder()
                    .items_per_page(per_page)
                    .max_pages_to_show(config.settings.pagination.max_pages_to_show)
                    .build()
                    .context("Invalid --per-page")?;
                config = config.with_pagination(pagination);
            }
            tracing::debug!(total_count = cli.total_count, ?config, "launching pager");
            pagebar_tui::run_with_config(cli.total_count, config)?;
        }
    }

    Ok(())
}

/// Print the button row for a page.
fn run_plan(page: usize, total_pages: usize, max_pages: usize, format: OutputFormat) -> Result<()> {
    let config = PaginationConfig::builder()
        .max_pages_to_show(max_pages)
        .build()
        .context("Invalid --max-pages")?;

    let state = PaginationState::new(page, total_pages);
    state.validate().context("Invalid page")?;

    let plan = state.plan(&config.planner());

    match format {
        OutputFormat::Text => print_plan(&plan),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&plan)?),
    }

    Ok(())
}

/// Print the result range caption for a page.
fn run_range(page: usize, total_count: usize, per_page: usize, format: OutputFormat) -> Result<()> {
    let state = PaginationState::from_total_count(page, total_count, per_page);
    state.validate().context("Invalid page")?;

    let summary = result_range(page, total_count, per_page);

    match format {
        OutputFormat::Text => println!(" {summary}"),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
    }

    Ok(())
}

/// Print the button row and caption for a result count.
fn run_show(page: usize, total_count: usize, per_page: usize, format: OutputFormat) -> Result<()> {
    let state = PaginationState::from_total_count(page, total_count, per_page);
    state.validate().context("Invalid page")?;

    let plan = state.plan(&PageWindowPlanner::new());
    let summary = state.summary();

    match format {
        OutputFormat::Text => {
            print_summary(&summary);
            print_plan(&plan);
        }
        OutputFormat::Json => {
            let report = serde_json::json!({
                "plan": plan,
                "summary": summary,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

fn print_summary(summary: &ResultSummary) {
    println!();
    println!(" {summary}");
}

fn print_plan(plan: &PaginationPlan) {
    let previous = if plan.previous_disabled() { "·" } else { "‹" };
    let next = if plan.next_disabled() { "·" } else { "›" };

    println!();
    if plan.is_empty() {
        println!(" {previous}  (no pages)  {next}");
    } else {
        println!(" {previous} {} {next}", plan.entries.iter().join(" "));
    }
    println!();
    println!(
        " previous: {}   next: {}",
        enabled(!plan.previous_disabled()),
        enabled(!plan.next_disabled())
    );
}

fn enabled(value: bool) -> &'static str {
    if value { "enabled" } else { "disabled" }
}
