//! Command-line interface of the `roster` binary.
//!
//! ```text
//! roster list engineers --search go --filter status=available --sort rating:desc
//! roster list work-reports --params "month=2024-09&sort=hours:desc&page=2" --json
//! roster screens
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use roster_seeker::{QueryConfig, QueryState, Seekable, Sort};
use roster_toast::{Toast, Toaster};
use serde::Serialize;

use crate::error::RosterError;
use crate::fixtures::{self, Fixtures};
use crate::notify;
use crate::screens::{self, Screen};
use crate::settings::Settings;
use crate::views::{render_table, ListScreen, Message, TableRow};

/// Browse the staffing desk's lists.
#[derive(Debug, Parser)]
#[command(name = "roster", version, about)]
pub struct Cli {
    /// Settings file (YAML)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log debug events to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List one screen's records
    List(ListArgs),

    /// Show each screen's searchable, filterable and sortable fields
    Screens,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// engineers, projects, clients, contracts or work-reports
    pub screen: Screen,

    /// Case-insensitive text to look for
    #[arg(short, long)]
    pub search: Option<String>,

    /// Exact-match filter; "all" clears it. Repeatable
    #[arg(short, long = "filter", value_name = "KEY=VALUE")]
    pub filters: Vec<String>,

    /// Sort field with optional direction
    #[arg(long, value_name = "FIELD[:asc|desc]")]
    pub sort: Option<String>,

    /// Page to show, starting at 1
    #[arg(short, long)]
    pub page: Option<usize>,

    /// Saved state such as "q=go&status=available&page=2"; flags override it
    #[arg(long, value_name = "PARAMS")]
    pub params: Option<String>,

    /// Print the view as JSON
    #[arg(long)]
    pub json: bool,
}

impl ListArgs {
    /// Builds the query state: saved params first, then each flag.
    pub fn query_state(&self) -> Result<QueryState, RosterError> {
        let mut state = match &self.params {
            Some(params) => QueryState::from_params(params)?,
            None => QueryState::new(),
        };
        if let Some(term) = &self.search {
            state.set_search_term(term.as_str());
        }
        for filter in &self.filters {
            let (key, value) = parse_filter(filter)?;
            state.set_filter(key, value);
        }
        if let Some(sort) = &self.sort {
            state.set_sort(Sort::parse(sort)?);
        }
        if let Some(page) = self.page {
            state.set_page(page);
        }
        Ok(state)
    }
}

fn parse_filter(text: &str) -> Result<(&str, &str), RosterError> {
    match text.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Ok((key.trim(), value.trim())),
        _ => Err(RosterError::InvalidFilter(text.to_string())),
    }
}

/// What a command produced: the main output plus the notices raised while
/// producing it.
#[derive(Debug)]
pub struct Report {
    pub body: String,
    pub notices: Vec<Toast>,
}

/// Runs a parsed command line.
pub fn run(cli: &Cli) -> anyhow::Result<Report> {
    let settings = match &cli.config {
        Some(path) => Settings::load(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => Settings::default(),
    };
    let toaster = settings.toaster();

    let body = match &cli.command {
        Command::List(args) => {
            let data = fixtures::load().context("failed to load fixtures")?;
            list_screen(&settings, &data, args, &toaster)?
        }
        Command::Screens => describe_screens(&settings),
    };

    Ok(Report {
        body,
        notices: toaster.toasts(),
    })
}

fn list_screen(
    settings: &Settings,
    data: &Fixtures,
    args: &ListArgs,
    toaster: &Toaster,
) -> anyhow::Result<String> {
    let state = args
        .query_state()
        .with_context(|| format!("invalid query for {}", args.screen))?;
    let screen = args.screen;

    match screen {
        Screen::Engineers => render(
            screen,
            settings.apply(screen, screens::engineers()),
            &data.engineers,
            state,
            args.json,
            toaster,
        ),
        Screen::Projects => render(
            screen,
            settings.apply(screen, screens::projects()),
            &data.projects,
            state,
            args.json,
            toaster,
        ),
        Screen::Clients => render(
            screen,
            settings.apply(screen, screens::clients()),
            &data.clients,
            state,
            args.json,
            toaster,
        ),
        Screen::Contracts => render(
            screen,
            settings.apply(screen, screens::contracts()),
            &data.contracts,
            state,
            args.json,
            toaster,
        ),
        Screen::WorkReports => render(
            screen,
            settings.apply(screen, screens::work_reports()),
            &data.work_reports,
            state,
            args.json,
            toaster,
        ),
    }
}

fn render<T>(
    screen: Screen,
    config: QueryConfig<T>,
    records: &[T],
    state: QueryState,
    json: bool,
    toaster: &Toaster,
) -> anyhow::Result<String>
where
    T: Seekable + TableRow + Serialize,
{
    let requested = state.page();
    let mut list = ListScreen::new(screen.noun(), config).with_state(state);
    let view = list.render_mut(records);

    if view.page < requested {
        notify::message(
            toaster,
            &Message::warning(format!(
                "Page {requested} is past the end; showing page {}.",
                view.page
            )),
        );
    }
    for message in &view.messages {
        notify::message(toaster, message);
    }

    if json {
        let mut out = serde_json::to_string_pretty(&view).context("failed to encode view")?;
        out.push('\n');
        return Ok(out);
    }

    let mut out = String::new();
    if let Some(summary) = &view.filter_summary {
        out.push_str(&format!("{}: {summary}\n", screen.noun()));
    }
    out.push_str(&render_table(&view.items));
    out.push_str(&view.footer());
    out.push('\n');
    Ok(out)
}

fn describe_screens(settings: &Settings) -> String {
    [
        describe(Screen::Engineers, &settings.apply(Screen::Engineers, screens::engineers())),
        describe(Screen::Projects, &settings.apply(Screen::Projects, screens::projects())),
        describe(Screen::Clients, &settings.apply(Screen::Clients, screens::clients())),
        describe(Screen::Contracts, &settings.apply(Screen::Contracts, screens::contracts())),
        describe(
            Screen::WorkReports,
            &settings.apply(Screen::WorkReports, screens::work_reports()),
        ),
    ]
    .concat()
}

fn describe<T>(screen: Screen, config: &QueryConfig<T>) -> String {
    let page_size = match config.pagination().page_size() {
        0 => "all".to_string(),
        n => n.to_string(),
    };
    format!(
        "{screen}\n  search: {}\n  filter: {}\n  sort:   {}\n  page:   {page_size}\n",
        config.searchable_fields().join(", "),
        config.filter_keys().collect::<Vec<_>>().join(", "),
        config.sort_keys().collect::<Vec<_>>().join(", "),
    )
}

/// One line per notice for stderr, e.g. `Note: No engineers yet.`
pub fn format_notice(toast: &Toast) -> String {
    match (&toast.title, &toast.description) {
        (Some(title), Some(description)) => format!("{title}: {description}"),
        (Some(title), None) => title.clone(),
        (None, Some(description)) => description.clone(),
        (None, None) => String::new(),
    }
}
