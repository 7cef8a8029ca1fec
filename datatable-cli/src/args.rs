use std::path::PathBuf;

use clap::{ArgAction, Parser};

/// Filter, sort and page through a JSON table from the terminal.
#[derive(Debug, Parser)]
#[command(name = "datatable", version)]
pub struct Args {
    /// Table source file: columns, rows and table options as JSON.
    pub source: PathBuf,

    /// Text typed into the search input.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Select a facet value. Repeat to select several.
    #[arg(short, long = "facet", value_name = "COLUMN=VALUE", value_parser = parse_facet)]
    pub facets: Vec<(String, String)>,

    /// Click a column header. Repeat to click again.
    #[arg(long = "sort", value_name = "COLUMN")]
    pub sort: Vec<String>,

    /// Hide a column.
    #[arg(long = "hide", value_name = "COLUMN")]
    pub hide: Vec<String>,

    /// Show a column hidden by default.
    #[arg(long = "show", value_name = "COLUMN")]
    pub show: Vec<String>,

    /// Rows per page.
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Page to display, starting at 1.
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    /// Print the table state as JSON instead of rendering it.
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Write logs to a file instead of stderr.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

fn parse_facet(s: &str) -> Result<(String, String), String> {
    let (column, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected COLUMN=VALUE, got '{}'", s))?;
    if column.is_empty() {
        return Err(format!("missing column in '{}'", s));
    }
    Ok((column.to_string(), value.to_string()))
}
