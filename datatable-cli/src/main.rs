mod args;
mod error;
mod render;

use std::fs::File;
use std::process::ExitCode;

use clap::Parser;
use datatable_lib::{Action, DataTable, TableContext, TableSource};
use log::{LevelFilter, error, info};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode, WriteLogger};

use args::Args;
use error::CliError;

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = init_logging(&args) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    match run(&args) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(args: &Args) -> Result<(), CliError> {
    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    match &args.log_file {
        Some(path) => {
            let file = File::create(path).map_err(|source| CliError::LogFile {
                path: path.clone(),
                source,
            })?;
            WriteLogger::init(level, Config::default(), file)?;
        }
        None => TermLogger::init(
            level,
            Config::default(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        )?,
    }
    Ok(())
}

fn run(args: &Args) -> Result<String, CliError> {
    let content = std::fs::read_to_string(&args.source).map_err(|source| CliError::Read {
        path: args.source.clone(),
        source,
    })?;
    let source: TableSource = serde_json::from_str(&content)?;
    info!(
        "Loaded {} rows, {} columns from {}",
        source.rows.len(),
        source.columns.len(),
        args.source.display()
    );

    let cx = TableContext::new(DataTable::from_source(source)?);
    for action in actions(args) {
        cx.dispatch(action);
    }

    cx.read(|view| -> Result<String, CliError> {
        if args.json {
            Ok(serde_json::to_string_pretty(&view.snapshot())?)
        } else {
            Ok(render::render(&view))
        }
    })
}

/// Translates command line options into the actions a user would perform,
/// in toolbar, header, column menu, then pagination order.
fn actions(args: &Args) -> Vec<Action> {
    let mut actions = Vec::new();

    if let Some(text) = &args.search {
        actions.push(Action::search(text.as_str()));
    }
    for (column_id, value) in &args.facets {
        actions.push(Action::toggle_facet(column_id.as_str(), value.as_str()));
    }
    for column_id in &args.sort {
        actions.push(Action::sort_by(column_id.as_str()));
    }
    for column_id in &args.hide {
        actions.push(Action::visibility(column_id.as_str(), false));
    }
    for column_id in &args.show {
        actions.push(Action::visibility(column_id.as_str(), true));
    }
    if let Some(size) = args.page_size {
        actions.push(Action::SetPageSize(size));
    }
    if args.page > 1 {
        actions.push(Action::GoToPage(args.page - 1));
    }

    actions
}
