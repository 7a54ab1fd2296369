use std::path::{Path, PathBuf};

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::config_io;
use crate::io::storage::Storage;
use crate::model::filter::{visible, FilterMode};
use crate::store::TaskStore;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;

    match cli.command {
        // No subcommand → list everything
        None => cmd_list(ListArgs { filter: None }, &data_dir, json),
        Some(cmd) => match cmd {
            Commands::Add(args) => cmd_add(args, &data_dir, json),
            Commands::List(args) => cmd_list(args, &data_dir, json),
            Commands::Toggle(args) => cmd_toggle(args, &data_dir, json),
            Commands::Delete(args) => cmd_delete(args, &data_dir, json),
        },
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn resolve_data_dir(flag: Option<&str>) -> Result<PathBuf, Box<dyn std::error::Error>> {
    match flag {
        Some(dir) => std::fs::canonicalize(dir)
            .map_err(|e| format!("cannot resolve -C path '{}': {}", dir, e).into()),
        None => Ok(std::env::current_dir()?),
    }
}

fn open_store(data_dir: &Path) -> TaskStore {
    TaskStore::load(Storage::new(data_dir))
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_add(args: AddArgs, data_dir: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = open_store(data_dir);
    let id = store.add(&args.text)?;

    if json {
        let out = AddJson {
            id,
            added: id.is_some(),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else if let Some(id) = id {
        println!("added {}", id);
    }
    Ok(())
}

fn cmd_list(args: ListArgs, data_dir: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store(data_dir);
    let mode = match args.filter.as_deref() {
        Some(s) => s.parse::<FilterMode>()?,
        None => config_io::read_config(data_dir)?
            .default_filter
            .unwrap_or_default(),
    };

    let shown = visible(store.tasks(), mode);
    if json {
        let out = TaskListJson {
            filter: mode,
            tasks: shown.iter().map(task_to_json).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        for task in &shown {
            println!("{}", task_row(task));
        }
    }
    Ok(())
}

fn cmd_toggle(args: IdArgs, data_dir: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = open_store(data_dir);
    let matched = store.toggle(args.id)?;
    report_mutation("toggled", args.id, matched, json)
}

fn cmd_delete(args: IdArgs, data_dir: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = open_store(data_dir);
    let matched = store.delete(args.id)?;
    report_mutation("deleted", args.id, matched, json)
}

/// An unknown id is a silent no-op: nothing printed in text mode, exit 0.
fn report_mutation(
    verb: &str,
    id: i64,
    matched: bool,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        let out = MutationJson { id, matched };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else if matched {
        println!("{} {}", verb, id);
    }
    Ok(())
}
