#![forbid(unsafe_code)]

//! Wiring from parsed arguments to command handlers and renderers

use std::path::PathBuf;

use termcolor::ColorChoice;

use crate::cli::args::{
    Cli, ColorArg, Command, ListCommand, SearchCommand, StatusOutputArgs, UserOutputArgs,
};
use crate::client::{Api, HttpApi};
use crate::commands::{SortOptions, list, search};
use crate::config::Settings;
use crate::error::{Error, Result};
use crate::output::{Format, TableFormatter, csv};
use crate::types::{Status, User};

/// Loads settings, builds the HTTP client and runs the command.
pub fn run(cli: Cli) -> Result<()> {
    let settings = Settings::load(&config_path(&cli))?;
    let color = resolve_color(&cli, &settings);
    let api = HttpApi::from_settings(&settings)?;
    dispatch(&api, &settings, color, cli.command)
}

fn config_path(cli: &Cli) -> PathBuf {
    if let Some(path) = &cli.config {
        return path.clone();
    }
    if let Ok(path) = std::env::var("CHIRP_CONFIG") {
        return PathBuf::from(path);
    }
    match std::env::var_os("HOME") {
        Some(home) => PathBuf::from(home).join(".chirp.toml"),
        None => PathBuf::from(".chirp.toml"),
    }
}

/// The command-line flag wins over the settings file.
fn resolve_color(cli: &Cli, settings: &Settings) -> ColorChoice {
    match cli.color {
        Some(ColorArg::Always) => ColorChoice::Always,
        Some(ColorArg::Never) => ColorChoice::Never,
        Some(ColorArg::Auto) | None => settings.output.color.to_color_choice(),
    }
}

/// Runs one parsed command against `api` and renders the result.
pub fn dispatch(
    api: &impl Api,
    settings: &Settings,
    color: ColorChoice,
    command: Command,
) -> Result<()> {
    let identity = settings.account.screen_name.as_str();
    let table = TableFormatter::new(color);
    match command {
        Command::List(ListCommand::Add { id, list, users }) => {
            let change = list::add(api, &list, &users, id)?;
            table.write_membership_change(identity, &change)?;
        }
        Command::List(ListCommand::Create {
            private,
            list,
            description,
        }) => {
            let created = list::create(api, &list, description.as_deref(), private)?;
            table.write_list_created(identity, &created)?;
        }
        Command::List(ListCommand::Information { csv, id, list }) => {
            let info = list::information(api, identity, &list, id)?;
            if csv.csv {
                print!("{}", csv::format_list(&info));
            } else {
                table.write_list_information(&info)?;
            }
        }
        Command::List(ListCommand::Members { output, id, list }) => {
            let users = list::members(api, identity, &list, id, sort_options(&output))?;
            write_users(&table, &users, output.format())?;
        }
        Command::List(ListCommand::Remove { id, list, users }) => {
            let change = list::remove(api, &list, &users, id)?;
            table.write_membership_change(identity, &change)?;
        }
        Command::List(ListCommand::Timeline {
            output,
            id,
            number,
            reverse,
            list,
        }) => {
            let number = number.unwrap_or(settings.output.default_results);
            let statuses = list::timeline(api, identity, &list, id, number, reverse)?;
            write_statuses(&table, &statuses, output.format())?;
        }
        Command::Search(SearchCommand::All {
            output,
            number,
            reverse,
            query,
        }) => {
            let number = number.unwrap_or(settings.output.default_results);
            let statuses = search::all(api, &query, number, reverse)?;
            write_statuses(&table, &statuses, output.format())?;
        }
        Command::Search(SearchCommand::Favorites { output, query }) => {
            let statuses = search::favorites(api, &query)?;
            write_statuses(&table, &statuses, output.format())?;
        }
        Command::Search(SearchCommand::List {
            output,
            id,
            list,
            query,
        }) => {
            let statuses = search::list(api, identity, &list, id, &query)?;
            write_statuses(&table, &statuses, output.format())?;
        }
        Command::Search(SearchCommand::Mentions { output, query }) => {
            let statuses = search::mentions(api, &query)?;
            write_statuses(&table, &statuses, output.format())?;
        }
        Command::Search(SearchCommand::Retweets { output, query }) => {
            let statuses = search::retweets(api, &query)?;
            write_statuses(&table, &statuses, output.format())?;
        }
        Command::Search(SearchCommand::Timeline {
            output,
            id,
            mut args,
        }) => {
            // Clap guarantees one or two values; the last is the query.
            let query = args
                .pop()
                .ok_or_else(|| Error::InvalidReference("missing search query".to_string()))?;
            let user = args.pop();
            let statuses = search::timeline(api, user.as_deref(), id, &query)?;
            write_statuses(&table, &statuses, output.format())?;
        }
        Command::Search(SearchCommand::Users { output, query }) => {
            let users = search::users(api, &query, sort_options(&output))?;
            write_users(&table, &users, output.format())?;
        }
    }
    Ok(())
}

impl StatusOutputArgs {
    fn format(&self) -> Format {
        Format::from_flags(self.csv, self.long)
    }
}

impl UserOutputArgs {
    fn format(&self) -> Format {
        Format::from_flags(self.csv, self.long)
    }
}

fn sort_options(output: &UserOutputArgs) -> SortOptions {
    SortOptions {
        order: output.sort,
        unsorted: output.unsorted,
        reverse: output.reverse,
    }
}

fn write_statuses(table: &TableFormatter, statuses: &[Status], format: Format) -> Result<()> {
    match format {
        Format::Csv => print!("{}", csv::format_statuses(statuses)),
        Format::Long => table.write_statuses_long(statuses)?,
        Format::Short => table.write_statuses(statuses)?,
    }
    Ok(())
}

fn write_users(table: &TableFormatter, users: &[User], format: Format) -> Result<()> {
    match format {
        Format::Csv => print!("{}", csv::format_users(users)),
        Format::Long => table.write_users_long(users)?,
        Format::Short => table.write_users(users)?,
    }
    Ok(())
}
