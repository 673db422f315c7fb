use crate::error::FormError;
use crate::form::binding::{ActionTag, TextField};
use crate::form::controller::{FormController, SubmitOutcome};
use crate::form::view::FormView;
use crate::itinerary::ItineraryModel;
use crate::options::OptionSet;
use clap::{ArgAction, Parser};
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::{Context, Editor, Helper, Highlighter, Hinter, Validator};
use std::path::PathBuf;
use tabled::Tabled;
use tabled::settings::Style;
use tracing::Level;

mod error;
mod form;
mod itinerary;
mod options;
mod travel_date;

#[derive(Parser)]
struct Args {
    /// Path to a JSON file with the month/day/year/time/passenger option lists
    #[arg(short, long, value_name = "FILE")]
    options: Option<PathBuf>,

    /// Log binding events to stderr (-v for info, -vv for debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Helper, Hinter, Highlighter, Validator)]
pub struct CompleteHelper {
    pub commands: Vec<String>,
    pub tags: Vec<String>,
    pub fields: Vec<String>,
}

impl Completer for CompleteHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, _pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, word, choices) = match line.split_once(' ') {
            Some(("select" | "options", rest)) => (line.len() - rest.len(), rest, &self.tags),
            Some(("type" | "erase" | "clear", rest)) => (line.len() - rest.len(), rest, &self.fields),
            Some(_) => return Ok((0, vec![])),
            None => (0, line, &self.commands),
        };

        let candidates = choices
            .iter()
            .filter(|c| c.starts_with(word))
            .map(|c| Pair {
                display: c.clone(),
                replacement: format!("{} ", c),
            })
            .collect();

        Ok((start, candidates))
    }
}

#[derive(Tabled)]
struct OptionRow {
    #[tabled(rename = "#")]
    index: usize,
    option: String,
    selected: &'static str,
}

fn show_dialog(outcome: &SubmitOutcome) {
    let title = if outcome.is_accepted() {
        outcome.title().green().bold()
    } else {
        outcome.title().red().bold()
    };
    println!("\n{}\n{}\n", title, outcome.message());
}

fn report(err: &FormError) {
    eprintln!("{} {}", "Error:".red(), err);
}

fn print_help() {
    println!("\nAvailable Commands:");
    println!("  type <field> <text>  - Type <text> into origin/destination, one keystroke at a time");
    println!("  erase <field> [n]    - Remove the last [n] characters (default 1) from a text field");
    println!("  clear <field>        - Erase a text field completely");
    println!("  select <tag> <value> - Pick <value> in a drop-down, e.g. select departure-month March");
    println!("  options <tag>        - List the values a drop-down offers");
    println!("  show                 - Show the itinerary as entered so far");
    println!("  submit               - Validate and submit the itinerary");
    println!("  help / ?             - Show this help menu");
    println!("  exit / quit          - Leave the form\n");
}

/// Count argument of `erase`: one when omitted, `None` when not a number.
fn erase_count(arg: &str) -> Option<usize> {
    match arg.trim() {
        "" => Some(1),
        n => n.parse::<usize>().ok(),
    }
}

fn select(view: &mut FormView, controller: &mut FormController, tag: &str, value: &str) -> Result<(), FormError> {
    let tag = tag.parse::<ActionTag>()?;
    view.selection_mut(tag).select(value)?;
    controller.on_selection_changed(view.selection(tag))
}

fn list_options(view: &FormView, tag: &str) -> Result<(), FormError> {
    let control = view.selection(tag.parse::<ActionTag>()?);
    let selected = control.selected_item();
    let rows = control
        .items()
        .iter()
        .enumerate()
        .map(|(index, item)| OptionRow {
            index,
            option: item.to_string(),
            selected: if Some(item) == selected { "*" } else { "" },
        })
        .collect::<Vec<_>>();
    let mut table = tabled::Table::new(&rows);
    table.with(Style::rounded());
    println!("{}", table);
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let options = match &args.options {
        Some(path) => OptionSet::load_from_file(path)?,
        None => OptionSet::default(),
    };

    let mut view = FormView::new();
    let mut controller = FormController::new(ItineraryModel::new(), &mut view, &options)?;
    println!("Travel itinerary form. Type 'help' for the list of commands.");

    let config = rustyline::Config::builder()
        .history_ignore_space(true)
        .completion_type(rustyline::CompletionType::List)
        .build();

    let helper = CompleteHelper {
        commands: ["type", "erase", "clear", "select", "options", "show", "submit", "help", "exit"]
            .iter()
            .map(|c| c.to_string())
            .collect(),
        tags: ActionTag::ALL.iter().map(|t| t.command().to_string()).collect(),
        fields: TextField::ALL.iter().map(|f| f.name().to_string()).collect(),
    };

    let mut rl = Editor::with_config(config)?;
    rl.set_helper(Some(helper));

    loop {
        let readline = rl.readline(">> ");
        match readline {
            Ok(line) => {
                let trimmed = line.trim_start();
                if trimmed.trim().is_empty() { continue; }

                rl.add_history_entry(trimmed)?;

                // text after the field name is typed as-is, spaces included
                let (cmd, rest) = trimmed.split_once(' ').unwrap_or((trimmed.trim_end(), ""));
                let (arg, tail) = rest.split_once(' ').unwrap_or((rest.trim_end(), ""));
                let result = match cmd {
                    "type" => {
                        if arg.is_empty() || tail.is_empty() {
                            println!("Usage: type <field> <text>");
                            Ok(())
                        } else {
                            arg.parse::<TextField>()
                                .map(|field| controller.type_text(&mut view, field, tail))
                        }
                    },
                    "erase" => {
                        match erase_count(tail) {
                            Some(count) if !arg.is_empty() => arg
                                .parse::<TextField>()
                                .map(|field| controller.erase(&mut view, field, count)),
                            _ => {
                                println!("Usage: erase <field> [n]");
                                Ok(())
                            }
                        }
                    },
                    "clear" => {
                        arg.parse::<TextField>().map(|field| {
                            let count = view.text(field).text().chars().count();
                            controller.erase(&mut view, field, count)
                        })
                    },
                    "select" => {
                        let value = tail.trim();
                        if value.is_empty() {
                            println!("Usage: select <tag> <value>");
                            Ok(())
                        } else {
                            select(&mut view, &mut controller, arg, value)
                        }
                    },
                    "options" => list_options(&view, arg),
                    "show" => {
                        let mut table = tabled::Table::new(controller.model().rows());
                        table.with(Style::rounded());
                        table.with(tabled::settings::Alignment::left());
                        println!("{}", table);
                        if let Some(outcome) = controller.last_outcome() {
                            println!("Last submission: {}", outcome.title());
                        }
                        Ok(())
                    },
                    "submit" => {
                        show_dialog(&controller.submit());
                        Ok(())
                    },
                    "help" | "?" => {
                        print_help();
                        Ok(())
                    },
                    "exit" | "quit" => break,
                    _ => {
                        println!("Unknown command: {}", cmd);
                        Ok(())
                    },
                };
                if let Err(e) = result {
                    report(&e);
                }
            },
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            },
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            },
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_erase_count() {
        assert_eq!(Some(1), erase_count(""));
        assert_eq!(Some(1), erase_count("  "));
        assert_eq!(Some(3), erase_count("3"));
        assert_eq!(None, erase_count("abc"));
        assert_eq!(None, erase_count("-2"));
    }
}
