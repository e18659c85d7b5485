use std::process;

use chrono::Local;
use clap::{Parser, Subcommand};
use serde::Serialize;

use chair_ledger::{
    config::{Config, ConfigManager},
    core::{
        forms::{parse_id, parse_increment, EarningForm, ExpenseForm, GoalForm},
        services::{SnapshotService, SummaryService},
        SnapshotManager,
    },
    domain::SnapshotCommand,
    errors::LedgerError,
    init,
    storage::JsonStorage,
};

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(
    name = "chair_ledger_cli",
    version,
    about = "Daily earnings, fixed costs and goal pace for a barber's chair"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Today's totals, burn rate, goal progress and simulator
    Summary,

    /// Earnings grouped by local calendar day, most recent first
    History,

    /// Log an earning stamped now
    Earn {
        /// Amount received (e.g., "35" or "42.50")
        amount: String,

        /// Payment channel: cash or card
        channel: String,

        /// service (default) or tip
        category: Option<String>,
    },

    /// Fixed cost management
    #[command(subcommand)]
    Expense(ExpenseCommands),

    /// Create the goal, or replace its name, cadence and amount
    Goal {
        name: String,

        /// weekly or monthly
        cadence: String,

        amount: String,
    },

    /// Project the yearly gain of a price increase (0-20)
    Simulate { increment: String },

    /// Drop everything logged since local midnight
    ResetToday,

    /// Clear goal, earnings and fixed costs
    Reset,
}

#[derive(Subcommand)]
enum ExpenseCommands {
    /// Add a recurring fixed cost
    Add {
        name: String,
        amount: String,

        /// daily or weekly
        frequency: String,
    },

    /// Remove a fixed cost by id
    Remove { id: String },

    /// List fixed costs
    List,
}

fn main() {
    let cli = Cli::parse();
    init();

    if let Err(err) = run(cli.command) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn load_config() -> Result<Config, LedgerError> {
    Ok(ConfigManager::new().load()?)
}

fn run(command: Commands) -> CliResult<()> {
    let config = load_config()?;
    let storage = JsonStorage::new(None, &config.record_name)?;
    let mut manager = SnapshotManager::open(Box::new(storage));
    let now = Local::now();

    match command {
        Commands::Summary => {
            print_json(&SummaryService::dashboard(manager.snapshot(), &now, &config))?;
        }
        Commands::History => {
            print_json(&SummaryService::history(manager.snapshot(), &Local))?;
        }
        Commands::Earn {
            amount,
            channel,
            category,
        } => {
            let form = EarningForm {
                amount,
                channel,
                category,
            };
            apply(&mut manager, SnapshotService::record_earning(&form, &now)?)?;
            // Windows end before `now`, so read the clock again to include the new entry.
            print_json(&SummaryService::today(manager.snapshot(), &Local::now()))?;
        }
        Commands::Expense(ExpenseCommands::Add {
            name,
            amount,
            frequency,
        }) => {
            let form = ExpenseForm {
                name,
                amount,
                frequency,
            };
            apply(&mut manager, SnapshotService::add_expense(&form)?)?;
            print_json(&manager.snapshot().expenses)?;
        }
        Commands::Expense(ExpenseCommands::Remove { id }) => {
            let id = parse_id("id", &id)?;
            let command = SnapshotService::remove_expense(manager.snapshot(), id)?;
            apply(&mut manager, command)?;
            print_json(&manager.snapshot().expenses)?;
        }
        Commands::Expense(ExpenseCommands::List) => {
            print_json(&manager.snapshot().expenses)?;
        }
        Commands::Goal {
            name,
            cadence,
            amount,
        } => {
            let form = GoalForm {
                name,
                cadence,
                amount,
            };
            apply(&mut manager, SnapshotService::set_goal(&form)?)?;
            print_json(&SummaryService::goal_progress(
                manager.snapshot(),
                &Local::now(),
                &config,
            ))?;
        }
        Commands::Simulate { increment } => {
            let increment = parse_increment(&increment)?;
            let command =
                SnapshotService::set_simulator_increment(manager.snapshot(), increment as i64)?;
            apply(&mut manager, command)?;
            print_json(&SummaryService::simulate(increment, &config))?;
        }
        Commands::ResetToday => {
            apply(&mut manager, SnapshotService::reset_today(&now))?;
            print_json(&SummaryService::today(manager.snapshot(), &now))?;
        }
        Commands::Reset => {
            apply(&mut manager, SnapshotService::reset_all())?;
            println!("All data cleared.");
        }
    }

    Ok(())
}

fn apply(manager: &mut SnapshotManager, command: SnapshotCommand) -> CliResult<()> {
    manager.apply(command)?;
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
