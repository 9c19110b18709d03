use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use fintrack::cli::{
    handle_add_command, handle_budget_command, handle_dashboard_command, handle_history_command,
    AddArgs, BudgetCommands, DashboardArgs, HistoryArgs,
};
use fintrack::config::{paths::FinTrackPaths, settings::Settings};
use fintrack::display::format_category_list;
use fintrack::storage::Storage;

#[derive(Parser)]
#[command(
    name = "fintrack",
    version,
    about = "Personal expense tracker with a monthly budget dashboard",
    long_about = "FinTrack records your expenses against a monthly budget and a \
                  running cash balance, and shows where the month's money went."
)]
struct Cli {
    /// Log filter level (error, warn, info, debug, trace)
    #[arg(long, global = true, env = "FINTRACK_LOG")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a new expense
    Add(AddArgs),

    /// List recorded expenses, newest first
    History(HistoryArgs),

    /// Show this month's balance, spending and budget status
    #[command(alias = "status")]
    Dashboard(DashboardArgs),

    /// Budget settings: monthly budget, currency, initial balance
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// List expense categories
    Categories,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = FinTrackPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    init_logging(cli.log_level.as_deref().unwrap_or(&settings.log_level));

    let storage = Storage::new(paths.clone())?;

    match cli.command {
        Some(Commands::Add(args)) => handle_add_command(&storage, args)?,
        Some(Commands::History(args)) => handle_history_command(&storage, &settings, args)?,
        Some(Commands::Dashboard(args)) => handle_dashboard_command(&storage, args)?,
        Some(Commands::Budget(cmd)) => handle_budget_command(&storage, cmd)?,
        Some(Commands::Categories) => print!("{}", format_category_list()),
        Some(Commands::Config) => {
            // First run: write the defaults out so they can be edited
            if !paths.settings_file().exists() {
                settings.save(&paths)?;
            }

            println!("FinTrack Configuration");
            println!("======================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Expenses file:   {}", paths.expenses_file().display());
            println!("Session file:    {}", paths.session_file().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Log level:   {}", settings.log_level);
            println!("  Date format: {}", settings.date_format);
        }
        None => {
            println!("FinTrack - personal expense tracker");
            println!();
            println!("Run 'fintrack --help' for usage information.");
            println!("Run 'fintrack dashboard' to see this month's spending.");
        }
    }

    Ok(())
}

/// Log to stderr; `RUST_LOG` takes precedence over the configured level
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("fintrack={}", level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
