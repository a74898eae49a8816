use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_tracker::cli::{
    handle_add, handle_audit, handle_category_command, handle_delete, handle_export, handle_list,
    handle_summary, AddArgs, CategoryCommands, ExportArgs, FilterArgs,
};
use expense_tracker::config::{paths::DATA_DIR_ENV, ExpensePaths, Settings};
use expense_tracker::logging::init_tracing;
use expense_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Command-line expense tracker",
    long_about = "Log expenses by category and date, then list and total them \
                  by category and by day, week, month or year."
)]
struct Cli {
    /// Directory holding settings, records and the audit log
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    /// Show debug diagnostics on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the data directory
    Init,

    /// Log a new expense
    Add(AddArgs),

    /// List expenses, optionally filtered by category and period
    #[command(alias = "ls")]
    List(FilterArgs),

    /// Total expenses per category, optionally filtered
    Summary(FilterArgs),

    /// Delete an expense by ID
    #[command(alias = "rm")]
    Delete {
        /// Expense ID (full UUID or short "exp-" form)
        id: String,
    },

    /// Category management commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Export expenses to a file
    Export(ExportArgs),

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Initialize paths and settings
    let paths = match cli.data_dir {
        Some(dir) => ExpensePaths::with_base_dir(dir),
        None => ExpensePaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::new(paths.clone(), &settings)?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing expense tracker at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            storage.save_all()?;
            println!("Initialization complete!");
            println!();
            println!("Run 'expense category add <name>' to register a category.");
        }
        Some(Commands::Add(args)) => handle_add(&mut storage, &settings, args)?,
        Some(Commands::List(args)) => handle_list(&mut storage, &settings, args)?,
        Some(Commands::Summary(args)) => handle_summary(&mut storage, &settings, args)?,
        Some(Commands::Delete { id }) => handle_delete(&mut storage, &settings, id)?,
        Some(Commands::Category(cmd)) => handle_category_command(&mut storage, cmd)?,
        Some(Commands::Export(args)) => handle_export(&mut storage, args)?,
        Some(Commands::Audit { limit }) => handle_audit(&storage, limit)?,
        Some(Commands::Config) => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Initialized:      {}", paths.is_initialized());
            println!("Expense records:  {}", paths.expenses_file().display());
            println!("Categories:       {}", paths.categories_file().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!("Export directory: {}", paths.export_dir().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Audit enabled:   {}", settings.audit_enabled);
        }
        None => {
            println!("expense - command-line expense tracker");
            println!();
            println!("Run 'expense --help' for usage information.");
        }
    }

    Ok(())
}
