/// Lendboard - operator console for the dashboard user list
use clap::{Args, Parser, Subcommand};
use lendboard_console::{
    config::ConsoleConfig,
    error::ConsoleError,
    render,
    wiring::{build_source, load_users, open_sqlite_store, open_store},
};
use lendboard_core::{
    organizations, FilterSpec, ListSession, PageSize, RecordId, StatusFilter, UserDetails,
    UserRecord,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "lendboard")]
#[command(about = "Browse, filter and edit dashboard users", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "LENDBOARD_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List users with stats, filters and pagination
    Users(UsersArgs),
    /// List the distinct organizations in the user list
    Organizations,
    /// Save a list row and show its detail profile
    Open {
        /// Row id from the list
        id: RecordId,
    },
    /// Show a stored detail profile
    Show { id: RecordId },
    /// Mark a user inactive
    Blacklist { id: RecordId },
    /// Mark a user active
    Activate { id: RecordId },
    /// List stored profile overrides
    Edits,
}

#[derive(Args)]
struct UsersArgs {
    #[arg(long, default_value = "")]
    organization: String,
    #[arg(long, default_value = "")]
    username: String,
    #[arg(long, default_value = "")]
    email: String,
    #[arg(long, default_value = "")]
    phone: String,
    /// Exact join date as displayed in the list
    #[arg(long, default_value = "")]
    date: String,
    /// active, inactive, pending or all
    #[arg(long, default_value = "all")]
    status: StatusFilter,
    #[arg(long, default_value_t = 1)]
    page: usize,
    /// 10, 20 or 50 (defaults to list.page_size)
    #[arg(long)]
    page_size: Option<usize>,
}

impl UsersArgs {
    fn filter(&self) -> FilterSpec {
        FilterSpec {
            organization: self.organization.clone(),
            username: self.username.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            date_joined: self.date.clone(),
            status: self.status,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lendboard=info,lendboard_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = ConsoleConfig::load(cli.config.as_deref())?;
    config.validate()?;

    let outcome = match cli.command {
        Commands::Users(args) => users(&config, args).await,
        Commands::Organizations => list_organizations(&config).await,
        Commands::Open { id } => open(&config, id).await,
        Commands::Show { id } => show(&config, id).await,
        Commands::Blacklist { id } => set_status(&config, id, false).await,
        Commands::Activate { id } => set_status(&config, id, true).await,
        Commands::Edits => list_edits(&config).await,
    };

    match outcome {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(ConsoleError::Load(message)) => {
            eprintln!("{}", render::render_error(&message));
            Ok(ExitCode::FAILURE)
        }
        Err(ConsoleError::Dashboard(e)) => {
            tracing::warn!(error = %e, "Could not read user profile");
            eprintln!("User not found");
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e.into()),
    }
}

async fn fetch(config: &ConsoleConfig) -> Result<Vec<UserRecord>, ConsoleError> {
    let source = build_source(config)?;
    load_users(source).await
}

async fn users(config: &ConsoleConfig, args: UsersArgs) -> Result<(), ConsoleError> {
    let page_size = match args.page_size {
        Some(size) => PageSize::try_from(size).map_err(|e| ConsoleError::Config(e.to_string()))?,
        None => config.page_size()?,
    };

    let records = fetch(config).await?;

    let mut session = ListSession::new(page_size);
    session.apply_filter(args.filter());
    let result = session.query(&records);
    session.go_to(args.page, result.total_pages);
    let result = session.query(&records);

    println!("{}", render::render_list(&result, page_size));
    Ok(())
}

async fn list_organizations(config: &ConsoleConfig) -> Result<(), ConsoleError> {
    let records = fetch(config).await?;
    for organization in organizations(&records) {
        println!("{}", organization);
    }
    Ok(())
}

async fn open(config: &ConsoleConfig, id: RecordId) -> Result<(), ConsoleError> {
    let records = fetch(config).await?;
    let record = records
        .iter()
        .find(|r| r.id == id)
        .ok_or(ConsoleError::UnknownRow(id))?;

    let details = UserDetails::new(open_store(config).await?);
    details.snapshot_row(record).await;

    let profile = details.open(id).await?;
    println!("{}", render::render_profile(&profile));
    Ok(())
}

async fn show(config: &ConsoleConfig, id: RecordId) -> Result<(), ConsoleError> {
    let details = UserDetails::new(open_store(config).await?);
    let profile = details.open(id).await?;
    println!("{}", render::render_profile(&profile));
    Ok(())
}

async fn set_status(config: &ConsoleConfig, id: RecordId, active: bool) -> Result<(), ConsoleError> {
    let details = UserDetails::new(open_store(config).await?);
    let profile = details.open(id).await?;

    let profile = if active {
        details.activate(profile).await
    } else {
        details.blacklist(profile).await
    };

    println!("{}", render::render_profile(&profile));
    Ok(())
}

async fn list_edits(config: &ConsoleConfig) -> Result<(), ConsoleError> {
    let store = open_sqlite_store(config).await?;
    let rows = store.list().await?;
    println!("{}", render::render_edits(&rows));
    Ok(())
}
