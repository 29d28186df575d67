use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "koru-cli", version, about = "Koru CLI")]
struct Cli {
    /// User id to operate on (defaults to the local device user)
    #[arg(long, global = true)]
    user: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Local profile and onboarding
    Profile {
        #[command(subcommand)]
        action: commands::profile::ProfileAction,
    },
    /// Visit-gated mood check-in flow
    Checkin {
        #[command(subcommand)]
        action: commands::checkin::CheckinAction,
    },
    /// Mood log, trend, and streak
    Mood {
        #[command(subcommand)]
        action: commands::mood::MoodAction,
    },
    /// Daily habit counters
    Habit {
        #[command(subcommand)]
        action: commands::habit::HabitAction,
    },
    /// Guided growth plan
    Plan {
        #[command(subcommand)]
        action: commands::plan::PlanAction,
    },
    /// Dashboard snapshot
    Dashboard,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Remove all stored state for the user
    Reset,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Profile { action } => commands::profile::run(action, cli.user),
        Commands::Checkin { action } => commands::checkin::run(action, cli.user),
        Commands::Mood { action } => commands::mood::run(action, cli.user),
        Commands::Habit { action } => commands::habit::run(action, cli.user),
        Commands::Plan { action } => commands::plan::run(action, cli.user),
        Commands::Dashboard => commands::dashboard::run(cli.user),
        Commands::Config { action } => commands::config::run(action),
        Commands::Reset => commands::reset::run(cli.user),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
