use clap::{Parser, Subcommand};

use broadcast_client::application::errors::ApiError;
use broadcast_client::application::locale::resolve_locale;
use broadcast_client::application::services::{BroadcastClient, SessionService};
use broadcast_client::application::submission::JoinPrompt;
use broadcast_client::domain::entities::{Broadcast, GroupContext, GroupInfo};
use broadcast_client::infrastructure::config::Config;
use broadcast_client::infrastructure::database::SqliteStore;
use broadcast_client::infrastructure::http::HttpTransport;

#[derive(Parser)]
#[command(name = "broadcast-client")]
#[command(about = "Group broadcast client", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.yaml")]
    config: String,

    /// Group id (overrides the active group)
    #[arg(short, long)]
    group: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// List broadcasts of the group
    List,
    /// Post a broadcast
    Post {
        /// Payload, usually serialized message content
        data: String,
    },
    /// Recall a broadcast
    Recall {
        broadcast_id: String,
    },
    /// Manage the active group
    Group {
        #[command(subcommand)]
        action: GroupAction,
    },
    /// Pick and store the display locale
    Locale {
        /// Negotiated language (defaults to $LANG)
        #[arg(long)]
        negotiated: Option<String>,
    },
    /// Show version
    Version,
    /// Generate default config
    InitConfig,
}

#[derive(Subcommand)]
enum GroupAction {
    /// Set the active group
    Set {
        group_id: String,
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "")]
        icon_url: String,
    },
    /// Show the active group card
    Show,
    /// Forget the active group
    Clear,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Version => {
            println!("broadcast-client v{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::InitConfig => init_config(),
        command => {
            let config = load_config(&cli.config);
            let rt = match tokio::runtime::Runtime::new() {
                Ok(rt) => rt,
                Err(e) => {
                    tracing::error!("Failed to start runtime: {}", e);
                    std::process::exit(1);
                }
            };
            if let Err(e) = rt.block_on(run(command, cli.group, config)) {
                tracing::error!("{}", e);
                std::process::exit(1);
            }
        }
    }
}

fn load_config(path: &str) -> Config {
    let mut config = if std::path::Path::new(path).exists() {
        Config::load(path).unwrap_or_else(|e| {
            tracing::warn!("Failed to load config: {}, using defaults", e);
            Config::default()
        })
    } else {
        Config::default()
    };
    config.apply_env();
    config
}

async fn run(command: Commands, group_override: Option<String>, config: Config) -> Result<(), ApiError> {
    let session = SessionService::new(SqliteStore::new(&config.session.path)?);

    match command {
        Commands::List => {
            let client = http_client(&config)?;
            let group = active_group(&session, group_override).await?;
            let broadcasts = client.list_broadcasts(&group).await?;
            tracing::info!("Fetched {} broadcasts", broadcasts.len());
            for broadcast in &broadcasts {
                println!("{}", format_broadcast(broadcast));
            }
        }
        Commands::Post { data } => {
            let client = http_client(&config)?;
            let group = active_group(&session, group_override).await?;
            let info = session
                .load_group()
                .await?
                .filter(|g| g.group_id == group.group_id)
                .unwrap_or_else(|| GroupInfo::new(group.group_id.clone()));

            let prompt = JoinPrompt::new(Some(info), "Send broadcast");
            match prompt.activate(|| client.post_broadcast(&group, &data)).await {
                Some(Ok(true)) => println!("Broadcast sent"),
                Some(Ok(false)) => println!("Broadcast rejected by server"),
                Some(Err(e)) => return Err(e),
                None => tracing::warn!("Submission skipped"),
            }
        }
        Commands::Recall { broadcast_id } => {
            let client = http_client(&config)?;
            let group = active_group(&session, group_override).await?;
            if client.recall_broadcast(&group, &broadcast_id).await? {
                println!("Broadcast {} recalled", broadcast_id);
            } else {
                println!("Broadcast {} was not recalled", broadcast_id);
            }
        }
        Commands::Group { action } => match action {
            GroupAction::Set { group_id, name, description, icon_url } => {
                let info = GroupInfo::new(group_id)
                    .with_name(name)
                    .with_description(description)
                    .with_icon_url(icon_url);
                session.save_group(&info).await?;
            }
            GroupAction::Show => {
                let prompt = JoinPrompt::new(session.load_group().await?, "Join");
                match prompt.render() {
                    Some(card) => println!("{}", card),
                    None => println!("No active group. Use `group set <id>`."),
                }
            }
            GroupAction::Clear => session.clear_group().await?,
        },
        Commands::Locale { negotiated } => {
            let negotiated = negotiated
                .or_else(|| std::env::var("LANG").ok())
                .unwrap_or_default();
            let locale = resolve_locale(config.locale.lang.as_deref(), &negotiated);
            session.save_locale(&locale).await?;
            println!("{}", locale);
        }
        Commands::Version | Commands::InitConfig => {}
    }

    Ok(())
}

fn http_client(config: &Config) -> Result<BroadcastClient<HttpTransport>, ApiError> {
    let transport = HttpTransport::new(&config.api.base_url, config.api.token.clone(), config.timeout())?;
    Ok(BroadcastClient::new(transport))
}

async fn active_group(
    session: &SessionService<SqliteStore>,
    group_override: Option<String>,
) -> Result<GroupContext, ApiError> {
    match group_override {
        Some(group_id) => Ok(GroupContext::new(group_id)),
        None => Ok(session.group_context().await?),
    }
}

fn format_broadcast(broadcast: &Broadcast) -> String {
    format!(
        "{} [{}] {} {} ({}): {}",
        broadcast.broadcast_id,
        broadcast.status,
        broadcast
            .created_time()
            .map(|t| t.format("%Y-%m-%d %H:%M %:z").to_string())
            .unwrap_or_else(|| broadcast.created_at.clone()),
        broadcast.author,
        broadcast.category,
        broadcast.data
    )
}

fn init_config() {
    match Config::default().to_yaml() {
        Ok(yaml) => {
            println!("{}", yaml);
            println!("\nSave this to config.yaml and adjust as needed.");
        }
        Err(e) => tracing::error!("{}", e),
    }
}
