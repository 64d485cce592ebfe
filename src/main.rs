use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use opcon::catalog::{Catalog, classify};
use opcon::model::{AccessLevel, RemoteConfig};
use opcon::remote::RemoteClient;
use opcon::session::{parse_param_pairs, typed_params};

#[derive(Parser)]
#[command(name = "opcon")]
#[command(about = "Operator console for live RPG channels", long_about = None)]
struct Cli {
    /// Base URL of the operator API
    #[arg(long, global = true, env = "OPCON_URL", default_value = "http://localhost:8000")]
    url: String,

    /// Bearer token for the operator API
    #[arg(long, global = true, env = "OPCON_TOKEN", default_value = "")]
    token: String,

    /// Channel to operate on
    #[arg(long, global = true, env = "OPCON_CHANNEL", default_value = "")]
    channel: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check operator access on the configured channel
    Status {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// List the commands available to this operator
    Commands {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// List the channel's player roster
    Players {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// List channels visible to this operator
    Channels {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Execute a command non-interactively
    Exec {
        /// Command key (e.g. giveGold)
        command: String,
        /// Parameters as key=value pairs
        params: Vec<String>,
    },
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let client = RemoteClient::new(RemoteConfig {
        base_url: cli.url.trim_end_matches('/').to_string(),
        token: cli.token,
        channel: cli.channel,
    })?;

    let Some(command) = cli.command else {
        return opcon::console::run(client);
    };

    match command {
        Commands::Status { json } => {
            let status = client.operator_status()?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&status).context("serialize status json")?
                );
            } else if status.has_access {
                let tier = status.level.map(|l| l.label()).unwrap_or("unknown");
                println!("{} has {} access on {}", status.username, tier, client.channel());
            } else {
                println!("no operator access on {}", client.channel());
            }
        }
        Commands::Commands { json } => {
            let catalog = load_catalog(&client)?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(catalog.commands())
                        .context("serialize commands json")?
                );
            } else {
                for cmd in catalog.commands() {
                    let danger = if cmd.dangerous { " !" } else { "" };
                    println!(
                        "{:<20} {:<10} {:<8} {}{}",
                        cmd.key,
                        cmd.level.label(),
                        classify(&cmd.key).label().to_lowercase(),
                        cmd.name,
                        danger
                    );
                }
            }
        }
        Commands::Players { json } => {
            let players = client.players()?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&players).context("serialize players json")?
                );
            } else {
                for p in players {
                    println!("{:<24} lv{:<4} {}", p.name, p.level, p.id);
                }
            }
        }
        Commands::Channels { json } => {
            let channels = client.channels()?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&channels).context("serialize channels json")?
                );
            } else {
                for c in channels {
                    println!("{:<24} {} characters", c.name, c.character_count);
                }
            }
        }
        Commands::Exec { command, params } => {
            let catalog = load_catalog(&client)?;
            let spec = catalog
                .get(&command)
                .with_context(|| format!("unknown command {command} (run `opcon commands`)"))?;

            let values = parse_param_pairs(spec, &params)?;

            let missing: Vec<&str> = spec
                .params
                .iter()
                .filter(|p| p.required && values.get(&p.name).is_none_or(|v| v.is_empty()))
                .map(|p| p.name.as_str())
                .collect();
            if !missing.is_empty() {
                anyhow::bail!("missing required parameters: {}", missing.join(", "));
            }

            let message = client.execute(&spec.key, typed_params(spec, &values))?;
            println!("{}", message);
        }
    }

    Ok(())
}

/// Command catalog gated by the operator's own tier; the server payload is
/// not trusted to be pre-filtered. Fails closed when access is denied.
fn load_catalog(client: &RemoteClient) -> Result<Catalog> {
    let status = client.operator_status()?;
    if !status.has_access {
        anyhow::bail!("no operator access on {}", client.channel());
    }
    let level = status.level.unwrap_or(AccessLevel::Moderator);
    Ok(Catalog::new(client.commands()?, level))
}
