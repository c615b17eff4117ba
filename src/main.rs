use clap::{Parser, ValueEnum};
use socialconnect::utils::{logger, validation::Validate};
use socialconnect::{
    ClientInquiry, CustomerInterest, DispatchReport, EmailMessenger, RecipientKind, Settings,
    WhatsAppMessenger,
};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Channel {
    Email,
    Whatsapp,
}

#[derive(Debug, Parser)]
#[command(name = "socialconnect")]
#[command(about = "Send client inquiry notifications over email or WhatsApp")]
struct Cli {
    /// Delivery channel
    #[arg(long, value_enum)]
    channel: Channel,

    /// "individual" or "group" (case-insensitive)
    #[arg(long, default_value = "individual")]
    mode: String,

    /// Comma-separated recipient list (addresses, phone numbers or group ids)
    #[arg(long, value_delimiter = ',')]
    recipients: Vec<String>,

    /// Path to the payload JSON file
    #[arg(long)]
    payload: PathBuf,

    /// Optional TOML settings file; environment variables are used otherwise
    #[arg(long)]
    settings: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::info!("Starting socialconnect CLI");
    if cli.verbose {
        tracing::debug!("CLI args: {:?}", cli);
    }

    let mode: RecipientKind = match cli.mode.parse() {
        Ok(mode) => mode,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let settings = match &cli.settings {
        Some(path) => Settings::from_file(path)?,
        None => Settings::from_env(),
    };
    if let Err(e) = settings.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let payload = tokio::fs::read_to_string(&cli.payload).await?;

    let report = match cli.channel {
        Channel::Email => {
            let inquiry: ClientInquiry = serde_json::from_str(&payload)?;
            let messenger = EmailMessenger::new(&settings.email)?;
            messenger
                .send_message(&inquiry, &cli.recipients, mode)
                .await?
        }
        Channel::Whatsapp => {
            let interest: CustomerInterest = serde_json::from_str(&payload)?;
            let messenger = WhatsAppMessenger::new(&settings.whatsapp)?;
            messenger
                .send_message(&interest, &cli.recipients, mode)
                .await?
        }
    };

    print_summary(&report);
    println!("{}", serde_json::to_string_pretty(&report)?);

    if report.statistics.failed > 0 {
        std::process::exit(1);
    }
    Ok(())
}

fn print_summary(report: &DispatchReport) {
    let stats = &report.statistics;
    if stats.failed == 0 {
        println!(
            "✅ All messages sent: {}/{} ({}%)",
            stats.successful, stats.total, stats.success_rate
        );
    } else {
        eprintln!(
            "⚠️  Sent {}/{} messages ({}%), {} failed",
            stats.successful, stats.total, stats.success_rate, stats.failed
        );
        for entry in &report.results {
            if let Some(error) = &entry.outcome.error {
                eprintln!("   {} -> {}", entry.recipient, error);
            }
        }
    }
}
