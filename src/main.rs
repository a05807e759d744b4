use clap::Parser;
use contentcraft_client::config::cli::Command;
use contentcraft_client::config::toml_config::LogFormat;
use contentcraft_client::utils::{logger, validation::Validate};
use contentcraft_client::{
    load_stats, ApiClient, ApiError, CliConfig, ClientConfig, ContactSubmission,
    ContentApi, ErrorClass, InquiryAdmin, InquiryStatus, TomlConfig,
};
use serde::Serialize;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let file_config = match &cli.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(config) => Some(config),
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                std::process::exit(1);
            }
        },
        None => None,
    };

    let verbose = cli.verbose || file_config.as_ref().is_some_and(|c| c.verbose());
    let json_logs = cli.json_logs
        || file_config
            .as_ref()
            .is_some_and(|c| c.log_format() == LogFormat::Json);
    if json_logs {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }

    let client_config = match resolve_config(&cli, file_config.as_ref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            eprintln!("💡 Pass --backend-url, set BACKEND_URL, or use --config <file>");
            std::process::exit(1);
        }
    };

    tracing::debug!("Using backend {}", client_config.api_base());
    let client = ApiClient::new(client_config)?;

    match run(&client, cli.command).await {
        Ok(()) => Ok(()),
        Err(e) => {
            tracing::error!("❌ Command failed: {} (class: {:?})", e, e.class());
            eprintln!("❌ {}", e.user_friendly_message());
            if e.class() == ErrorClass::Unexpected {
                eprintln!("   {}", e);
            }
            let exit_code = if e.is_connectivity() { 2 } else { 1 };
            std::process::exit(exit_code);
        }
    }
}

fn resolve_config(
    cli: &CliConfig,
    file_config: Option<&TomlConfig>,
) -> contentcraft_client::Result<ClientConfig> {
    if let Some(url) = &cli.backend_url {
        return ClientConfig::new(url.clone());
    }
    match file_config {
        Some(config) => {
            config.validate()?;
            ClientConfig::from_provider(config)
        }
        None => ClientConfig::from_env(),
    }
}

async fn run(client: &ApiClient, command: Command) -> contentcraft_client::Result<()> {
    match command {
        Command::Portfolio {
            kind,
            include_inactive,
        } => {
            let active = Some(!include_inactive);
            let items = client.get_portfolio_items(kind.as_deref(), active).await?;
            tracing::info!("📁 {} portfolio items", items.len());
            print_json(&items)
        }
        Command::Testimonials { include_inactive } => {
            let testimonials = client.get_testimonials(!include_inactive).await?;
            tracing::info!("💬 {} testimonials", testimonials.len());
            print_json(&testimonials)
        }
        Command::Stats => print_json(&load_stats(client).await),
        Command::Health => print_json(&client.check_health().await?),
        Command::Contact {
            name,
            email,
            channel,
            subscribers,
            service,
            project,
            budget,
            message,
        } => {
            let submission = ContactSubmission {
                name,
                email,
                channel,
                subscribers,
                service,
                project,
                budget,
                message,
            };
            submission.validate()?;
            let inquiry = client.submit_contact_form(&submission).await?;
            println!("✅ Message sent! Inquiry id: {}", inquiry.id);
            Ok(())
        }
        Command::Inquiries { status, limit } => {
            let status = status.as_deref().map(parse_status).transpose()?;
            print_json(&client.list_contact_inquiries(status, limit).await?)
        }
        Command::SetStatus { id, status } => {
            let status = parse_status(&status)?;
            print_json(&client.update_inquiry_status(&id, status).await?)
        }
    }
}

fn parse_status(value: &str) -> contentcraft_client::Result<InquiryStatus> {
    value.parse().map_err(|message| ApiError::Validation {
        field: "status".to_string(),
        message,
    })
}

fn print_json<T: Serialize>(value: &T) -> contentcraft_client::Result<()> {
    let rendered = serde_json::to_string_pretty(value).map_err(|e| ApiError::InvalidResponse {
        reason: e.to_string(),
    })?;
    println!("{}", rendered);
    Ok(())
}
