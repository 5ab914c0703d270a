use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use kkt_client::receipt::{ClientInfo, Company, Item, Payment, Receipt, SellRequest, ServiceInfo, Vat};
use kkt_client::utils::logging::{init_logging, LogFormat, LogLevel};
use kkt_client::{KktClient, MemoryStore, Settings};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, env = "KKT_URL")]
    url: String,
    #[arg(long, env = "KKT_LOGIN")]
    login: String,
    #[arg(long, env = "KKT_PASS", hide_env_values = true)]
    password: String,
    #[arg(long, env = "KKT_GROUP_CODE")]
    group_code: String,
    #[arg(long, env = "KKT_INN", default_value = "")]
    inn: String,
    #[arg(long, env = "KKT_SHOP_ADDRESS", default_value = "")]
    shop_address: String,
    #[arg(long, env = "KKT_COMPANY_EMAIL", default_value = "")]
    company_email: String,
    #[arg(long, env = "KKT_CALLBACK_URL", default_value = "")]
    callback_url: String,
    #[arg(long, env = "LOG_LEVEL", value_enum)]
    log_level: Option<LogLevel>,
    #[arg(long, env = "LOG_FORMAT", value_enum)]
    log_format: Option<LogFormat>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Submit a receipt for fiscalization
    Sell {
        /// Receipt document (JSON); a demo receipt is built when omitted
        #[arg(long)]
        receipt: Option<PathBuf>,
    },
    /// Fetch the fiscalization report for a submitted receipt
    Report { uuid: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    // -------------------------------
    // 1. Read env / args, init logging
    // -------------------------------

    let args = Args::parse();
    init_logging(args.log_level, args.log_format.unwrap_or(LogFormat::Compact));

    // -------------------------------
    // 2. Build provider settings
    // -------------------------------

    let settings = Settings {
        base_url: args.url,
        login: args.login,
        password: args.password,
        group_code: args.group_code,
        inn: args.inn,
        payment_address: args.shop_address,
        company_email: args.company_email,
        callback_url: args.callback_url,
    };

    // -------------------------------
    // 3. Create client over a process-local store
    // -------------------------------

    let client = KktClient::new(settings.clone(), MemoryStore::new())?;

    // -------------------------------
    // 4. Run the requested operation
    // -------------------------------

    match args.command {
        Command::Sell { receipt } => {
            let request = match receipt {
                Some(path) => {
                    let raw = tokio::fs::read_to_string(&path)
                        .await
                        .with_context(|| format!("reading receipt file {}", path.display()))?;
                    serde_json::from_str(&raw).context("parsing receipt file")?
                }
                None => demo_sell_request(&settings),
            };
            let ack = client.sell(&request).await?;
            info!(external_id = %request.external_id, "receipt submitted");
            println!("{}", serde_json::to_string_pretty(&ack)?);
        }
        Command::Report { uuid } => {
            let status = client.report(&uuid).await?;
            println!("{}", serde_json::to_string_pretty(&status)?);
        }
    }

    Ok(())
}

/// One-item demo document, useful against the provider's test environment.
fn demo_sell_request(settings: &Settings) -> SellRequest {
    let item = Item::new(
        "Monitor Samsung C27F390FHI",
        16459.00,
        1.0,
        "pcs",
        "partial_payment",
        "service",
        Vat::none(),
    );
    let total = item.sum;
    SellRequest::new(
        Utc::now().timestamp_millis().to_string(),
        Receipt {
            client: ClientInfo { email: String::new() },
            company: Company {
                email: settings.company_email.clone(),
                inn: settings.inn.clone(),
                payment_address: settings.payment_address.clone(),
            },
            items: vec![item],
            payments: vec![Payment { kind: 1, sum: total }],
            total,
        },
        ServiceInfo { callback_url: settings.callback_url.clone() },
    )
}
