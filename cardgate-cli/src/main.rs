//! cardgate CLI - smoke-test harness for a card payment gateway.
//!
//! # Commands
//!
//! - `cardgate echo` - Liveness check with a signed echo
//! - `cardgate init` - Create a payment and print its redirect URL
//! - `cardgate status <payId>` - Query payment state
//! - `cardgate redirect-url <payId>` - Build the signed payment page URL
//! - `cardgate reverse <payId>` - Reverse an authorized payment
//! - `cardgate close <payId>` - Close a payment for settlement
//! - `cardgate refund <payId>` - Refund a settled payment
//! - `cardgate one-click` - Pay with a stored card template
//! - `cardgate verify-callback <query>` - Verify a return-URL result
//!
//! Settings come from `--config`, a dotenv file and `CARDGATE_*` variables.

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod error;
mod output;

use commands::{callback, echo, one_click, payment};
use error::{CliError, CliResult};

/// cardgate - signed-request client for card payment gateways
#[derive(Parser)]
#[command(name = "cardgate")]
#[command(author = "Pegasus Heavy Industries LLC")]
#[command(version)]
#[command(about = "Drive card payment gateway operations from the command line")]
#[command(long_about = None)]
#[command(propagate_version = true)]
#[command(after_help = format!(
    "{}\n  {} cardgate --config cardgate.toml echo\n  {} cardgate init --order-no 5547 --amount 1600 --currency CZK --item Shoes:1:1500 --item Shipping:1:100\n  {} cardgate status a1b2c3d4e5f6g7h --json\n\n{}\n  CARDGATE_GATE_URL, CARDGATE_MERCHANT_ID, CARDGATE_CALLBACK_URL,\n  CARDGATE_PRIVATE_KEY_PATH, CARDGATE_GATEWAY_PUBLIC_KEY_PATH, CARDGATE_PROTOCOL_VERSION",
    "Examples:".bright_cyan().bold(),
    "$".dimmed(),
    "$".dimmed(),
    "$".dimmed(),
    "Settings:".bright_cyan().bold(),
))]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Settings file (.toml, .json or .env)
    #[arg(short, long, global = true, env = "CARDGATE_CONFIG")]
    config: Option<PathBuf>,

    /// Dotenv file to read instead of ./.env
    #[arg(long, global = true)]
    env_file: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that the gateway is reachable and its signatures verify
    Echo {
        /// Send the echo as a path-embedded GET
        #[arg(long)]
        get: bool,
    },

    /// Create a payment
    Init(InitArgs),

    /// Query the state of a payment
    Status {
        /// Payment id returned by init
        pay_id: String,
    },

    /// Print the signed URL of the payment page
    #[command(alias = "url")]
    RedirectUrl {
        /// Payment id returned by init
        pay_id: String,
    },

    /// Reverse an authorized payment
    Reverse {
        /// Payment id
        pay_id: String,
    },

    /// Close a payment for settlement
    Close {
        /// Payment id
        pay_id: String,

        /// Settle a lower amount, in minor units
        #[arg(long)]
        amount: Option<i64>,
    },

    /// Refund a settled payment
    Refund {
        /// Payment id
        pay_id: String,

        /// Partial refund amount, in minor units
        #[arg(long)]
        amount: Option<i64>,
    },

    /// Pay with a stored card template
    OneClick(OneClickArgs),

    /// Verify the result a customer was returned with
    VerifyCallback {
        /// Query string or full return URL
        query: String,
    },
}

#[derive(Args)]
struct InitArgs {
    /// Merchant order number
    #[arg(long)]
    order_no: String,

    /// Total amount in minor units
    #[arg(long)]
    amount: i64,

    /// Currency code
    #[arg(long, default_value = "CZK")]
    currency: String,

    /// Cart item as name:quantity:amount (repeatable)
    #[arg(long = "item", value_name = "NAME:QTY:AMOUNT")]
    items: Vec<String>,

    /// Payment description
    #[arg(long)]
    description: Option<String>,

    /// Payment page language
    #[arg(long)]
    language: Option<String>,

    /// Authorize only; close the payment later
    #[arg(long)]
    no_close: bool,
}

#[derive(Args)]
struct OneClickArgs {
    /// Pay id of the template payment
    #[arg(long)]
    template: String,

    /// Merchant order number
    #[arg(long)]
    order_no: String,

    /// Total amount in minor units
    #[arg(long)]
    amount: i64,

    /// Currency code
    #[arg(long, default_value = "CZK")]
    currency: String,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "cardgate=debug,cardgate_payments=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .init();
}

fn init_args(args: InitArgs) -> CliResult<payment::InitArgs> {
    let language = match args.language {
        Some(code) => Some(
            cardgate_payments::Language::from_code(&code)
                .ok_or_else(|| CliError::InvalidArgument(format!("unknown language: {}", code)))?,
        ),
        None => None,
    };

    Ok(payment::InitArgs {
        order_no: args.order_no,
        amount: args.amount,
        currency: commands::parse_currency(&args.currency)?,
        items: args
            .items
            .iter()
            .map(String::as_str)
            .map(payment::parse_item)
            .collect::<CliResult<_>>()?,
        description: args.description,
        language,
        close_payment: !args.no_close,
    })
}

async fn run(cli: Cli) -> CliResult<()> {
    let gateway = commands::connect(cli.config.as_deref(), cli.env_file.as_deref())?;
    let json = cli.json;

    match cli.command {
        Commands::Echo { get } => echo::run(&gateway, get, json).await,
        Commands::Init(args) => payment::init(&gateway, init_args(args)?, json).await,
        Commands::Status { pay_id } => payment::status(&gateway, &pay_id, json).await,
        Commands::RedirectUrl { pay_id } => payment::redirect_url(&gateway, &pay_id, json),
        Commands::Reverse { pay_id } => payment::reverse(&gateway, &pay_id, json).await,
        Commands::Close { pay_id, amount } => payment::close(&gateway, &pay_id, amount, json).await,
        Commands::Refund { pay_id, amount } => {
            payment::refund(&gateway, &pay_id, amount, json).await
        }
        Commands::OneClick(args) => {
            let currency = commands::parse_currency(&args.currency)?;
            one_click::run(&gateway, &args.template, &args.order_no, args.amount, currency, json)
                .await
        }
        Commands::VerifyCallback { query } => callback::run(&gateway, &query, json),
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("\n  {} {}\n", "Error:".red().bold(), e);
        std::process::exit(e.exit_code());
    }
}
