use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use solana_program::pubkey::Pubkey;
use std::str::FromStr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use passkey_dash::{
    config::AppConfig,
    models::QuoteResult,
    providers::mock::DEMO_WALLET,
    service::Dashboard,
    session::{MemorySessionStore, MockCredentialStore, SessionService, WalletSession},
    utils::{format, math},
};

#[derive(Parser)]
#[command(name = "passkey-dash")]
#[command(about = "Passkey-secured DeFi dashboard: portfolio valuation and swap quoting")]
#[command(version = "0.1.0")]
struct Cli {
    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Enable debug mode
    #[arg(short, long)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Connect the wallet and show its portfolio
    Portfolio {
        /// Wallet public key
        #[arg(short, long, default_value = DEMO_WALLET)]
        wallet: String,
    },
    /// Compute a swap quote
    Quote {
        /// Source token (symbol or mint)
        #[arg(long)]
        from: String,

        /// Destination token (symbol or mint)
        #[arg(long)]
        to: String,

        /// Amount of the source token to swap
        #[arg(long)]
        amount: String,

        /// Slippage tolerance in basis points
        #[arg(long)]
        slippage_bps: Option<u32>,
    },
    /// Compute a quote and prepare the unsigned swap transaction
    Swap {
        #[arg(long)]
        from: String,

        #[arg(long)]
        to: String,

        #[arg(long)]
        amount: String,

        #[arg(long)]
        slippage_bps: Option<u32>,

        /// Wallet public key
        #[arg(short, long, default_value = DEMO_WALLET)]
        wallet: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(&cli.log_level, cli.debug)?;

    info!("Starting passkey dashboard...");

    // Load configuration
    let config = AppConfig::load()?;
    config.validate()?;
    info!("Configuration loaded successfully");
    info!(
        "Live quote service enabled: {}",
        config.is_quote_service_enabled()
    );

    let dashboard = Dashboard::demo(&config)?;
    let sessions = SessionService::new(
        Arc::new(MemorySessionStore::new()),
        Arc::new(MockCredentialStore),
    );

    match cli.command {
        Command::Portfolio { wallet } => {
            let session = sessions.connect(parse_wallet(&wallet)?).await?;
            run_portfolio(&dashboard, &session).await?;
        }
        Command::Quote {
            from,
            to,
            amount,
            slippage_bps,
        } => {
            run_quote(&dashboard, &from, &to, &amount, slippage_bps).await?;
        }
        Command::Swap {
            from,
            to,
            amount,
            slippage_bps,
            wallet,
        } => {
            let session = sessions.connect(parse_wallet(&wallet)?).await?;
            let quote = run_quote(&dashboard, &from, &to, &amount, slippage_bps).await?;
            run_swap(&dashboard, &session, &quote).await?;
        }
    }

    Ok(())
}

/// Initialize logging system
fn init_logging(log_level: &str, debug: bool) -> anyhow::Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if debug {
            "passkey_dash=debug,reqwest=debug".into()
        } else {
            format!("passkey_dash={}", log_level.to_lowercase()).into()
        }
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    Ok(())
}

fn parse_wallet(wallet: &str) -> anyhow::Result<Pubkey> {
    Pubkey::from_str(wallet).map_err(|e| anyhow::anyhow!("Invalid wallet public key: {e}"))
}

async fn run_portfolio(dashboard: &Dashboard, session: &WalletSession) -> anyhow::Result<()> {
    let view = dashboard.portfolio(&session.wallet).await?;

    println!("Assets for {}", session.wallet);
    println!(
        "{:<6} {:>16} {:>12} {:>12} {:>9}",
        "Asset", "Balance", "Price", "Value", "24h"
    );
    for holding in &view.holdings {
        let balance = math::parse_decimal(&holding.balance)
            .ok_or_else(|| anyhow::anyhow!("Unparseable balance for {}", holding.symbol))?;
        println!(
            "{:<6} {:>16} {:>12} {:>12} {:>9}",
            holding.symbol,
            format::format_balance(balance, format::balance_display_places(&holding.symbol)),
            format::format_price(holding.price),
            format::format_usd(balance * holding.price),
            format::format_change(holding.change_24h),
        );
    }
    println!();
    println!(
        "Total Portfolio Value  {}",
        format::format_usd(view.summary.total_value)
    );
    println!(
        "24h Change             {} ({})",
        format::format_usd(view.summary.daily_change_abs),
        format::format_change(view.summary.daily_change_pct),
    );

    Ok(())
}

async fn run_quote(
    dashboard: &Dashboard,
    from: &str,
    to: &str,
    amount: &str,
    slippage_bps: Option<u32>,
) -> anyhow::Result<QuoteResult> {
    let amount = math::parse_decimal(amount)
        .ok_or_else(|| anyhow::anyhow!("Invalid trade amount: {amount}"))?;
    let request = dashboard
        .build_trade_request(from, to, amount, slippage_bps)
        .await?;
    let result = dashboard.swap_quote(&request).await?;

    match &result {
        QuoteResult::Local(quote) => {
            println!(
                "Rate                1 {} = {} {}",
                from,
                format::format_amount(quote.rate),
                to
            );
            println!(
                "Estimated output    {} {}",
                format::format_amount(quote.gross_output_amount),
                to
            );
            println!(
                "Fee ({:.2}%)         {} {}",
                quote.fee_rate * Decimal::ONE_HUNDRED,
                format::format_amount(quote.fee_amount),
                to
            );
            println!(
                "Net output          {} {}",
                format::format_amount(quote.net_output_amount),
                to
            );
            println!(
                "Slippage tolerance  {} bps ({:.2}%, display only, not applied)",
                quote.slippage_bps,
                math::bps_to_fraction(quote.slippage_bps) * Decimal::ONE_HUNDRED
            );
        }
        QuoteResult::Live(quote) => {
            println!("Live quote from the swap service");
            println!("In amount           {}", quote.in_amount);
            println!("Out amount          {}", quote.out_amount);
            if let Some(impact) = &quote.price_impact_pct {
                println!("Price impact        {}%", impact);
            }
        }
    }

    Ok(result)
}

async fn run_swap(
    dashboard: &Dashboard,
    session: &WalletSession,
    quote: &QuoteResult,
) -> anyhow::Result<()> {
    let transaction = dashboard.prepare_swap(quote, &session.wallet).await?;
    println!();
    println!("Unsigned swap transaction (sign with your passkey):");
    println!("{}", transaction.to_base64());
    Ok(())
}
