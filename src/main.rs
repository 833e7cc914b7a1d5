use clap::{
    Parser,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};

use dinerocli::{cli, config, error, types::LedgerAccounts};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// ISO formatted date (YYYY-MM-DD) of the manual voucher
    #[clap(long)]
    voucher_date: String,

    /// Description of the manual voucher line
    #[clap(long)]
    description: String,

    /// Amount to post; positive amounts are posted as negative
    #[clap(long, allow_hyphen_values = true)]
    amount: String,

    /// Ledger account the line is posted to
    #[clap(long, default_value_t = LedgerAccounts::default().account)]
    account_number: u32,

    /// Ledger account that balances the line
    #[clap(long, default_value_t = LedgerAccounts::default().balancing_account)]
    balancing_account_number: u32,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    cli::voucher(
        cli.voucher_date,
        cli.description,
        cli.amount,
        LedgerAccounts {
            account: cli.account_number,
            balancing_account: cli.balancing_account_number,
        },
    )
    .await
}
