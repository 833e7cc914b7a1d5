use std::{env, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    dinero::DineroClient,
    error,
    error::Error,
    info, success,
    types::LedgerAccounts,
    warning,
    workflow::{Invocation, Workflow},
};

/// Verifies the organization, then creates and books one manual voucher.
///
/// All input and credentials are validated before the first request. Every
/// step runs once; the first failure is printed to standard error and the
/// process exits with status 1. If booking fails, the already created voucher
/// is reported so it can be booked or deleted by hand.
pub async fn voucher(
    voucher_date: String,
    description: String,
    amount: String,
    accounts: LedgerAccounts,
) {
    let invocation = match Invocation::prepare(
        |name| env::var(name).ok(),
        &voucher_date,
        &description,
        &amount,
        accounts,
    ) {
        Ok(invocation) => invocation,
        Err(e) => error!("{}", e),
    };

    let client = DineroClient::from_env();
    let credentials = &invocation.credentials;

    let pb = spinner("Requesting access token...");
    let authenticated = match Workflow::new(&client, credentials).authenticate().await {
        Ok(authenticated) => authenticated,
        Err(e) => fail(&pb, e),
    };

    pb.set_message(format!(
        "Verifying access to organization {}...",
        credentials.organization_id
    ));
    let verified = match authenticated.verify_organization().await {
        Ok(verified) => verified,
        Err(e) => fail(&pb, e),
    };

    pb.set_message(format!(
        "Creating manual voucher in {}...",
        verified.organization().name
    ));
    let created = match verified.create_voucher(&invocation.input).await {
        Ok(created) => created,
        Err(e) => fail(&pb, e),
    };

    pb.set_message(format!("Booking voucher {}...", created.voucher().guid));
    let booked = match created.book().await {
        Ok(booked) => booked,
        Err(e) => fail(&pb, e),
    };
    pb.finish_and_clear();

    let report = booked.into_report();
    success!(
        "Connected to Dinero organization '{}' and booked a manual voucher.",
        report.organization_name
    );
    for line in report.lines() {
        info!("{}", line);
    }
}

fn fail(pb: &ProgressBar, e: Error) -> ! {
    pb.finish_and_clear();
    if let Some(voucher) = e.orphaned_voucher() {
        warning!(
            "Manual {} was created but not booked. Book or delete it manually in Dinero.",
            voucher
        );
    }
    error!("{}", e)
}

fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}
