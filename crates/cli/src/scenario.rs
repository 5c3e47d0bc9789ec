//! The fixed demonstration: open one savings and one current account, move
//! money around, and print the reports after each stage.

use anyhow::Result;
use rust_decimal_macros::dec;
use std::io::Write;
use twinbank_core::{transfer, Account, AccountResult, BankPolicy, CurrentAccount, SavingsAccount};

/// Final state of the two accounts.
pub struct ScenarioOutcome {
    pub savings: SavingsAccount,
    pub current: CurrentAccount,
}

/// Run the demonstration, writing reports and failure messages to `out`.
///
/// A refused operation prints its message and the run continues.
pub fn run<W: Write>(out: &mut W) -> Result<ScenarioOutcome> {
    let policy = BankPolicy::default();
    let mut savings = SavingsAccount::with_minimum_balance(
        "S123",
        "John Doe",
        dec!(1000),
        dec!(0.02),
        policy.minimum_balance,
    );
    let mut current = CurrentAccount::new("C456", "Jane Doe", dec!(2000), dec!(500));

    write_reports(out, &savings, &current)?;

    savings.deposit(dec!(500));
    report_failure(out, current.withdraw(dec!(1000)))?;

    writeln!(out, "Account Details after deposit and withdrawal:")?;
    write_reports(out, &savings, &current)?;

    let transferred = transfer(&mut savings, &mut current, policy.transfer_amount);
    if let Some(receipt) = report_failure(out, transferred)? {
        tracing::info!(%receipt, "Transfer applied");
    }

    writeln!(out, "Account Details after transfer:")?;
    write_reports(out, &savings, &current)?;

    Ok(ScenarioOutcome { savings, current })
}

fn write_reports<W: Write>(
    out: &mut W,
    savings: &SavingsAccount,
    current: &CurrentAccount,
) -> Result<()> {
    let accounts: [&dyn Account; 2] = [savings, current];
    for account in accounts {
        account.write_details(&mut *out)?;
        writeln!(out)?;
    }
    Ok(())
}

/// Print the user-facing message of a refused operation.
fn report_failure<W: Write, T>(out: &mut W, result: AccountResult<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(err) => {
            writeln!(out, "{}", err)?;
            Ok(None)
        }
    }
}
