//! The six-option console menu.
//!
//! The loop is written against generic `BufRead`/`Write` so tests can
//! drive a full session with in-memory buffers. Reaching end of input
//! ends the session the same way as the Exit option.

use minibank_core::{Account, AccountId, Amount, CoreError, Registry};
use rust_decimal::Decimal;
use std::io::{self, BufRead, Write};
use tracing::debug;

const MENU: &str = "\n1. Open Account\n2. Deposit Funds\n3. Withdraw Funds\n4. Check Balance\n5. Show All Accounts\n6. Exit";

/// How the account listing is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFormat {
    Table,
    Json,
}

/// The interactive menu loop.
pub struct Menu {
    format: ListFormat,
}

impl Menu {
    pub fn new(format: ListFormat) -> Self {
        Self { format }
    }

    /// Run the menu until the user exits or input is exhausted.
    ///
    /// Invalid selections and malformed numbers are reported and the
    /// menu is shown again; domain errors are printed and the loop
    /// continues. Only I/O failures abort the session.
    pub fn run<R: BufRead, W: Write>(
        &self,
        registry: &mut Registry,
        input: &mut R,
        out: &mut W,
    ) -> io::Result<()> {
        loop {
            writeln!(out, "{MENU}")?;
            let Some(line) = prompt(input, out, "Select an option: ")? else {
                break;
            };

            let option: u32 = match line.parse() {
                Ok(option) => option,
                Err(_) => {
                    writeln!(out, "Invalid input. Please enter a valid number.")?;
                    continue;
                }
            };

            let more_input = match option {
                1 => self.open_account(registry, input, out)?,
                2 => self.deposit(registry, input, out)?,
                3 => self.withdraw(registry, input, out)?,
                4 => self.check_balance(registry, input, out)?,
                5 => {
                    self.list_accounts(registry, out)?;
                    true
                }
                6 => {
                    writeln!(out, "Exiting application...")?;
                    break;
                }
                _ => {
                    writeln!(out, "Invalid option. Please try again.")?;
                    true
                }
            };
            if !more_input {
                break;
            }
        }
        Ok(())
    }

    fn open_account<R: BufRead, W: Write>(
        &self,
        registry: &mut Registry,
        input: &mut R,
        out: &mut W,
    ) -> io::Result<bool> {
        let Some(name) = prompt(input, out, "Enter the account holder's name: ")? else {
            return Ok(false);
        };

        let id = registry.open_account(name.as_str());
        debug!(%id, holder = %name, "account opened");
        writeln!(out, "New account opened for {name} with Account ID: {id}")?;
        Ok(true)
    }

    fn deposit<R: BufRead, W: Write>(
        &self,
        registry: &mut Registry,
        input: &mut R,
        out: &mut W,
    ) -> io::Result<bool> {
        let Some(id) = read_account_id(input, out, "Enter Account ID for deposit: ")? else {
            return Ok(false);
        };
        let Some(amount) = read_amount(input, out, "Enter deposit amount: ")? else {
            return Ok(false);
        };
        let (Ok(id), Ok(amount)) = (id, amount) else {
            return Ok(true);
        };

        match registry.deposit(id, amount) {
            Ok(balance) => {
                debug!(%id, %amount, %balance, "deposit");
                writeln!(out, "Successfully deposited: {amount}, New Balance: {balance}")?;
            }
            Err(err) => report(out, &err)?,
        }
        Ok(true)
    }

    fn withdraw<R: BufRead, W: Write>(
        &self,
        registry: &mut Registry,
        input: &mut R,
        out: &mut W,
    ) -> io::Result<bool> {
        let Some(id) = read_account_id(input, out, "Enter Account ID for withdrawal: ")? else {
            return Ok(false);
        };
        let Some(amount) = read_amount(input, out, "Enter withdrawal amount: ")? else {
            return Ok(false);
        };
        let (Ok(id), Ok(amount)) = (id, amount) else {
            return Ok(true);
        };

        match registry.withdraw(id, amount) {
            Ok(balance) => {
                debug!(%id, %amount, %balance, "withdrawal");
                writeln!(out, "Successfully withdrew: {amount}, New Balance: {balance}")?;
            }
            Err(err) => report(out, &err)?,
        }
        Ok(true)
    }

    fn check_balance<R: BufRead, W: Write>(
        &self,
        registry: &Registry,
        input: &mut R,
        out: &mut W,
    ) -> io::Result<bool> {
        let Some(id) = read_account_id(input, out, "Enter Account ID to check balance: ")? else {
            return Ok(false);
        };
        let Ok(id) = id else {
            return Ok(true);
        };

        match registry.account(id) {
            Some(account) => writeln!(out, "Current Balance: {}", account.balance())?,
            None => report(out, &CoreError::AccountNotFound(id))?,
        }
        Ok(true)
    }

    fn list_accounts<W: Write>(&self, registry: &Registry, out: &mut W) -> io::Result<()> {
        if registry.is_empty() {
            writeln!(out, "No accounts open yet.")?;
            return Ok(());
        }

        match self.format {
            ListFormat::Table => {
                writeln!(out, "Listing all customer accounts:")?;
                for account in registry.iter() {
                    writeln!(
                        out,
                        "Account ID: {}, Holder: {}, Balance: {}",
                        account.id(),
                        account.holder_name(),
                        account.balance()
                    )?;
                }
            }
            ListFormat::Json => {
                let accounts: Vec<&Account> = registry.iter().collect();
                let json = serde_json::to_string_pretty(&accounts)
                    .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
                writeln!(out, "{json}")?;
            }
        }
        Ok(())
    }
}

/// Print a domain error and keep the session going.
fn report<W: Write>(out: &mut W, err: &CoreError) -> io::Result<()> {
    writeln!(out, "{err}")
}

/// Write a prompt and read one trimmed line; None on end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    text: &str,
) -> io::Result<Option<String>> {
    write!(out, "{text}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompt for an account id.
///
/// Outer None = end of input; inner Err = unparseable id, already
/// reported to the user.
fn read_account_id<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    text: &str,
) -> io::Result<Option<Result<AccountId, ()>>> {
    let Some(line) = prompt(input, out, text)? else {
        return Ok(None);
    };
    match line.parse::<AccountId>() {
        Ok(id) => Ok(Some(Ok(id))),
        Err(_) => {
            writeln!(out, "Invalid input. Please enter a valid number.")?;
            Ok(Some(Err(())))
        }
    }
}

/// Prompt for a monetary amount.
///
/// Unparseable and negative inputs are reported to the user and
/// surfaced as the inner Err.
fn read_amount<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    text: &str,
) -> io::Result<Option<Result<Amount, ()>>> {
    let Some(line) = prompt(input, out, text)? else {
        return Ok(None);
    };
    let value = match line.parse::<Decimal>() {
        Ok(value) => value,
        Err(_) => {
            writeln!(out, "Invalid input. Please enter a valid number.")?;
            return Ok(Some(Err(())));
        }
    };
    match Amount::new(value) {
        Ok(amount) => Ok(Some(Ok(amount))),
        Err(err) => {
            report(out, &err)?;
            Ok(Some(Err(())))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::io::Cursor;

    fn run_session(script: &str, format: ListFormat) -> (Registry, String) {
        let mut registry = Registry::new();
        let menu = Menu::new(format);
        let mut input = Cursor::new(script.to_string());
        let mut out = Vec::new();

        menu.run(&mut registry, &mut input, &mut out).unwrap();
        (registry, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_full_session() {
        let script = "1\nAlice\n2\n2000\n100\n3\n2000\n40\n4\n2000\n5\n6\n";
        let (registry, transcript) = run_session(script, ListFormat::Table);

        assert!(transcript.contains("New account opened for Alice with Account ID: 2000"));
        assert!(transcript.contains("Successfully deposited: 100, New Balance: 100"));
        assert!(transcript.contains("Successfully withdrew: 40, New Balance: 60"));
        assert!(transcript.contains("Current Balance: 60"));
        assert!(transcript.contains("Account ID: 2000, Holder: Alice, Balance: 60"));
        assert!(transcript.contains("Exiting application..."));

        let account = registry.account(AccountId::new(2000)).unwrap();
        assert_eq!(account.balance().value(), dec!(60));
    }

    #[test]
    fn test_overdraw_is_reported_and_session_continues() {
        let script = "1\nAlice\n2\n2000\n60\n3\n2000\n1000\n4\n2000\n6\n";
        let (registry, transcript) = run_session(script, ListFormat::Table);

        assert!(transcript.contains("Insufficient funds: requested 1000, available 60"));
        assert!(transcript.contains("Current Balance: 60"));
        assert_eq!(
            registry.account(AccountId::new(2000)).unwrap().balance().value(),
            dec!(60)
        );
    }

    #[test]
    fn test_unknown_account_lookup() {
        let script = "4\n9999\n6\n";
        let (_, transcript) = run_session(script, ListFormat::Table);

        assert!(transcript.contains("Account not found: 9999"));
    }

    #[test]
    fn test_deposit_to_unknown_account() {
        let script = "2\n9999\n10\n6\n";
        let (_, transcript) = run_session(script, ListFormat::Table);

        assert!(transcript.contains("Account not found: 9999"));
    }

    #[test]
    fn test_invalid_menu_selection_retries() {
        let script = "abc\n9\n6\n";
        let (_, transcript) = run_session(script, ListFormat::Table);

        assert!(transcript.contains("Invalid input. Please enter a valid number."));
        assert!(transcript.contains("Invalid option. Please try again."));
        assert!(transcript.contains("Exiting application..."));
    }

    #[test]
    fn test_negative_deposit_is_rejected_before_the_registry() {
        let script = "1\nAlice\n2\n2000\n-5\n4\n2000\n6\n";
        let (registry, transcript) = run_session(script, ListFormat::Table);

        assert!(transcript.contains("Invalid amount: -5"));
        assert!(transcript.contains("Current Balance: 0"));
        assert!(registry.account(AccountId::new(2000)).unwrap().balance().is_zero());
    }

    #[test]
    fn test_zero_deposit_is_rejected() {
        let script = "1\nAlice\n2\n2000\n0\n6\n";
        let (registry, transcript) = run_session(script, ListFormat::Table);

        assert!(transcript.contains("Invalid amount: 0"));
        assert!(registry.account(AccountId::new(2000)).unwrap().balance().is_zero());
    }

    #[test]
    fn test_unparseable_amount_reprompts_menu() {
        let script = "1\nAlice\n2\n2000\nten\n6\n";
        let (_, transcript) = run_session(script, ListFormat::Table);

        assert!(transcript.contains("Invalid input. Please enter a valid number."));
        assert!(transcript.contains("Exiting application..."));
    }

    #[test]
    fn test_sequential_ids_across_a_session() {
        let script = "1\nAlice\n1\nBob\n5\n6\n";
        let (registry, transcript) = run_session(script, ListFormat::Table);

        assert!(transcript.contains("Account ID: 2000"));
        assert!(transcript.contains("Account ID: 2001"));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_empty_listing() {
        let script = "5\n6\n";
        let (_, transcript) = run_session(script, ListFormat::Table);

        assert!(transcript.contains("No accounts open yet."));
    }

    #[test]
    fn test_json_listing() {
        let script = "1\nAlice\n2\n2000\n100.50\n5\n6\n";
        let (_, transcript) = run_session(script, ListFormat::Json);

        assert!(transcript.contains("\"id\": 2000"));
        assert!(transcript.contains("\"holder_name\": \"Alice\""));
        assert!(transcript.contains("\"balance\": \"100.50\""));
    }

    #[test]
    fn test_end_of_input_ends_session_cleanly() {
        // No Exit option; the script just runs out.
        let script = "1\nAlice\n";
        let (registry, _) = run_session(script, ListFormat::Table);

        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_end_of_input_mid_prompt() {
        // Input ends while the deposit handler is waiting for an amount.
        let script = "1\nAlice\n2\n2000\n";
        let (registry, _) = run_session(script, ListFormat::Table);

        assert!(registry.account(AccountId::new(2000)).unwrap().balance().is_zero());
    }
}
