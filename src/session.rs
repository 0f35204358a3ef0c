// 🖥️ Session Loop - interactive menu over the account registry
//
// Read-dispatch-repeat over six choices. The loop is generic over its
// input and output streams, so the binary drives it with stdin/stdout
// and tests drive it with in-memory buffers. All user-facing text lives
// here; the account and registry layers stay silent.
//
// Domain-level failures (unknown account, insufficient funds, invalid
// selections) print a diagnostic and keep the loop alive. Stream-level
// failures (end of input, malformed numbers) end the session with an
// error instead.

use crate::account::AccountKind;
use crate::registry::AccountRegistry;
use anyhow::{bail, Context, Result};
use std::io::{BufRead, Write};

// ============================================================================
// MONEY FORMATTING
// ============================================================================

/// Render an amount as a plain decimal. Integral values keep one decimal
/// place, so $150 renders as "150.0" and $37.25 as "37.25".
pub fn fmt_money(amount: f64) -> String {
    if amount.is_finite() && amount.fract() == 0.0 {
        format!("{:.1}", amount)
    } else {
        format!("{}", amount)
    }
}

// ============================================================================
// SESSION
// ============================================================================

pub struct Session<R: BufRead, W: Write> {
    registry: AccountRegistry,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session with an empty registry over the given streams.
    pub fn new(input: R, output: W) -> Self {
        Session {
            registry: AccountRegistry::new(),
            input,
            output,
        }
    }

    /// The registry behind this session.
    pub fn registry(&self) -> &AccountRegistry {
        &self.registry
    }

    /// Consume the session and keep the registry.
    pub fn into_registry(self) -> AccountRegistry {
        self.registry
    }

    /// Run the menu loop until the user selects Exit (choice 6).
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;
            let choice: i32 = self.read_number("menu choice")?;

            match choice {
                1 => self.create_account()?,
                2 => self.delete_account()?,
                3 => self.deposit()?,
                4 => self.withdraw()?,
                5 => self.view_account()?,
                6 => break,
                _ => writeln!(
                    self.output,
                    "Invalid choice. Please enter a number from 1 to 6."
                )?,
            }
        }
        Ok(())
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Welcome to the Bank Management System")?;
        writeln!(self.output, "1. Create Account")?;
        writeln!(self.output, "2. Delete Account")?;
        writeln!(self.output, "3. Deposit")?;
        writeln!(self.output, "4. Withdraw")?;
        writeln!(self.output, "5. View Account Details")?;
        writeln!(self.output, "6. Exit")?;
        write!(self.output, "Enter your choice: ")?;
        self.output.flush()?;
        Ok(())
    }

    // ========================================================================
    // MENU OPERATIONS
    // ========================================================================

    fn create_account(&mut self) -> Result<()> {
        let number = self.prompt("Enter account number: ")?;
        let initial_balance: f64 = self.prompt_number("Enter initial balance: ", "initial balance")?;
        let selector: i32 = self.prompt_number(
            "Enter account type (1 for Savings, 2 for Checking): ",
            "account type",
        )?;

        match AccountKind::from_selector(selector) {
            Some(kind) => {
                self.registry.create(number, initial_balance, kind);
                writeln!(self.output, "{} account created successfully.", kind.as_str())?;
            }
            None => writeln!(self.output, "Invalid account type.")?,
        }
        Ok(())
    }

    fn delete_account(&mut self) -> Result<()> {
        let number = self.prompt("Enter account number to delete: ")?;

        if self.registry.delete(&number) {
            writeln!(self.output, "Account deleted successfully.")?;
        } else {
            writeln!(self.output, "Account not found.")?;
        }
        Ok(())
    }

    fn deposit(&mut self) -> Result<()> {
        let number = self.prompt("Enter account number: ")?;
        if self.registry.find(&number).is_none() {
            writeln!(self.output, "Account not found.")?;
            return Ok(());
        }

        // The amount is only asked for once the account is known to exist
        let amount: f64 = self.prompt_number("Enter deposit amount: ", "deposit amount")?;

        if let Some(account) = self.registry.find_mut(&number) {
            writeln!(
                self.output,
                "Depositing ${} into {} account",
                fmt_money(amount),
                account.kind.label()
            )?;
            match account.deposit(amount) {
                Ok(new_balance) => writeln!(
                    self.output,
                    "Transaction successful. New balance: ${}",
                    fmt_money(new_balance)
                )?,
                Err(err) => writeln!(self.output, "{}", err)?,
            }
        }
        Ok(())
    }

    fn withdraw(&mut self) -> Result<()> {
        let number = self.prompt("Enter account number: ")?;
        if self.registry.find(&number).is_none() {
            writeln!(self.output, "Account not found.")?;
            return Ok(());
        }

        let amount: f64 = self.prompt_number("Enter withdrawal amount: ", "withdrawal amount")?;

        if let Some(account) = self.registry.find_mut(&number) {
            writeln!(
                self.output,
                "Withdrawing ${} from {} account",
                fmt_money(amount),
                account.kind.label()
            )?;
            match account.withdraw(amount) {
                Ok(new_balance) => writeln!(
                    self.output,
                    "Transaction successful. New balance: ${}",
                    fmt_money(new_balance)
                )?,
                Err(err) => writeln!(self.output, "{}", err)?,
            }
        }
        Ok(())
    }

    fn view_account(&mut self) -> Result<()> {
        let number = self.prompt("Enter account number: ")?;

        match self.registry.find(&number) {
            Some(account) => {
                writeln!(self.output, "Account Number: {}", account.number)?;
                writeln!(self.output, "Balance: ${}", fmt_money(account.balance))?;
            }
            None => writeln!(self.output, "Account not found.")?,
        }
        Ok(())
    }

    // ========================================================================
    // INPUT HELPERS
    // ========================================================================

    /// Print a prompt (no trailing newline) and read the answer line.
    fn prompt(&mut self, text: &str) -> Result<String> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Print a prompt and parse the answer as a number.
    fn prompt_number<T>(&mut self, text: &str, what: &str) -> Result<T>
    where
        T: std::str::FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.read_number(what)
    }

    /// Parse the next input line as a number. A malformed value ends
    /// the session rather than looping.
    fn read_number<T>(&mut self, what: &str) -> Result<T>
    where
        T: std::str::FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        let line = self.read_line()?;
        line.trim()
            .parse()
            .with_context(|| format!("invalid {}: {:?}", what, line.trim()))
    }

    /// Read one line, without its trailing newline.
    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read input")?;
        if read == 0 {
            bail!("unexpected end of input");
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }
}

// ============================================================================
// TESTS
// ============================================================================
