//! Bank Ledger CLI
//!
//! Loads the three bootstrap CSVs (accounts, owners, associations) and
//! writes final account states to stdout.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- accounts.csv owners.csv links.csv > final_accounts.csv
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use bank_ledger::{Ledger, LedgerError, Result};
use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 4 {
        return Err(LedgerError::MissingArgument);
    }

    let mut ledger = Ledger::new();
    ledger.load_accounts(open(&args[1])?)?;
    ledger.load_owners(open(&args[2])?)?;
    ledger.load_links(open(&args[3])?)?;

    let stdout = io::stdout();
    let handle = stdout.lock();
    ledger.write_accounts(handle)?;

    Ok(())
}

fn open(path: &str) -> Result<BufReader<File>> {
    Ok(BufReader::new(File::open(path)?))
}
