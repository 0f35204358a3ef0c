use anyhow::Result;
use std::io;

use bank_management::Session;

fn main() -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();

    let mut session = Session::new(stdin.lock(), stdout.lock());
    session.run()
}
