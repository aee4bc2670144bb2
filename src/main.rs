//! VibeParse binary entry point. All logic lives in the library.

use clap::Parser;
use vibeparse::cli::Args;
use vibeparse_core::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    vibeparse::run(Args::parse()).await
}
