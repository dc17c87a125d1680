// src/main.rs
use anyhow::Result;
use clap::Parser as _;

use wfw::utils::init_logging;
use wfw::{Args, run};

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    run(args)
}
