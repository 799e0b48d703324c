use anyhow::Result;
use clap::Parser;
use pwa_icon_gen::icon_gen::{self, Args};

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .with_writer(std::io::stderr)
        .init();

    icon_gen::generate_icons(&args)?;
    Ok(())
}
