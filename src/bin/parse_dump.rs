//! Dump listing utility
//! Decodes every schema-described field of a data flash dump and prints it

use dfdump_rs::{full_range, load_dump, load_schema, print_listing};
use std::env;
use std::io;
use tracing_subscriber::{fmt::format::FmtSpan, prelude::*, EnvFilter};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap();

    let format_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_writer(io::stderr)
        .with_span_events(FmtSpan::NONE);

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(format_layer)
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <schema.csv> <dump.txt>", args[0]);
        eprintln!("\nExample:");
        eprintln!("  {} data_descriptions.csv dump-original.txt", args[0]);
        std::process::exit(1);
    }

    let schema_file = &args[1];
    let dump_file = &args[2];

    let schema = load_schema(schema_file)?;
    tracing::info!("Loaded {} schema entries from {}", schema.len(), schema_file);

    let dataset = load_dump(dump_file)?;
    tracing::info!("Loaded {} bytes from {}", dataset.len(), dump_file);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    print_listing(&mut out, full_range(), &schema, &dataset)?;

    Ok(())
}
