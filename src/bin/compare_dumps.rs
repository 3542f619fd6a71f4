//! Dump comparison utility
//! Decodes two data flash dumps against the same schema and prints every
//! field whose rendered value differs

use dfdump_rs::{diff, full_range, load_dump, load_schema, range_without_ra_table};
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
    let include_ra_table = args.iter().any(|a| a == "--full-range");
    let positional: Vec<&String> = args[1..].iter().filter(|a| !a.starts_with("--")).collect();

    if positional.len() != 3 {
        eprintln!(
            "Usage: {} <schema.csv> <dump1.txt> <dump2.txt> [--full-range]",
            args[0]
        );
        eprintln!("\nThe Ra table region (calibration data the gauge rewrites on its");
        eprintln!("own) is excluded from the comparison unless --full-range is given.");
        std::process::exit(1);
    }

    let schema_file = positional[0];

    let schema = load_schema(schema_file)?;
    tracing::info!("Loaded {} schema entries from {}", schema.len(), schema_file);

    let dataset_1 = load_dump(positional[1])?;
    tracing::info!("Loaded {} bytes from {}", dataset_1.len(), positional[1]);

    let dataset_2 = load_dump(positional[2])?;
    tracing::info!("Loaded {} bytes from {}", dataset_2.len(), positional[2]);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if include_ra_table {
        diff(&mut out, full_range(), &schema, &dataset_1, &dataset_2)?;
    } else {
        diff(
            &mut out,
            range_without_ra_table(),
            &schema,
            &dataset_1,
            &dataset_2,
        )?;
    }

    Ok(())
}
