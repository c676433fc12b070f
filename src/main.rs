use clap::Parser;
use rasterer::{MapConfig, RasterCache, RasterQuery, Rasterer, DEFAULT_RASTER_CACHE_SIZE};
use std::collections::HashMap;
use std::io::{self, BufRead};
use std::process::ExitCode;
use tracing::{warn, Level};

const PARAM_ORDER: [&str; 6] = [
    RasterQuery::ULLON,
    RasterQuery::ULLAT,
    RasterQuery::LRLON,
    RasterQuery::LRLAT,
    RasterQuery::WIDTH,
    RasterQuery::HEIGHT,
];

#[derive(Parser)]
#[command(name = "rasterer")]
#[command(
    about = "Select the map tiles covering a query box",
    long_about = "Select the map tiles covering a query box. Without a query on the \
                  command line, reads one query per line from stdin."
)]
struct Args {
    /// Log tile selection details
    #[arg(short, long)]
    verbose: bool,

    /// Query box and viewport size
    #[arg(
        num_args = 6,
        value_names = ["ULLON", "ULLAT", "LRLON", "LRLAT", "W", "H"],
        allow_negative_numbers = true
    )]
    query: Option<Vec<f64>>,
}

// Fields that are not numbers are left out, so the request reports failure
// the same way a request with missing fields does.
fn parse_params(fields: &[&str]) -> HashMap<String, f64> {
    let mut params = HashMap::new();
    for (name, value) in PARAM_ORDER.iter().zip(fields) {
        match value.parse::<f64>() {
            Ok(v) => {
                params.insert(name.to_string(), v);
            }
            Err(_) => warn!("Parameter {} is not a number: {:?}", name, value),
        }
    }
    params
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(io::stderr)
        .init();

    let rasterer = Rasterer::new(MapConfig::default());

    if let Some(values) = args.query {
        let params: HashMap<String, f64> = PARAM_ORDER
            .iter()
            .zip(values)
            .map(|(name, v)| (name.to_string(), v))
            .collect();
        let result = rasterer.get_map_raster(&params);
        println!("{}", result);
        return if result.query_success {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        };
    }

    let mut cache = RasterCache::new(rasterer, DEFAULT_RASTER_CACHE_SIZE);
    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("Failed to read query: {}", e);
                return ExitCode::FAILURE;
            }
        };
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }
        let result = cache.get_map_raster(&parse_params(&fields));
        println!("{}\n", result);
    }

    ExitCode::SUCCESS
}
