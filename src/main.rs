use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use env_logger::Env;
use log::info;

use banksub::filter::FilterCriteria;
use banksub::generator::SubscriptionTarget;
use banksub::interfaces::{transcode, SubscriptionError};
use banksub::models::{ProxyType, SubscriptionOptions};
use banksub::sources::{HttpFetcher, SourceFetcher};

/// Convert proxy bank lists into client subscription formats
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Bank URL to fetch
    #[arg(long, value_name = "URL", conflicts_with = "input")]
    url: Option<String>,

    /// Bank file to read ("-" for stdin)
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output format: raw, clash, vless, trojan, ss
    #[arg(short, long, value_name = "FORMAT", default_value = "raw")]
    target: String,

    /// Keep only these country codes
    #[arg(long = "cc", value_name = "CC", value_delimiter = ',')]
    countries: Vec<String>,

    /// Keep only these protocols (vless, trojan, ss)
    #[arg(long = "vpn", value_name = "PROTO", value_delimiter = ',')]
    protocols: Vec<String>,

    /// Keep only these ports
    #[arg(long = "port", value_name = "PORT", value_delimiter = ',')]
    ports: Vec<u16>,

    /// Keep only hosts containing this substring
    #[arg(long, value_name = "TEXT")]
    search: Option<String>,

    /// Cap the number of records
    #[arg(short, long, value_name = "N")]
    limit: Option<usize>,

    /// TOML file with default country, limit and credentials
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output file (stdout when omitted)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let args = Args::parse();

    let target = SubscriptionTarget::from_str(&args.target)
        .ok_or_else(|| SubscriptionError::UnknownTarget(args.target.clone()))?;

    let options = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            toml::from_str::<SubscriptionOptions>(&raw)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => SubscriptionOptions::default(),
    };

    let document = if let Some(url) = &args.url {
        info!("fetching bank from {}", url);
        HttpFetcher::new()?.fetch(url)?
    } else if let Some(path) = &args.input {
        if path.as_os_str() == "-" {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("reading bank from stdin")?;
            buffer
        } else {
            fs::read_to_string(path).with_context(|| format!("reading bank {}", path.display()))?
        }
    } else {
        bail!("either --url or --input is required");
    };

    let mut criteria = FilterCriteria {
        countries: args.countries,
        ports: args.ports,
        host_contains: args.search,
        limit: args.limit,
        ..Default::default()
    };
    for name in &args.protocols {
        match ProxyType::from_str(name) {
            Some(protocol) => criteria.protocols.push(protocol),
            None => bail!("unknown protocol '{}'", name),
        }
    }

    let rendered = transcode(&document, &criteria, target, &options);
    match &args.output {
        Some(path) => fs::write(path, rendered.as_bytes())
            .with_context(|| format!("writing {}", path.display()))?,
        None => println!("{}", rendered),
    }
    Ok(())
}
