use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::metadata::LevelFilter;
use tracing_subscriber::filter::Targets;
use tracing_subscriber::prelude::*;

use rsa_dh::dh::exchange;
use rsa_dh::rsa::bigint::{parse_integer, to_decimal, to_hex};
use rsa_dh::rsa::{sign_message, verify_signature};
use rsa_dh::util::{format_file_size, load_exchange_config, load_signing_key, read_file};

#[derive(Parser)]
#[clap(
    name = "rsa_dh",
    about = "RSA PKCS#1 v1.5 signing and Diffie-Hellman key exchange"
)]
struct Cli {
    /// Log pipeline stages to stderr
    #[clap(long, global = true)]
    verbose: bool,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign a file with the RSA key in a parameter file
    Sign(SignArgs),
    /// Compute the client public value and shared secret
    Exchange(ExchangeArgs),
}

#[derive(Args)]
struct SignArgs {
    /// File to sign
    #[clap(long, default_value = "message.txt")]
    file: PathBuf,

    /// JSON file with `n`, `e` and `d`
    #[clap(long, default_value = "params.json")]
    params_file: PathBuf,

    /// Also print the hashed and padded block
    #[clap(long)]
    show_msg: bool,

    /// Also print signature^e mod n and compare it with the padded block
    #[clap(long)]
    verify: bool,
}

#[derive(Args)]
struct ExchangeArgs {
    /// JSON file with `p`, `g`, `y_s` and optionally `x`
    #[clap(long, default_value = "params.json")]
    params_file: PathBuf,

    /// Client private scalar, decimal or 0x hex; overrides `x`
    #[clap(long)]
    private_key: Option<String>,
}

fn init_tracing(verbose: bool) {
    let targets = if verbose {
        Targets::new()
            .with_default(LevelFilter::WARN)
            .with_target("rsa_dh", LevelFilter::DEBUG)
    } else {
        std::env::var("RUST_LOG")
            .ok()
            .and_then(|var| var.parse::<Targets>().ok())
            .unwrap_or_else(|| Targets::new().with_default(LevelFilter::WARN))
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_max_level(LevelFilter::TRACE)
        .finish()
        .with(targets)
        .init();
}

fn run_sign(args: SignArgs) -> Result<()> {
    let key = load_signing_key(&args.params_file)
        .with_context(|| format!("error loading {}", args.params_file.display()))?;
    let message = read_file(&args.file)
        .with_context(|| format!("error reading {}", args.file.display()))?;
    tracing::info!(
        file = %args.file.display(),
        size = %format_file_size(message.len() as u64),
        "signing"
    );

    let signature = sign_message(&key, &message).context("signing failed")?;
    println!("{}", signature.to_hex());

    if args.show_msg {
        println!("\nhashed+padded msg:\n{}", to_hex(&signature.padded));
    }
    if args.verify {
        let verification =
            verify_signature(key.public_key(), &signature).context("verification failed")?;
        println!("\nverified msg:\n{}", to_hex(&verification.recovered));
        println!("\nmatches padded msg: {}", verification.matches);
        if let Some(digest) = verification.digest {
            println!("recovered digest: {}", digest);
        }
    }

    Ok(())
}

fn run_exchange(args: ExchangeArgs) -> Result<()> {
    let mut config = load_exchange_config(&args.params_file)
        .with_context(|| format!("error loading {}", args.params_file.display()))?;
    if let Some(private_key) = &args.private_key {
        config = config.with_client_private(parse_integer("private-key", private_key)?);
    }

    let outcome = exchange(&config.params, &config.client_private).context("key exchange failed")?;
    println!(
        "client public:\n{}\n\nshared secret:\n{}",
        to_decimal(&outcome.client_public),
        to_decimal(&outcome.shared_secret)
    );

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Sign(args) => run_sign(args),
        Commands::Exchange(args) => run_exchange(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
