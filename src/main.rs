use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Context, eyre};
use crlset_engine::{
    config::Config,
    crlset::{IssuerKeyHash, SnapshotStore},
    telemetry,
};

/// Inspect and update the local CRL set
#[derive(Debug, Parser)]
#[command(name = "crlset")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print a summary of the stored set
    Show,
    /// Install full snapshots or deltas, in order
    Update {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Check a certificate serial under an issuer key hash
    Check {
        /// SHA-256 of the issuer SubjectPublicKeyInfo, hex
        #[arg(long)]
        issuer: String,
        /// Certificate serial number, hex
        #[arg(long)]
        serial: String,
    },
    /// Check an SPKI hash against the blocked keys
    CheckSpki {
        /// SHA-256 of the SubjectPublicKeyInfo, hex
        spki: String,
    },
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let config = Config::load()?;
    telemetry::init_tracing(&config.log.filter);
    tracing::debug!("Loaded configuration: {:?}", config);

    let cli = Cli::parse();
    let store = SnapshotStore::open(&config.store.path)
        .await
        .wrap_err_with(|| format!("Failed to load {}", config.store.path.display()))?;

    match cli.command {
        Command::Show => {
            let set = store.snapshot();
            println!("sequence:  {}", set.sequence());
            println!("version:   {}", set.format_version());
            println!("issuers:   {}", set.entries().len());
            println!("serials:   {}", set.serial_count());
            if let Some(not_after) = set.not_after() {
                println!("not after: {not_after}");
            }
            for entry in set.entries() {
                println!("  {} {}", entry.issuer_key_hash, entry.serials.len());
            }
            for spki in set.blocked_spkis() {
                println!("  blocked {spki}");
            }
        }
        Command::Update { files } => {
            let persist_to = config
                .store
                .persist_updates
                .then_some(config.store.path.as_path());
            // Each installed update is persisted before the next file is read
            for file in &files {
                let set = store
                    .install_file(file, persist_to)
                    .await
                    .wrap_err_with(|| format!("Failed to install {}", file.display()))?;
                println!("{}: sequence {}", file.display(), set.sequence());
            }
        }
        Command::Check { issuer, serial } => {
            let issuer = parse_hash(&issuer)?;
            let serial = hex::decode(&serial).wrap_err("Serial must be hex")?;
            println!("{}", store.check_certificate(&serial, &issuer));
        }
        Command::CheckSpki { spki } => {
            println!("{}", store.check_spki(&parse_hash(&spki)?));
        }
    }

    Ok(())
}

fn parse_hash(input: &str) -> color_eyre::Result<IssuerKeyHash> {
    let bytes = hex::decode(input).wrap_err("Hash must be hex")?;
    IssuerKeyHash::try_from(bytes.as_slice())
        .map_err(|_| eyre!("Hash must be 32 bytes, got {}", bytes.len()))
}
