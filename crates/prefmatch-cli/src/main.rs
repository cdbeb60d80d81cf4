mod config;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use prefmatch_core::{
    Attr, ProfileEncoding, Rejection, check_compatibility, encode_profile, export_json,
    import_json,
};

use crate::config::load_profile;

#[derive(Parser)]
#[command(
    name = "prefmatch",
    about = "Encode dating profiles into contract arrays and check matches offline"
)]
struct Cli {
    /// Enable verbose debug output
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a profile config (.toml or .json) into ABI arrays
    Encode {
        /// Profile config file
        profile: PathBuf,

        /// Write the ABI JSON here instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Check whether two profiles match each other
    Check {
        /// First profile config
        a: PathBuf,
        /// Second profile config
        b: PathBuf,
    },

    /// Validate ABI JSON and print it slot by slot
    Decode {
        /// ABI JSON file
        path: PathBuf,
    },

    /// List attribute slots
    Slots,
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Encode { profile, output } => cmd_encode(profile, output.as_deref()),
        Commands::Check { a, b } => cmd_check(a, b),
        Commands::Decode { path } => cmd_decode(path),
        Commands::Slots => cmd_slots(),
    }
}

fn encode_file(path: &Path) -> Result<ProfileEncoding> {
    let config = load_profile(path)?;
    encode_profile(&config).with_context(|| format!("failed to encode {}", path.display()))
}

fn cmd_encode(profile: &Path, output: Option<&Path>) -> Result<()> {
    let encoding = encode_file(profile)?;
    let json = export_json(&encoding).context("failed to serialize ABI arrays")?;

    match output {
        Some(path) => {
            std::fs::write(path, &json)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("wrote {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_check(a_path: &Path, b_path: &Path) -> Result<()> {
    let a = encode_file(a_path)?;
    let b = encode_file(b_path)?;
    let report = check_compatibility(&a, &b);

    println!("{:<16} {:<5} {:<5}", "slot", "a->b", "b->a");
    for verdict in &report.slots {
        println!(
            "{:<16} {:<5} {:<5}",
            verdict.attr.name(),
            verdict_word(verdict.a_accepts_b),
            verdict_word(verdict.b_accepts_a)
        );
    }

    if !report.is_mutual() {
        println!("mutual match: no");
        let blocking: Vec<String> = report
            .blocking()
            .into_iter()
            .map(|(attr, rejection)| {
                let who = match rejection {
                    Rejection::ARejectsB => "a rejects b",
                    Rejection::BRejectsA => "b rejects a",
                    Rejection::Both => "both reject",
                };
                format!("{attr} ({who})")
            })
            .collect();
        println!("blocking: {}", blocking.join(", "));
        return Ok(());
    }

    println!("mutual match: yes");
    let (to_a, to_b) = report.reveals(&a, &b);
    println!("revealed to a: {}", format_reveals(&to_a));
    println!("revealed to b: {}", format_reveals(&to_b));
    Ok(())
}

fn verdict_word(accepted: bool) -> &'static str {
    if accepted { "ok" } else { "no" }
}

fn format_reveals(reveals: &[(Attr, u8)]) -> String {
    if reveals.is_empty() {
        return "(nothing)".to_string();
    }
    reveals
        .iter()
        .map(|(attr, value)| format!("{attr}={value}"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn cmd_decode(path: &Path) -> Result<()> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let encoding =
        import_json(&json).with_context(|| format!("invalid ABI arrays in {}", path.display()))?;

    for (attr, record) in encoding.iter() {
        println!(
            "{:<16} value={:<3} mask={:#06x} range={}..={} reveal={}",
            attr.name(),
            record.value,
            record.pref_mask,
            record.pref_min,
            record.pref_max,
            record.reveal_flag
        );
    }
    Ok(())
}

fn cmd_slots() -> Result<()> {
    for attr in Attr::ALL {
        println!(
            "{:>2}  {:<16} {:<12} unknown={}",
            attr.index(),
            attr.name(),
            attr.kind().to_string(),
            attr.unknown_value()
        );
    }
    Ok(())
}
