use anyhow::{Context, Result, bail};
use cardnorm_core::BankVariant;
use cardnorm_export::{Conversion, ConvertOptions, convert_file, write_transactions};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod config;
mod state;

#[derive(Parser, Debug)]
#[command(
    name = "cardnorm",
    version,
    about = "Normalize bank credit card statement CSVs"
)]
struct Cli {
    /// Debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (default: ~/.cardnorm/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a statement CSV into the normalized layout
    Convert {
        /// Statement CSV; the bank is detected from its file name
        input: PathBuf,

        /// Bank to assume instead of detecting it (hdfc, icici, idfc, axis)
        #[arg(long)]
        bank: Option<BankVariant>,

        /// Output file (default: input name with "Input" -> "Output")
        #[arg(short, long, conflicts_with_all = ["stdout", "json"])]
        output: Option<PathBuf>,

        /// Directory for the output file
        #[arg(long, conflicts_with_all = ["stdout", "json"])]
        out_dir: Option<PathBuf>,

        /// Write the normalized CSV to stdout instead of a file
        #[arg(long, conflicts_with = "json")]
        stdout: bool,

        /// Print transactions as JSON to stdout instead of writing CSV
        #[arg(long)]
        json: bool,
    },

    /// Print the bank detected from a file name
    Detect { file: PathBuf },

    /// Manage ~/.cardnorm/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a default config unless one exists
    Init,
    /// Print the effective config
    Show,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr).compact())
        .init();

    let config_file = cli.config.as_deref();

    match cli.command {
        Command::Convert {
            input,
            bank,
            output,
            out_dir,
            stdout,
            json,
        } => {
            let cfg = config::load_config(config_file)?;
            let options = ConvertOptions {
                bank,
                output,
                out_dir: out_dir.or(cfg.output.directory.clone()),
                write: !(stdout || json),
            };
            convert(&input, &options, &cfg, stdout, json)?;
        }

        Command::Detect { file } => {
            let name = file
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            match BankVariant::detect_from_file_name(&name) {
                Some(bank) => println!("{bank}"),
                None => bail!(
                    "Unsupported bank format: {} (file name must mention hdfc, icici, idfc or axis)",
                    file.display()
                ),
            }
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config(config_file)?,
            ConfigCommand::Show => {
                let cfg = config::load_config(config_file)?;
                print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
            }
        },
    }

    Ok(())
}

fn convert(
    input: &Path,
    options: &ConvertOptions,
    cfg: &config::Config,
    stdout: bool,
    json: bool,
) -> Result<()> {
    let normalizer = cfg.normalizer()?;
    let conversion = convert_file(input, options, &normalizer)
        .with_context(|| format!("converting {}", input.display()))?;

    if json {
        let out = serde_json::to_string_pretty(&conversion.transactions)?;
        println!("{out}");
        return Ok(());
    }

    if stdout {
        write_transactions(std::io::stdout().lock(), &conversion.transactions)?;
        return Ok(());
    }

    // stdout stays reserved for --stdout and --json payloads
    write_summary(&mut std::io::stderr().lock(), &conversion)?;
    Ok(())
}

fn write_summary(out: &mut impl Write, conversion: &Conversion) -> std::io::Result<()> {
    let r = &conversion.report;
    writeln!(out, "Bank: {}", conversion.bank)?;
    writeln!(out, "Parsed Transactions: {}", conversion.transactions.len())?;
    writeln!(
        out,
        "Rows: {} (headers: {}, sections: {}, dropped: {})",
        r.rows, r.header_rows, r.section_markers, r.dropped_rows
    )?;
    if !r.cardholders.is_empty() {
        writeln!(out, "Cardholders: {}", r.cardholders.join(", "))?;
    }
    if let Some(path) = &conversion.output {
        writeln!(out, "Wrote {}", path.display())?;
    }
    Ok(())
}
