//! Fieldcheck CLI - validate delimited text records against a schema
//!
//! # Main Commands
//!
//! ```bash
//! fieldcheck run                       # Validate records, write report + summary
//! fieldcheck run --input records.txt   # Same, with an explicit input file
//! ```
//!
//! # Debug Commands (for development)
//!
//! ```bash
//! fieldcheck classify "AB 12"          # Show how one value is categorized
//! fieldcheck codes                     # List the loaded error code templates
//! ```

use clap::{Parser, Subcommand};
use fieldcheck::{
    classify, logs, run, MessageCatalog, RunConfig, DEFAULT_CODES_FILE, DEFAULT_DEFINITION_FILE,
    DEFAULT_INPUT_FILE, DEFAULT_LOG_FILE, DEFAULT_OUT_DIR,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "fieldcheck")]
#[command(about = "Validate delimited text records against a schema definition", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate input records and write the report, summary and run log
    Run {
        /// Standard definition file (JSON)
        #[arg(short, long, default_value = DEFAULT_DEFINITION_FILE)]
        definition: PathBuf,

        /// Error code template file (JSON)
        #[arg(short, long, default_value = DEFAULT_CODES_FILE)]
        codes: PathBuf,

        /// Input records file, one `&`-delimited record per line
        #[arg(short, long, default_value = DEFAULT_INPUT_FILE)]
        input: PathBuf,

        /// Output directory for report.csv and summary.txt
        #[arg(short, long, default_value = DEFAULT_OUT_DIR)]
        out_dir: PathBuf,

        /// Run log file
        #[arg(long, default_value = DEFAULT_LOG_FILE)]
        log: PathBuf,
    },

    /// Show how one value is categorized
    Classify {
        /// Value to classify
        value: String,
    },

    /// List the error code templates from a code file
    Codes {
        /// Error code template file (JSON)
        #[arg(short, long, default_value = DEFAULT_CODES_FILE)]
        codes: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            definition,
            codes,
            input,
            out_dir,
            log,
        } => cmd_run(definition, codes, input, out_dir, log),

        Commands::Classify { value } => cmd_classify(&value),

        Commands::Codes { codes } => cmd_codes(&codes),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_run(
    definition: PathBuf,
    codes: PathBuf,
    input: PathBuf,
    out_dir: PathBuf,
    log: PathBuf,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = RunConfig {
        definition_path: definition,
        codes_path: codes,
        input_path: input,
        out_dir,
        log_path: log,
    };

    logs::init_file(&config.log_path)?;

    eprintln!("📄 Validating: {}", config.input_path.display());
    eprintln!("   Definition: {}", config.definition_path.display());
    eprintln!("   Codes: {}", config.codes_path.display());

    let outcome = run(&config)?;

    eprintln!("   Rows: {}", outcome.rows.len());
    if outcome.issue_count() > 0 {
        eprintln!("   ⚠️  Issues: {}", outcome.issue_count());
    } else {
        eprintln!("   ✅ All rows valid");
    }

    eprintln!("💾 Report: {}", config.report_path().display());
    eprintln!("💾 Summary: {}", config.summary_path().display());
    eprintln!("💾 Log: {}", config.log_path.display());

    eprintln!("\n✨ Done!");
    Ok(())
}

fn cmd_classify(value: &str) -> Result<(), Box<dyn std::error::Error>> {
    let data_type = classify(value);
    println!("value     : {}", value);
    println!("data type : {}", data_type);
    println!("length    : {}", value.chars().count());
    Ok(())
}

fn cmd_codes(codes: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = MessageCatalog::from_path(codes)?;

    if catalog.templates().is_empty() {
        eprintln!("📋 No error codes defined in {}", codes.display());
        return Ok(());
    }

    eprintln!("📋 Error codes ({}):\n", catalog.templates().len());
    for template in catalog.templates() {
        println!("  {}  {}", template.code, template.message_template);
    }
    Ok(())
}
