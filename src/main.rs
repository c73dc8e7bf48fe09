//! Command-line entry point of the OHCA descriptive report

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use log::error;
use ohca_report::{ReportConfig, Vocabulary, pipeline};

/// Category vocabulary of the bystander-CPR and sex columns
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum VocabularyArg {
    /// none / lay, true / healthcare, police, firefighter
    #[default]
    English,
    /// falso / lego, verdadero / sanitario, policia, bombero
    Spanish,
}

impl From<VocabularyArg> for Vocabulary {
    fn from(arg: VocabularyArg) -> Self {
        match arg {
            VocabularyArg::English => Self::english(),
            VocabularyArg::Spanish => Self::spanish(),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "ohca-report")]
#[command(version)]
#[command(about = "Descriptive statistics of transtelephonic CPR in out-of-hospital cardiac arrest")]
struct CommandArgs {
    /// Directory holding the valid-cases and excluded-cases files
    #[arg(short, long, default_value = ".")]
    data_dir: PathBuf,

    /// Directory for the summary table (defaults to the data directory)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// File name of the valid-cases table
    #[arg(long, default_value = ohca_report::config::DEFAULT_VALID_FILE)]
    valid_file: String,

    /// File name of the excluded-cases table
    #[arg(long, default_value = ohca_report::config::DEFAULT_EXCLUDED_FILE)]
    excluded_file: String,

    /// File name of the summary table
    #[arg(long, default_value = ohca_report::config::DEFAULT_SUMMARY_FILE)]
    summary_file: String,

    /// Field delimiter of input and output files ("\t" or "tab" for tabs)
    #[arg(long, default_value = ",")]
    delimiter: String,

    /// Category vocabulary of the input data
    #[arg(long, value_enum, default_value_t)]
    vocabulary: VocabularyArg,
}

impl CommandArgs {
    fn into_config(self) -> anyhow::Result<ReportConfig> {
        let delimiter = ReportConfig::parse_delimiter(&self.delimiter)
            .context("Invalid --delimiter argument")?;
        let mut config = ReportConfig::for_directory(&self.data_dir);
        if let Some(output_dir) = self.output_dir {
            config.output_dir = output_dir;
        }
        config.valid_file = self.valid_file;
        config.excluded_file = self.excluded_file;
        config.summary_file = self.summary_file;
        config.delimiter = delimiter;
        config.vocabulary = self.vocabulary.into();
        Ok(config)
    }
}

fn run(args: CommandArgs) -> anyhow::Result<()> {
    let config = args.into_config()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    pipeline::run(&config, &mut out).with_context(|| {
        format!(
            "Report run failed for data directory {}",
            config.data_dir.display()
        )
    })?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(CommandArgs::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            eprintln!("ERROR: {err:?}");
            ExitCode::FAILURE
        }
    }
}
