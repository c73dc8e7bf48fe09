//! Configuration for a report run.
//!
//! Every path the run touches is derived from [`ReportConfig`]; nothing
//! depends on the process working directory.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{ReportError, Result};

/// Default file name of the valid-cases table
pub const DEFAULT_VALID_FILE: &str = "datos_con_cpc_valido.csv";
/// Default file name of the excluded-cases table
pub const DEFAULT_EXCLUDED_FILE: &str = "datos_excluidos.csv";
/// Default file name of the summary table
pub const DEFAULT_SUMMARY_FILE: &str = "tabla_resumen_caracteristicas.csv";

/// Configuration for a report run
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Directory holding the two input tables
    pub data_dir: PathBuf,
    /// Directory the summary table is written to
    pub output_dir: PathBuf,
    /// File name of the valid-cases table
    pub valid_file: String,
    /// File name of the excluded-cases table
    pub excluded_file: String,
    /// File name of the summary table
    pub summary_file: String,
    /// Field delimiter for input and output tables
    pub delimiter: u8,
    /// Column names in the input tables
    pub columns: ColumnNames,
    /// Category codes used by the classification rules
    pub vocabulary: Vocabulary,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            output_dir: PathBuf::from("."),
            valid_file: DEFAULT_VALID_FILE.to_string(),
            excluded_file: DEFAULT_EXCLUDED_FILE.to_string(),
            summary_file: DEFAULT_SUMMARY_FILE.to_string(),
            delimiter: b',',
            columns: ColumnNames::default(),
            vocabulary: Vocabulary::default(),
        }
    }
}

impl ReportConfig {
    /// Configuration reading from and writing to a single directory
    #[must_use]
    pub fn for_directory(dir: impl AsRef<Path>) -> Self {
        Self {
            data_dir: dir.as_ref().to_path_buf(),
            output_dir: dir.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    /// Path of the valid-cases table
    #[must_use]
    pub fn valid_path(&self) -> PathBuf {
        self.data_dir.join(&self.valid_file)
    }

    /// Path of the excluded-cases table
    #[must_use]
    pub fn excluded_path(&self) -> PathBuf {
        self.data_dir.join(&self.excluded_file)
    }

    /// Path of the summary table
    #[must_use]
    pub fn summary_path(&self) -> PathBuf {
        self.output_dir.join(&self.summary_file)
    }

    /// Parse a delimiter given as text; `\t` and `tab` select a tab
    pub fn parse_delimiter(value: &str) -> Result<u8> {
        match value {
            "\\t" | "tab" => Ok(b'\t'),
            _ => match value.as_bytes() {
                [byte] if byte.is_ascii() && !byte.is_ascii_alphanumeric() => Ok(*byte),
                _ => Err(ReportError::Config(format!(
                    "delimiter must be a single ASCII punctuation character, got '{value}'"
                ))),
            },
        }
    }
}

impl fmt::Display for ReportConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Report Configuration:")?;
        writeln!(f, "  Valid Cases: {}", self.valid_path().display())?;
        writeln!(f, "  Excluded Cases: {}", self.excluded_path().display())?;
        writeln!(f, "  Summary Table: {}", self.summary_path().display())?;
        writeln!(f, "  Delimiter: {:?}", char::from(self.delimiter))?;
        write!(f, "  Vocabulary: {}", self.vocabulary.name)
    }
}

/// Column names of the input tables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnNames {
    /// Patient age in years
    pub age: String,
    /// Patient sex
    pub sex: String,
    /// Transtelephonic CPR indicator (0/1)
    pub transtelephonic_cpr: String,
    /// Bystander CPR type code
    pub bystander_cpr: String,
    /// Return of spontaneous circulation indicator (0/1)
    pub rosc: String,
    /// Seven-day survival indicator (0/1)
    pub survival_7d: String,
    /// Cerebral performance category
    pub cpc: String,
    /// Ambulance arrival time in seconds
    pub arrival_time: String,
    /// CPR duration in seconds
    pub cpr_duration: String,
    /// Exclusion reason (excluded table only)
    pub exclusion_reason: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            age: "EDAD".to_string(),
            sex: "SEXO".to_string(),
            transtelephonic_cpr: "RCP_TRANSTELEFONICA".to_string(),
            bystander_cpr: "RCP_TESTIGOS".to_string(),
            rosc: "ROSC".to_string(),
            survival_7d: "Supervivencia_7dias".to_string(),
            cpc: "CPC".to_string(),
            arrival_time: "Tiempo_llegada".to_string(),
            cpr_duration: "Tiempo_Rcp".to_string(),
            exclusion_reason: "Excluido".to_string(),
        }
    }
}

/// Category codes recognised in the bystander CPR column and the sex column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    /// Preset name, for display
    pub name: &'static str,
    /// Codes meaning no CPR before ambulance arrival
    pub no_cpr: Vec<String>,
    /// Codes meaning CPR by a lay bystander
    pub lay_bystander: Vec<String>,
    /// Codes meaning CPR by a first responder
    pub first_responder: Vec<String>,
    /// Value of the sex column denoting male patients
    pub male: String,
}

impl Vocabulary {
    /// English codes
    #[must_use]
    pub fn english() -> Self {
        Self {
            name: "english",
            no_cpr: to_strings(&["none"]),
            lay_bystander: to_strings(&["lay", "true"]),
            first_responder: to_strings(&["healthcare", "police", "firefighter"]),
            male: "Male".to_string(),
        }
    }

    /// Codes used by the cleaned Spanish registry extract
    #[must_use]
    pub fn spanish() -> Self {
        Self {
            name: "spanish",
            no_cpr: to_strings(&["falso"]),
            lay_bystander: to_strings(&["lego", "verdadero"]),
            first_responder: to_strings(&["sanitario", "policia", "bombero"]),
            male: "Masculino".to_string(),
        }
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::english()
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}
