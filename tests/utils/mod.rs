//! Shared fixtures for the integration tests

use std::fs;
use std::path::{Path, PathBuf};

use ohca_report::ReportConfig;
use ohca_report::config::{DEFAULT_EXCLUDED_FILE, DEFAULT_SUMMARY_FILE, DEFAULT_VALID_FILE};
use tempfile::TempDir;

/// Header of the valid-cases fixture
pub const VALID_HEADER: &str =
    "EDAD,SEXO,RCP_TRANSTELEFONICA,RCP_TESTIGOS,ROSC,Supervivencia_7dias,CPC,Tiempo_llegada,Tiempo_Rcp";

/// Header of the excluded-cases fixture
pub const EXCLUDED_HEADER: &str = "Excluido,EDAD,SEXO";

/// Ten valid cases: 3 transtelephonic, 2 without prior CPR, 2 lay-bystander,
/// 1 first-responder and 2 other; ROSC in 4, one case without age
pub const VALID_ROWS: &[&str] = &[
    "70,Male,1,none,1,1,1,420,600",
    "45,Female,1,lay,1,0,2,300,0",
    "65,Male,1,,0,0,5,,900",
    "30,Male,0,none,1,1,1,600,1200",
    "82,Female,0,none,0,0,5,540,",
    "55,Male,0,lay,0,0,3,480,300",
    ",Female,0,true,1,1,2,360,",
    "64,Male,0,police,0,0,4,,",
    "77,Female,0,unknown,0,0,,720,1500",
    "50,,0,,0,0,x,300,600",
];

/// Six excluded cases over three reasons
pub const EXCLUDED_ROWS: &[&str] = &[
    "TRAUMA,40,Male",
    "trauma,35,Male",
    "SVB,80,Female",
    "CADAVER,90,Female",
    "CADAVER,,Male",
    "DNR,60,",
];

/// Write a delimited file from a header and rows
pub fn write_table(path: &Path, header: &str, rows: &[&str]) {
    let mut content = String::from(header);
    content.push('\n');
    for row in rows {
        content.push_str(row);
        content.push('\n');
    }
    fs::write(path, content).unwrap();
}

/// A temporary data directory with both fixture tables
pub struct Fixture {
    pub dir: TempDir,
}

impl Fixture {
    /// Fixture with the default valid and excluded tables
    #[must_use]
    pub fn new() -> Self {
        Self::with_rows(VALID_ROWS, EXCLUDED_ROWS)
    }

    /// Fixture with the given data rows under the default headers
    #[must_use]
    pub fn with_rows(valid: &[&str], excluded: &[&str]) -> Self {
        let fixture = Self::empty();
        write_table(&fixture.valid_path(), VALID_HEADER, valid);
        write_table(&fixture.excluded_path(), EXCLUDED_HEADER, excluded);
        fixture
    }

    /// Fixture directory without any table
    #[must_use]
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    #[must_use]
    pub fn valid_path(&self) -> PathBuf {
        self.path().join(DEFAULT_VALID_FILE)
    }

    #[must_use]
    pub fn excluded_path(&self) -> PathBuf {
        self.path().join(DEFAULT_EXCLUDED_FILE)
    }

    #[must_use]
    pub fn summary_path(&self) -> PathBuf {
        self.path().join(DEFAULT_SUMMARY_FILE)
    }

    /// Configuration reading from and writing to the fixture directory
    #[must_use]
    pub fn config(&self) -> ReportConfig {
        ReportConfig::for_directory(self.path())
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}
