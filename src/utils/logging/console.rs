//! Console output utilities
//!
//! Banner and rule helpers for the text report. Everything writes to a
//! generic [`Write`] so the report can be captured in tests.

use std::io::{self, Write};

/// Width of top-level banners
pub const BANNER_WIDTH: usize = 70;
/// Width of section banners
pub const SECTION_WIDTH: usize = 50;

/// Write a horizontal rule of `=` characters
pub fn write_rule<W: Write>(out: &mut W, width: usize) -> io::Result<()> {
    writeln!(out, "{}", "=".repeat(width))
}

/// Write a top-level banner, preceded by a blank line
pub fn write_banner<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out)?;
    write_rule(out, BANNER_WIDTH)?;
    writeln!(out, "{title}")?;
    write_rule(out, BANNER_WIDTH)
}

/// Write a section banner, preceded by a blank line
pub fn write_section<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out)?;
    write_rule(out, SECTION_WIDTH)?;
    writeln!(out, "{title}")?;
    write_rule(out, SECTION_WIDTH)
}
