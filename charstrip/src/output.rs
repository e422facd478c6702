use crate::strip::StripReport;
use colored::Colorize;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::io::Write;
use std::time::Duration;

/// Create a byte progress bar drawn on stderr.
///
/// In test mode, returns a hidden progress bar to avoid polluting test output.
/// The length is set by the stripper once the target is open.
#[must_use]
pub fn create_progress_bar() -> ProgressBar {
    // In test mode, return a hidden progress bar to avoid polluting test output
    if cfg!(test) {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::with_draw_target(Some(0), ProgressDrawTarget::stderr_with_hz(20));
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.cyan} [{bar:40.cyan/blue}] {bytes}/{total_bytes} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓░"),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Helper to create a styled table
fn create_table(headers: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(headers);
    table
}

/// Print the per-character removal table followed by the size line.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_summary(writer: &mut impl Write, report: &StripReport) -> std::io::Result<()> {
    writeln!(writer, "\n{}", report.file.bold().underline())?;

    if report.removed_by_byte.is_empty() {
        writeln!(writer, "{}", "No matching characters found.".green())?;
    } else {
        let mut table = create_table(vec!["Char", "Byte", "Removed"]);
        for entry in &report.removed_by_byte {
            table.add_row(vec![
                Cell::new(&entry.display).add_attribute(Attribute::Bold),
                Cell::new(format!("0x{:02x}", entry.byte)).add_attribute(Attribute::Dim),
                Cell::new(entry.count)
                    .fg(Color::Red)
                    .set_alignment(CellAlignment::Right),
            ]);
        }
        writeln!(writer, "{table}")?;
    }

    print_sizes(writer, report)
}

/// Print the before/after size line.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_sizes(writer: &mut impl Write, report: &StripReport) -> std::io::Result<()> {
    let verb = if report.dry_run { "would be" } else { "now" };
    writeln!(
        writer,
        "{} bytes -> {} bytes {} ({} removed)",
        report.original_len.to_string().bold(),
        report.final_len.to_string().bold(),
        verb,
        report.removed.to_string().red().bold()
    )
}

/// Print the dry-run banner.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_dry_run_header(writer: &mut impl Write) -> std::io::Result<()> {
    writeln!(
        writer,
        "{}",
        "[DRY-RUN] File left unchanged; characters that would be removed:".yellow()
    )
}
