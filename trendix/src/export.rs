//! CSV export of fitted trend lines.

use std::fs;
use std::path::Path;

use crate::constant::ExportError;
use crate::fitter::TrendLine;

const HEADER: [&str; 7] = [
    "TrendLineType",
    "StartDate",
    "StartPrice",
    "EndDate",
    "EndPrice",
    "Slope",
    "DurationDays",
];

/// Writes the fitted lines to `path` as CSV.
///
/// The file is written to a sibling `.tmp` path first and renamed into
/// place, so a crash mid-write never leaves a truncated export behind.
/// Refuses to write an empty file.
pub fn export_trend_lines_csv(
    lines: &[TrendLine],
    path: impl AsRef<Path>,
) -> Result<(), ExportError> {
    if lines.is_empty() {
        return Err(ExportError::NoTrendLines);
    }

    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let tmp = match path.file_name() {
        Some(name) => {
            let mut tmp_name = name.to_os_string();
            tmp_name.push(".tmp");
            path.with_file_name(tmp_name)
        }
        None => return Err(ExportError::Io(std::io::Error::other("path has no file name"))),
    };

    if let Err(e) = write_rows(lines, &tmp) {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(ExportError::Io(e));
    }
    Ok(())
}

fn write_rows(lines: &[TrendLine], path: &Path) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(HEADER)?;
    for line in lines {
        writer.write_record([
            line.line_type.to_string(),
            line.start_point.date.format("%Y-%m-%d").to_string(),
            format!("{:.3}", line.start_point.price()),
            line.end_point.date.format("%Y-%m-%d").to_string(),
            format!("{:.3}", line.end_point.price()),
            format!("{:.6}", line.slope),
            line.duration_days().to_string(),
        ])?;
    }
    writer.flush().map_err(ExportError::Io)?;
    Ok(())
}
