use std::io::Write;
use std::path::Path;

use super::points::PointSet;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Write the rows at `indices` as a pretty-printed JSON array.
pub fn write_rows_json<W: Write>(
    w: &mut W,
    points: &PointSet,
    indices: &[usize],
) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(&mut *w, &points.rows_to_json(indices))?;
    writeln!(w)?;
    Ok(())
}

/// Write `key,x,y` lines for the rows at `indices`.
pub fn write_rows_csv<W: Write>(
    w: &mut W,
    points: &PointSet,
    indices: &[usize],
) -> Result<(), ExportError> {
    writeln!(w, "key,x,y")?;
    for p in indices.iter().filter_map(|&i| points.get(i)) {
        writeln!(w, "{},{},{}", csv_field(&p.key), p.x, p.y)?;
    }
    Ok(())
}

fn csv_field(s: &str) -> String {
    if s.contains([',', '"', '\n']) {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// Save the selection, choosing the format from the file extension
/// (`.csv`, anything else is JSON).
pub fn save_selection<P: AsRef<Path>>(
    path: P,
    points: &PointSet,
    indices: &[usize],
) -> Result<(), ExportError> {
    let path = path.as_ref();
    let mut f = std::io::BufWriter::new(std::fs::File::create(path)?);
    let is_csv = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"));
    if is_csv {
        write_rows_csv(&mut f, points, indices)?;
    } else {
        write_rows_json(&mut f, points, indices)?;
    }
    f.flush()?;
    log::info!("exported {} rows to {:?}", indices.len(), path);
    Ok(())
}
