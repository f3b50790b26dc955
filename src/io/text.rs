//! Plain-text listing of generated matrices
//!
//! One line per row, top to bottom. Each cell is written as `#rrggbb/alpha`
//! and cells are separated by a single space.

use crate::color::rgba::FinalColor;
use crate::io::error::{GenerationError, Result};
use crate::spatial::grid::ColorMatrix;
use std::io::Write;
use std::path::Path;

/// Format a single cell as `#rrggbb/alpha`
pub fn format_color(color: &FinalColor) -> String {
    format!(
        "#{:02x}{:02x}{:02x}/{}",
        color.r, color.g, color.b, color.alpha
    )
}

/// Write the matrix listing to any writer
///
/// # Errors
///
/// Returns an error if the writer fails
pub fn write_matrix<W: Write>(matrix: &ColorMatrix, writer: &mut W) -> std::io::Result<()> {
    for row in matrix.rows() {
        let line = row.iter().map(format_color).collect::<Vec<_>>().join(" ");
        writeln!(writer, "{line}")?;
    }
    writer.flush()
}

/// Write the matrix listing to a file, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The file cannot be created or written
pub fn export_matrix_as_text(matrix: &ColorMatrix, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| GenerationError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    let file = std::fs::File::create(output_path).map_err(|e| GenerationError::FileSystem {
        path: output_path.to_path_buf(),
        operation: "create file",
        source: e,
    })?;

    let mut writer = std::io::BufWriter::new(file);
    write_matrix(matrix, &mut writer).map_err(|e| GenerationError::FileSystem {
        path: output_path.to_path_buf(),
        operation: "write matrix",
        source: e,
    })
}
