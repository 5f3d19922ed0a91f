use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use apsp::prelude::MeasurementRow;

const HEADER: &str = "Algorithm;Stopwatch;Cpu;Nodes;Percentage;Repeated;BuildConfiguration";

/// A semicolon-separated results file.
///
/// The file is created with a header line on first use; subsequent calls
/// append below the existing content, so repeated runs accumulate in one
/// file.
pub struct CsvFile {
    path: PathBuf,
}

impl CsvFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append_rows(&self, rows: &[MeasurementRow]) -> std::io::Result<()> {
        let initialize = !self.path.exists();

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let mut writer = BufWriter::new(file);

        if initialize {
            writeln!(writer, "{HEADER}")?;
        }
        for row in rows {
            writeln!(writer, "{}", format_row(row))?;
        }

        writer.flush()
    }
}

fn format_row(row: &MeasurementRow) -> String {
    format!(
        "{};{} ms;{} ms;{};{}%;{};{}",
        row.algorithm,
        row.wall_millis,
        row.cpu_millis,
        row.node_count,
        row.edge_percent,
        row.repeats,
        row.build_config
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    use apsp::prelude::FLOYD_WARSHALL;

    fn row() -> MeasurementRow {
        MeasurementRow {
            algorithm: FLOYD_WARSHALL,
            wall_millis: 12.5,
            cpu_millis: 11.25,
            node_count: 100,
            edge_percent: 20,
            repeats: 4,
            build_config: "Debug",
        }
    }

    #[test]
    fn formats_rows_with_semicolons() {
        assert_eq!(
            format_row(&row()),
            "Floyd Warshall;12.5 ms;11.25 ms;100;20%;4;Debug"
        );
    }

    #[test]
    fn initializes_the_header_once() {
        let dir = std::env::temp_dir().join("apsp_csv_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(format!("results_{}.csv", std::process::id()));
        let _ = std::fs::remove_file(&path);

        let file = CsvFile::new(&path);
        file.append_rows(&[row()]).unwrap();
        file.append_rows(&[row()]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], HEADER);
        assert_eq!(lines[1], lines[2]);

        std::fs::remove_file(&path).unwrap();
    }
}
