//! File writers for the run artifacts: three CSVs plus one ASCII chart
//! file per size, all under a single output directory.
//!
//! Any filesystem failure is fatal and surfaces as [`HarnessError::Io`];
//! there is no partial-results recovery.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::HarnessError;
use crate::report;
use crate::types::{RankRecord, RunRecord};

pub const RAW_CSV: &str = "resultados_crudos.csv";
pub const MEDIANS_CSV: &str = "resumen_medianas.csv";
pub const RANKING_CSV: &str = "ranking_por_combinacion.csv";

/// Paths of everything one export produced.
#[derive(Debug, Clone)]
pub struct ExportPaths {
    pub raw: PathBuf,
    pub medians: PathBuf,
    pub ranking: PathBuf,
    pub charts: Vec<PathBuf>,
}

/// Write all artifacts for one run into `dir`, creating it if needed.
pub fn export_all(
    dir: &Path,
    records: &[RunRecord],
    ranking: &[RankRecord],
    sizes: &[usize],
    chart_width: usize,
) -> Result<ExportPaths, HarnessError> {
    fs::create_dir_all(dir).map_err(|source| HarnessError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    Ok(ExportPaths {
        raw: write_raw_csv(dir, records)?,
        medians: write_medians_csv(dir, records)?,
        ranking: write_ranking_csv(dir, ranking)?,
        charts: write_charts(dir, records, sizes, chart_width)?,
    })
}

/// Write the full run log: one row per trial, median, and skip record.
pub fn write_raw_csv(dir: &Path, records: &[RunRecord]) -> Result<PathBuf, HarnessError> {
    let mut csv = String::from("tamano,tipo,metodo,intento,tiempo_seg,estado\n");
    for r in records {
        csv.push_str(&format!(
            "{},{},{},{},{},{}\n",
            r.size,
            r.shape.token(),
            r.method,
            r.attempt_cell(),
            seconds_cell(r.seconds),
            r.status.token()
        ));
    }
    write_file(dir.join(RAW_CSV), &csv)
}

/// Write the median rows only.
pub fn write_medians_csv(dir: &Path, records: &[RunRecord]) -> Result<PathBuf, HarnessError> {
    let mut csv = String::from("tamano,tipo,metodo,tiempo_seg,estado\n");
    for r in records.iter().filter(|r| r.is_median()) {
        csv.push_str(&format!(
            "{},{},{},{},{}\n",
            r.size,
            r.shape.token(),
            r.method,
            seconds_cell(r.seconds),
            r.status.token()
        ));
    }
    write_file(dir.join(MEDIANS_CSV), &csv)
}

/// Write the per-combination ranking.
pub fn write_ranking_csv(dir: &Path, ranking: &[RankRecord]) -> Result<PathBuf, HarnessError> {
    let mut csv = String::from("tamano,tipo,metodo,tiempo_seg,estado,rank\n");
    for r in ranking {
        csv.push_str(&format!(
            "{},{},{},{},{},{}\n",
            r.size,
            r.shape.token(),
            r.method,
            seconds_cell(r.seconds),
            r.status.token(),
            r.rank
        ));
    }
    write_file(dir.join(RANKING_CSV), &csv)
}

/// Write one ASCII chart file per size.
pub fn write_charts(
    dir: &Path,
    records: &[RunRecord],
    sizes: &[usize],
    width: usize,
) -> Result<Vec<PathBuf>, HarnessError> {
    let rows = report::combination_rows(records);
    let mut paths = Vec::with_capacity(sizes.len());
    for &size in sizes {
        let mut text = report::chart_lines(&rows, size, width).join("\n");
        text.push('\n');
        paths.push(write_file(
            dir.join(format!("grafica_ascii_tam_{size}.txt")),
            &text,
        )?);
    }
    Ok(paths)
}

fn seconds_cell(seconds: Option<f64>) -> String {
    match seconds {
        Some(t) => format!("{t:.6}"),
        None => String::new(),
    }
}

fn write_file(path: PathBuf, contents: &str) -> Result<PathBuf, HarnessError> {
    fs::write(&path, contents).map_err(|source| HarnessError::Io {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}
