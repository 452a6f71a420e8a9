//! Console driver for the sorting benchmark harness.
//!
//! Runs the fixed benchmark matrix, writes the CSV and ASCII-chart
//! artifacts, and prints a summary to the console. Takes no arguments:
//! the configuration constants live in `BenchConfig::default()`, and
//! callers needing different values use the library directly.
//!
//! Run with: cargo run --release --bin sortbench

use std::process;

use sortbench::{export, report, sorts, Attempt, BenchConfig, HarnessError, RunRecord};

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), HarnessError> {
    let config = BenchConfig::default();

    println!("Iniciando pruebas de ordenamiento...\n");
    let log = sortbench::run_with_progress(&config, print_progress);
    println!("Pruebas finalizadas.\n");

    let rows = report::combination_rows(&log);
    let ranking = report::rank_by_combination(&rows, &config.sizes, &config.shapes);
    let summaries = report::method_summaries(&ranking, &sorts::method_names());

    let paths = export::export_all(
        &config.out_dir,
        &log,
        &ranking,
        &config.sizes,
        config.chart_width,
    )?;

    println!(
        "Archivos CSV guardados en carpeta: {}",
        config.out_dir.display()
    );
    println!(" - {}", paths.raw.display());
    println!(" - {}", paths.medians.display());
    println!(" - {}\n", paths.ranking.display());

    println!("Resumen por método:");
    println!(
        "{:15} | {:>9} | {:>9} | {:>14}",
        "MÉTODO", "VICTORIAS", "PROM_RANK", "PROM_TIEMPO(s)"
    );
    println!("{}", "-".repeat(58));
    for s in &summaries {
        let avg_rank = s
            .avg_rank
            .map(|r| format!("{r:.2}"))
            .unwrap_or_else(|| "N/A".to_string());
        let avg_time = s
            .avg_seconds
            .map(|t| format!("{t:.6}"))
            .unwrap_or_else(|| "N/A".to_string());
        println!(
            "{:15} | {:>9} | {:>9} | {:>14}",
            s.method, s.wins, avg_rank, avg_time
        );
    }
    println!();

    println!("Ranking TOP 3 por cada combinación (tamaño + tipo):\n");
    for &size in &config.sizes {
        for &shape in &config.shapes {
            println!("tamaño={size} tipo={shape}:");
            let top = ranking
                .iter()
                .filter(|r| r.size == size && r.shape == shape && r.rank <= 3);
            for r in top {
                let time = match r.seconds {
                    Some(t) => format!("{t:.6}s"),
                    None => "omitido".to_string(),
                };
                println!(
                    "  rank {}: {:15} tiempo={} estado={}",
                    r.rank, r.method, time, r.status
                );
            }
            println!();
        }
    }

    println!("Gráficas ASCII guardadas:");
    for path in &paths.charts {
        println!(" - {}", path.display());
    }
    println!();

    println!("Vista previa de cada gráfica (primeras líneas):\n");
    for (&size, path) in config.sizes.iter().zip(&paths.charts) {
        println!("Archivo: {}", path.display());
        for line in report::chart_lines(&rows, size, config.chart_width)
            .iter()
            .take(8)
        {
            println!("{line}");
        }
        println!("  ...\n");
    }

    println!(
        "Ejecución completa. Revisa la carpeta '{}' para CSVs y gráficas ASCII.",
        config.out_dir.display()
    );
    Ok(())
}

fn print_progress(r: &RunRecord) {
    match r.attempt {
        None => println!("[omitido] {} tam={} tipo={}", r.method, r.size, r.shape),
        Some(Attempt::Trial(i)) => println!(
            "tam={} tipo={} metodo={} intento={} tiempo={:.6}s estado={}",
            r.size,
            r.shape,
            r.method,
            i,
            r.seconds.unwrap_or(0.0),
            r.status
        ),
        Some(Attempt::Median) => println!(
            "  -> mediana {} tam={} tipo={}: {:.6}s  estado: {}\n",
            r.method,
            r.size,
            r.shape,
            r.seconds.unwrap_or(0.0),
            r.status
        ),
    }
}
