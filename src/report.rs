//! Console and delimited-file output for a [`SizeReport`].

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{BenchError, Result};
use crate::matrix::Dims;
use crate::runner::{KernelStats, SizeReport};

/// Field separator of the persisted report.
pub const DELIMITER: char = ';';

/// File name for a report: `results_<dim>.csv` for square problems,
/// `results_<m>x<k>x<n>.csv` otherwise.
pub fn file_name(dims: Dims) -> String {
    if dims.is_square() {
        format!("results_{}.csv", dims.m)
    } else {
        format!("results_{}x{}x{}.csv", dims.m, dims.k, dims.n)
    }
}

/// Human-readable per-run lines followed by the aggregate lines.
pub fn write_console<W: Write + ?Sized>(report: &SizeReport, out: &mut W) -> io::Result<()> {
    let d = report.dims;
    writeln!(out, "Results for {} x {} x {}:", d.m, d.k, d.n)?;
    for run in 0..report.runs {
        write!(out, "  Run {:2}:", run + 1)?;
        for (idx, k) in report.kernels.iter().enumerate() {
            let s = k.samples[run];
            let sep = if idx + 1 == report.kernels.len() { "" } else { ";" };
            write!(
                out,
                " time ({}) = {:.6} s, GFLOPS = {:.6}{}",
                k.order, s.secs, s.gflops, sep
            )?;
        }
        writeln!(out)?;
    }

    let ks = &report.kernels;
    summary_line(out, "Mean time", ks, |k| format!("{:.6} s", k.mean_secs))?;
    summary_line(out, "Std dev time", ks, |k| format!("{:.6} s", k.std_secs))?;
    summary_line(out, "Mean GFLOPS", ks, |k| format!("{:.6}", k.mean_gflops))?;
    summary_line(out, "Std dev GFLOPS", ks, |k| format!("{:.6}", k.std_gflops))?;
    summary_line(out, "Relative efficiency", ks, |k| format!("{:.2}%", k.efficiency))?;
    writeln!(out)?;
    Ok(())
}

fn summary_line<W, F>(out: &mut W, label: &str, ks: &[KernelStats], f: F) -> io::Result<()>
where
    W: Write + ?Sized,
    F: Fn(&KernelStats) -> String,
{
    let fields: Vec<String> = ks.iter().map(|k| format!("{} = {}", k.order, f(k))).collect();
    writeln!(out, "  {}: {}", label, fields.join(", "))
}

/// `;`-separated report: header, one row per run, then `Mean`, `StdDev` and
/// `Efficiency(%)` rows.
///
/// The std-dev row carries GFLOPS spread as well as time spread. Efficiency
/// is one number per kernel, so it sits under the three time columns and the
/// GFLOPS fields are left empty.
pub fn write_delimited<W: Write + ?Sized>(report: &SizeReport, out: &mut W) -> io::Result<()> {
    let ks = &report.kernels;
    let header: Vec<String> = std::iter::once("Run".to_string())
        .chain(ks.iter().map(|k| format!("Time_{}(s)", k.order)))
        .chain(ks.iter().map(|k| format!("GFLOPS_{}", k.order)))
        .collect();
    writeln!(out, "{}", header.join(&DELIMITER.to_string()))?;

    for run in 0..report.runs {
        let row: Vec<f64> = ks
            .iter()
            .map(|k| k.samples[run].secs)
            .chain(ks.iter().map(|k| k.samples[run].gflops))
            .collect();
        write_row(out, &(run + 1).to_string(), &row)?;
    }

    let means: Vec<f64> = ks
        .iter()
        .map(|k| k.mean_secs)
        .chain(ks.iter().map(|k| k.mean_gflops))
        .collect();
    write_row(out, "Mean", &means)?;
    let stds: Vec<f64> = ks
        .iter()
        .map(|k| k.std_secs)
        .chain(ks.iter().map(|k| k.std_gflops))
        .collect();
    write_row(out, "StdDev", &stds)?;

    write!(out, "Efficiency(%)")?;
    for k in ks {
        write!(out, "{}{:.6}", DELIMITER, k.efficiency)?;
    }
    for _ in ks {
        write!(out, "{}", DELIMITER)?;
    }
    writeln!(out)
}

fn write_row<W: Write + ?Sized>(out: &mut W, label: &str, values: &[f64]) -> io::Result<()> {
    write!(out, "{}", label)?;
    for v in values {
        write!(out, "{}{:.6}", DELIMITER, v)?;
    }
    writeln!(out)
}

/// Write the delimited report for `report` into `dir`. Returns its path.
pub fn save(report: &SizeReport, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(file_name(report.dims));
    let file = File::create(&path).map_err(|e| BenchError::io(&path, e))?;
    let mut w = BufWriter::new(file);
    write_delimited(report, &mut w)
        .and_then(|()| w.flush())
        .map_err(|e| BenchError::io(&path, e))?;
    info!(path = %path.display(), "report written");
    Ok(path)
}
