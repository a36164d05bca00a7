use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

use crate::data::planar::PlanarDataset;

fn log_dir() -> io::Result<()> {
    fs::create_dir_all("logs")
}

fn append_json_line<P: AsRef<Path>, T: Serialize>(path: P, value: &T) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    serde_json::to_writer(&mut file, value)
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
    file.write_all(b"\n")
}

fn timestamp_ms() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
}

#[derive(Debug, Serialize)]
pub struct GenerationLogEntry {
    pub complexity: usize,
    pub noisiness: f64,
    pub num_points: usize,
    pub positive_labels: usize,
    pub seed: u64,
    pub timestamp_ms: u128,
}

pub fn log_generation(dataset: &PlanarDataset) -> io::Result<()> {
    log_dir()?;
    let (_, positives) = dataset.label_counts();
    let entry = GenerationLogEntry {
        complexity: dataset.config.complexity,
        noisiness: dataset.config.noisiness,
        num_points: dataset.len(),
        positive_labels: positives,
        seed: dataset.config.seed,
        timestamp_ms: timestamp_ms(),
    };
    append_json_line("logs/generation.jsonl", &entry)
}

#[derive(Debug, Serialize)]
pub struct RenderLogEntry {
    pub grid_rows: usize,
    pub grid_cols: usize,
    pub binary: bool,
    pub timestamp_ms: u128,
}

pub fn log_render(grid_rows: usize, grid_cols: usize, binary: bool) -> io::Result<()> {
    log_dir()?;
    let entry = RenderLogEntry {
        grid_rows,
        grid_cols,
        binary,
        timestamp_ms: timestamp_ms(),
    };
    append_json_line("logs/render.jsonl", &entry)
}
