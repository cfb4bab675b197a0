//! Demo: interactive scatter of two synthetic expression columns
//!
//! What it demonstrates
//! - Building a scatter view from a table with `ScatterController::from_table`.
//! - Searching the text columns, picking a boolean subset, switching axes.
//! - Saving the selection table to CSV.
//!
//! How to run
//! ```bash
//! cargo run --example scatter [config.json|config.yaml]
//! ```
//! Set `RUST_LOG=scatterview=debug` to watch the callbacks.

use scatterview::{load_config_from_path, run_scatter, DataSource, ScatterConfig, ScatterController, Value};

fn make_table(n: usize) -> Result<DataSource, scatterview::Error> {
    let mut alias = Vec::with_capacity(n);
    let mut description = Vec::with_capacity(n);
    let mut wt = Vec::with_capacity(n);
    let mut mutant = Vec::with_capacity(n);
    let mut knockdown = Vec::with_capacity(n);
    let mut hit = Vec::with_capacity(n);

    for i in 0..n {
        let t = i as f64 * 0.37;
        let base = 2.0 + 1.5 * t.sin() + 0.01 * i as f64;
        let shift = if i % 17 == 0 { 1.2 } else { 0.05 * (t * 3.0).cos() };
        alias.push(Value::from(format!("gene{i:03}")));
        description.push(Value::from(match i % 4 {
            0 => "ribosomal protein",
            1 => "membrane transporter",
            2 => "transcription factor",
            _ => "uncharacterized",
        }));
        wt.push(Value::from(base));
        // every 23rd measurement failed
        mutant.push(if i % 23 == 5 { Value::Missing } else { Value::from(base + shift) });
        knockdown.push(Value::from(base - 0.5 * shift));
        hit.push(Value::from(i % 17 == 0));
    }

    DataSource::from_columns(
        "table",
        [
            ("alias", alias),
            ("description", description),
            ("wt", wt),
            ("mut", mutant),
            ("knockdown", knockdown),
            ("is_hit", hit),
        ],
    )
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cfg = match std::env::args().nth(1) {
        Some(path) => load_config_from_path(std::path::Path::new(&path))?,
        None => ScatterConfig {
            title: "Scatter demo".to_string(),
            table_columns: vec!["alias".into(), "description".into(), "x".into(), "y".into()],
            hover_columns: vec!["description".into()],
            ..Default::default()
        },
    };

    let controller = ScatterController::from_table(make_table(400)?, cfg)?;
    let events = controller.events().subscribe_all();
    std::thread::spawn(move || {
        while let Ok(evt) = events.recv() {
            println!("[{:8.3}] {}", evt.timestamp, evt.kinds);
        }
    });

    run_scatter(controller)?;
    Ok(())
}
