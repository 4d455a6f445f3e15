use anyhow::Result;
use log::LevelFilter;
use ndarray::{array, Array2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use atlas_scaling::{flip_source_tasks, DataKind, Scaler, ScalerConfig, Task};

/// Build a handful of synthetic source tasks on a 2D parameter space with a
/// single objective to maximize.
fn synthetic_tasks(rng: &mut StdRng, n_tasks: usize) -> Result<Vec<Task>> {
    let mut tasks = Vec::with_capacity(n_tasks);
    for t in 0..n_tasks {
        let n = rng.gen_range(5..20);
        let params = Array2::from_shape_fn((n, 2), |_| rng.gen_range(0.0..10.0));
        let shift = t as f64;
        let values = params
            .outer_iter()
            .map(|row| -((row[0] - 3.0 - shift).powi(2) + (row[1] - 7.0).powi(2)))
            .collect::<Vec<f64>>();
        let values = Array2::from_shape_vec((n, 1), values)?;
        tasks.push(Task::new(params, values)?);
    }
    Ok(tasks)
}

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("ATLAS_LOG", "error,atlas_scaling=debug"))
        .init();

    let mut rng = StdRng::seed_from_u64(42);
    let tasks = synthetic_tasks(&mut rng, 4)?;

    // the optimizer minimizes, so flip the maximization objective first
    let tasks = flip_source_tasks(&tasks);

    let config = ScalerConfig::from_json(
        r#"{"param_type": "normalization", "value_type": "standardization"}"#,
    )?;
    let (scaler, scaled) = Scaler::from_config(&config).fit_transform_tasks(&tasks)?;

    for (i, task) in scaled.iter().enumerate() {
        log::info!(
            "task {}: {} samples, first params row {:?}",
            i,
            task.n_samples(),
            task.params.row(0).to_vec()
        );
    }

    let proposal = array![[0.5, 0.5]];
    let raw = scaler.inverse_transform(&proposal, DataKind::Params)?;
    println!("scaled proposal {:?} -> raw params {:?}", proposal, raw);

    println!("{}", scaler.to_json()?);
    Ok(())
}
