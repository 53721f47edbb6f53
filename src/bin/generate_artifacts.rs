use aircast::features::{EXPECTED_ORDER, LAG_COUNT};
use aircast::inference::artifact::{KnnArtifact, ScalerArtifact};
use aircast::inference::loader::{MODEL_PATH, SCALER_PATH};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// Synthesize a daily NO₂ column-density series: a weekly cycle around a
/// typical urban baseline, with persistence between consecutive days.
fn generate_series(days: usize, rng: &mut SimpleRng) -> Vec<f64> {
    let baseline = 0.000015;
    let mut series = Vec::with_capacity(days);
    let mut previous = baseline;
    for day in 0..days {
        let weekly = 0.000004 * (day as f64 * 2.0 * std::f64::consts::PI / 7.0).sin();
        let noise = rng.gauss(0.0, 0.000002);
        let value = (0.5 * previous + 0.5 * (baseline + weekly) + noise).max(0.0);
        series.push(value);
        previous = value;
    }
    series
}

fn main() {
    let mut rng = SimpleRng::new(42);
    let series = generate_series(120, &mut rng);

    // Lag rows in expected column order: [lag_3, lag_2, lag_1] → target.
    let mut rows: Vec<[f64; LAG_COUNT]> = Vec::new();
    let mut targets: Vec<f64> = Vec::new();
    for t in LAG_COUNT..series.len() {
        rows.push([series[t - 3], series[t - 2], series[t - 1]]);
        targets.push(series[t]);
    }

    // Fit the standard scaler on the raw rows.
    let n = rows.len() as f64;
    let mut mean = [0.0; LAG_COUNT];
    for row in &rows {
        for (m, v) in mean.iter_mut().zip(row) {
            *m += v / n;
        }
    }
    let mut scale = [0.0; LAG_COUNT];
    for row in &rows {
        for ((s, v), m) in scale.iter_mut().zip(row).zip(mean) {
            *s += (v - m) * (v - m) / n;
        }
    }
    for s in &mut scale {
        *s = s.sqrt().max(1e-12);
    }

    // Store the training points already standardized.
    let points: Vec<Vec<f64>> = rows
        .iter()
        .map(|row| {
            row.iter()
                .zip(mean.iter().zip(&scale))
                .map(|(v, (m, s))| (v - m) / s)
                .collect()
        })
        .collect();

    let feature_names: Vec<String> = EXPECTED_ORDER.iter().map(|s| s.to_string()).collect();

    let scaler = ScalerArtifact {
        feature_names: feature_names.clone(),
        mean: mean.to_vec(),
        scale: scale.to_vec(),
    };
    let model = KnnArtifact {
        feature_names,
        n_neighbors: 5,
        points,
        targets,
    };

    scaler.validate().expect("generated scaler must validate");
    model.validate().expect("generated model must validate");

    let scaler_json = serde_json::to_string_pretty(&scaler).expect("serialize scaler");
    std::fs::write(SCALER_PATH, scaler_json).expect("write scaler artifact");

    let model_json = serde_json::to_string_pretty(&model).expect("serialize model");
    std::fs::write(MODEL_PATH, model_json).expect("write model artifact");

    println!(
        "Wrote {} ({} points, k={}) and {}",
        MODEL_PATH,
        model.points.len(),
        model.n_neighbors,
        SCALER_PATH
    );
}
