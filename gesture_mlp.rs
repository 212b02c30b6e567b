use adaptive_mlp::config::{load_config, NetworkConfig};
use adaptive_mlp::persistence::save_parameters;
use adaptive_mlp::recognition::ThresholdRecognizer;
use adaptive_mlp::utils::scaling::{normalize_readings, one_hot};
use adaptive_mlp::utils::SimpleRng;
use adaptive_mlp::{Network, NetworkError, Sample};
use log::{error, info};
use std::env;
use std::process;

// Two-gesture demo on simulated MPU6050 frames (ax, ay, az, gx, gy, gz).
const DEFAULT_CONFIG: &str = "config/gesture.json";
const SAMPLES_PER_GESTURE: usize = 20;
const HELD_OUT_PER_GESTURE: usize = 10;
const RECOGNITION_THRESHOLD: f64 = 0.5;
// Raw-count noise added to every channel.
const NOISE: f64 = 2000.0;
const GESTURES: [(&str, [f64; 6]); 2] = [
    ("right", [30000.0, 28000.0, 29000.0, -28000.0, -29000.0, -30000.0]),
    ("left", [-29000.0, -30000.0, -28000.0, 28000.0, 30000.0, 29000.0]),
];

// One noisy frame in raw sensor counts.
fn sample_frame(centroid: &[f64; 6], rng: &mut SimpleRng) -> Vec<i16> {
    centroid
        .iter()
        .map(|&c| (c + rng.gen_range_f64(-NOISE, NOISE)) as i16)
        .collect()
}

// Network input for one frame, scaled to [-1, 1).
fn sample_features(centroid: &[f64; 6], rng: &mut SimpleRng) -> Vec<f64> {
    normalize_readings(&sample_frame(centroid, rng))
}

// Gestures interleaved so neither class dominates the end of an epoch.
fn collect_dataset(rng: &mut SimpleRng) -> Result<Vec<Sample>, NetworkError> {
    let mut dataset = Vec::with_capacity(SAMPLES_PER_GESTURE * GESTURES.len());
    for _ in 0..SAMPLES_PER_GESTURE {
        for (class, (_, centroid)) in GESTURES.iter().enumerate() {
            let target = one_hot(class, GESTURES.len())?;
            dataset.push(Sample::new(sample_features(centroid, rng), target));
        }
    }
    Ok(dataset)
}

// Returns (correct predictions, frames below every threshold).
fn evaluate(
    network: &Network,
    recognizer: &ThresholdRecognizer,
    rng: &mut SimpleRng,
) -> Result<(usize, usize), NetworkError> {
    let mut correct = 0;
    let mut unknown = 0;
    for _ in 0..HELD_OUT_PER_GESTURE {
        for (class, (name, centroid)) in GESTURES.iter().enumerate() {
            let features = sample_features(centroid, rng);
            let predicted = network.predict(&features)?;
            if predicted == class {
                correct += 1;
            }
            if recognizer.recognize_features(network, &features)?.is_none() {
                unknown += 1;
            }
            info!("Gesture {:>5}: predicted {}", name, GESTURES[predicted].0);
        }
    }
    Ok((correct, unknown))
}

fn check_shape(config: &NetworkConfig) -> Result<(), NetworkError> {
    if config.input_size != 6 || config.output_size != GESTURES.len() {
        return Err(NetworkError::InvalidConfig(format!(
            "gesture demo needs input_size 6 and output_size {}, got {} and {}",
            GESTURES.len(),
            config.input_size,
            config.output_size
        )));
    }
    Ok(())
}

fn run() -> Result<(), NetworkError> {
    let args: Vec<String> = env::args().collect();
    let config_path = args.get(1).map(String::as_str).unwrap_or(DEFAULT_CONFIG);
    let config = load_config(config_path)?;
    check_shape(&config)?;
    info!("Loaded config from {}", config_path);

    let mut network = Network::from_config(&config)?;
    let mut data_rng = SimpleRng::new(config.seed.wrapping_add(1));
    let dataset = collect_dataset(&mut data_rng)?;
    network.train(&dataset, config.epochs)?;

    let recognizer = ThresholdRecognizer::uniform(RECOGNITION_THRESHOLD, GESTURES.len());
    let (correct, unknown) = evaluate(&network, &recognizer, &mut data_rng)?;

    let total = HELD_OUT_PER_GESTURE * GESTURES.len();
    println!(
        "Held-out accuracy: {}/{} ({:.1}%), below threshold: {}",
        correct,
        total,
        100.0 * correct as f64 / total as f64,
        unknown
    );

    if let Some(output_path) = args.get(2) {
        save_parameters(&network, output_path)?;
        println!("Parameters written to {}", output_path);
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        error!("{}", e);
        process::exit(1);
    }
}
