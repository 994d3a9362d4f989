// seedcraft sample --seed 0xa1b2c3d4e5f6 --kind integer --min 1 --max 6 --count 10

use std::error::Error;
use std::fs;

use clap::{Args, Parser, Subcommand, ValueEnum};
use seedcraft_core::{generate_test_token, HeadlessCanvas, Sketch, SketchConfig};

#[derive(Parser)]
#[command(name = "seedcraft", about = "Deterministic sampling for generative art")]
struct Options {
    #[command(subcommand)]
    subcmd: SubCommand,
}

#[derive(Subcommand)]
enum SubCommand {
    /// Print a random test token (hash and token id) as JSON
    ///
    /// Uses real randomness; the output is for trying sketches only.
    Token(Token),
    /// Draw values from a seeded generator
    Sample(Sample),
    /// Map normalized coordinates onto a canvas
    Scale(Scale),
}

#[derive(Args)]
struct Token {
    /// Project number the token id is derived from
    project: u64,
}

#[derive(Clone, Copy, ValueEnum)]
enum Kind {
    Uniform,
    Integer,
    Boolean,
    Pick,
}

#[derive(Args)]
struct Sample {
    /// Seed material, e.g. a 0x-prefixed token hash
    #[arg(long, required_unless_present = "config")]
    seed: Option<String>,
    /// JSON sketch config; its seed is used when --seed is absent
    #[arg(long)]
    config: Option<String>,
    #[arg(long, value_enum, default_value = "uniform")]
    kind: Kind,
    #[arg(long, default_value_t = 1)]
    count: usize,
    #[arg(long, allow_hyphen_values = true)]
    min: Option<f64>,
    #[arg(long, allow_hyphen_values = true)]
    max: Option<f64>,
    /// Threshold for --kind boolean (defaults to the config's, else 0.5)
    #[arg(long)]
    threshold: Option<f64>,
    /// Comma separated options for --kind pick
    #[arg(long, value_delimiter = ',')]
    options: Vec<String>,
    /// Never repeat the previous pick
    #[arg(long)]
    different: bool,
}

#[derive(Args)]
struct Scale {
    #[arg(long)]
    width: Option<f64>,
    #[arg(long)]
    height: Option<f64>,
    /// Normalized values to translate
    #[arg(allow_hyphen_values = true)]
    values: Vec<f64>,
}

fn load_sketch(sample: &Sample) -> Result<Sketch, Box<dyn Error>> {
    let mut config = match &sample.config {
        Some(path) => SketchConfig::from_json(&fs::read_to_string(path)?)?,
        None => SketchConfig::new(String::new()),
    };
    if let Some(seed) = &sample.seed {
        config.seed = seed.clone();
    }
    let mut canvas = HeadlessCanvas::default();
    Ok(Sketch::from_config(&config, &mut canvas)?)
}

/// Integer bound from a numeric flag; fractional or non-finite values are rejected
fn whole_number(flag: &str, value: Option<f64>, default: i64) -> Result<i64, String> {
    let Some(value) = value else {
        return Ok(default);
    };
    // i64::MIN is exactly representable, i64::MAX rounds up to 2^63
    let in_range = value >= i64::MIN as f64 && value < i64::MAX as f64;
    if !value.is_finite() || value.fract() != 0.0 || !in_range {
        return Err(format!("{} must be a whole number for --kind integer, got {}", flag, value));
    }
    Ok(value as i64)
}

fn sample(sample: Sample) -> Result<(), Box<dyn Error>> {
    let mut sketch = load_sketch(&sample)?;
    log::debug!("sampling {} values", sample.count);

    let values: Vec<serde_json::Value> = match sample.kind {
        Kind::Uniform => {
            let min = sample.min.unwrap_or(0.0);
            let max = sample.max.unwrap_or(1.0);
            (0..sample.count)
                .map(|_| sketch.uniform_in(min, max).map(serde_json::Value::from))
                .collect::<Result<_, _>>()?
        }
        Kind::Integer => {
            let min = whole_number("--min", sample.min, 0)?;
            let max = whole_number("--max", sample.max, 1)?;
            sketch
                .integers(sample.count, min, max)?
                .into_iter()
                .map(serde_json::Value::from)
                .collect()
        }
        Kind::Boolean => (0..sample.count)
            .map(|_| match sample.threshold {
                Some(threshold) => sketch.boolean(threshold),
                None => sketch.coin(),
            })
            .map(|b| b.map(serde_json::Value::from))
            .collect::<Result<_, _>>()?,
        Kind::Pick => {
            let mut picks = Vec::with_capacity(sample.count);
            for _ in 0..sample.count {
                let picked = if sample.different {
                    sketch.pick_different(&sample.options)?.cloned()
                } else {
                    Some(sketch.pick(&sample.options)?.clone())
                };
                picks.push(serde_json::Value::from(picked));
            }
            picks
        }
    };

    println!("{}", serde_json::to_string(&values)?);
    Ok(())
}

fn scale(scale: Scale) -> Result<(), Box<dyn Error>> {
    let mut sketch: Sketch = Sketch::new();
    let mut canvas = HeadlessCanvas::default();
    sketch.create_canvas(scale.width, scale.height, &mut canvas);
    if let Some((width, height)) = canvas.size {
        log::info!("canvas {}x{}", width, height);
    }

    let scaled = scale
        .values
        .iter()
        .map(|x| sketch.scale(*x))
        .collect::<Result<Vec<_>, _>>()?;
    println!("{}", serde_json::to_string(&scaled)?);
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let options = Options::parse();
    match options.subcmd {
        SubCommand::Token(token) => {
            let token = generate_test_token(token.project);
            println!("{}", serde_json::to_string_pretty(&token)?);
            Ok(())
        }
        SubCommand::Sample(args) => sample(args),
        SubCommand::Scale(args) => scale(args),
    }
}
