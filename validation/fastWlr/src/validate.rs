//! Validation of the weighted regression against JSON reference fits.
//!
//! Every `*.json` case in `data/` is fitted with the batch, streaming and
//! online adapters. The fits are written to `output/` and compared with the
//! expected values of the case. Non-finite expected values are given as the
//! strings `"inf"`, `"-inf"` and `"nan"`.

use fastWlr::prelude::*;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

const TOLERANCE: f64 = 1e-9;

#[derive(Debug, Deserialize, Serialize)]
struct ValidationData {
    name: String,
    notes: String,
    input: InputData,
    expected: ExpectedData,
    #[serde(skip_deserializing)]
    result: Vec<AdapterResult>,
}

#[derive(Debug, Deserialize, Serialize)]
struct InputData {
    x: Vec<Value>,
    y: Vec<Value>,
    y_err: Vec<Value>,
}

#[derive(Debug, Deserialize, Serialize)]
struct ExpectedData {
    slope: Value,
    intercept: Value,
    slope_err: Value,
    intercept_err: Value,
    slope_intercept_covar: Value,
}

#[derive(Debug, Serialize)]
struct AdapterResult {
    adapter: &'static str,
    slope: Value,
    intercept: Value,
    slope_err: Value,
    intercept_err: Value,
    slope_intercept_covar: Value,
    passed: bool,
}

/// A number that may be non-finite.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
#[serde(untagged)]
enum Value {
    Finite(f64),
    Special(#[serde(with = "special")] f64),
}

impl Value {
    fn get(self) -> f64 {
        match self {
            Value::Finite(v) | Value::Special(v) => v,
        }
    }

    fn from_f64(v: f64) -> Self {
        if v.is_finite() {
            Value::Finite(v)
        } else {
            Value::Special(v)
        }
    }
}

mod special {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(v: &f64, s: S) -> Result<S::Ok, S::Error> {
        let text = if v.is_nan() {
            "nan"
        } else if *v > 0.0 {
            "inf"
        } else {
            "-inf"
        };
        s.serialize_str(text)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
        match String::deserialize(d)?.as_str() {
            "nan" => Ok(f64::NAN),
            "inf" => Ok(f64::INFINITY),
            "-inf" => Ok(f64::NEG_INFINITY),
            other => Err(D::Error::custom(format!("unknown special value '{other}'"))),
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let input_dir = root.join("data");
    let output_dir = root.join("output");

    if !input_dir.exists() {
        eprintln!("Input directory {:?} does not exist.", input_dir);
        return Ok(());
    }

    fs::create_dir_all(&output_dir)?;

    let mut failures = Vec::new();
    for entry in fs::read_dir(&input_dir)? {
        let path = entry?.path();
        if path.extension().and_then(|s| s.to_str()) == Some("json") {
            println!("Processing {:?}", path.file_name().unwrap_or_default());
            if !process_file(&path, &output_dir)? {
                failures.push(path);
            }
        }
    }

    if failures.is_empty() {
        println!("All cases passed.");
        Ok(())
    } else {
        Err(format!("{} case(s) failed: {:?}", failures.len(), failures).into())
    }
}

fn process_file(input_path: &Path, output_dir: &Path) -> Result<bool, Box<dyn Error>> {
    let file = fs::File::open(input_path)?;
    let mut data: ValidationData = serde_json::from_reader(file)?;

    let x: Vec<f64> = data.input.x.iter().map(|v| v.get()).collect();
    let y: Vec<f64> = data.input.y.iter().map(|v| v.get()).collect();
    let y_err: Vec<f64> = data.input.y_err.iter().map(|v| v.get()).collect();

    let batch = Wlr::<f64>::new().adapter(Batch).build()?.fit(&x, &y, &y_err)?;

    let mut stream = Wlr::<f64>::new().chunk_size(2).adapter(Streaming).build()?;
    stream.process_chunk(&x, &y, &y_err)?;
    let streaming = stream.finalize();

    let mut online = Wlr::<f64>::new().min_points(1).adapter(Online).build()?;
    let online_fit = online
        .add_points(&x, &y, &y_err)?
        .last()
        .copied()
        .flatten()
        .map(|out| out.result)
        .unwrap_or(streaming);

    data.result = [("batch", batch), ("streaming", streaming), ("online", online_fit)]
        .into_iter()
        .map(|(adapter, r)| AdapterResult {
            adapter,
            slope: Value::from_f64(r.slope),
            intercept: Value::from_f64(r.intercept),
            slope_err: Value::from_f64(r.slope_err),
            intercept_err: Value::from_f64(r.intercept_err),
            slope_intercept_covar: Value::from_f64(r.slope_intercept_covar),
            passed: matches_expected(&r, &data.expected),
        })
        .collect();

    let passed = data.result.iter().all(|r| r.passed);
    if !passed {
        eprintln!("  {} FAILED ({})", data.name, data.notes);
    }

    let file_name = input_path.file_name().ok_or("input path has no file name")?;
    let output_json = serde_json::to_string_pretty(&data)?;
    fs::write(output_dir.join(file_name), output_json)?;

    Ok(passed)
}

fn matches_expected(r: &RegressionResult<f64>, e: &ExpectedData) -> bool {
    [
        (r.slope, e.slope),
        (r.intercept, e.intercept),
        (r.slope_err, e.slope_err),
        (r.intercept_err, e.intercept_err),
        (r.slope_intercept_covar, e.slope_intercept_covar),
    ]
    .into_iter()
    .all(|(got, want)| close(got, want.get()))
}

fn close(got: f64, want: f64) -> bool {
    if want.is_nan() {
        return got.is_nan();
    }
    if want.is_infinite() {
        return got == want;
    }
    (got - want).abs() <= TOLERANCE * want.abs().max(1.0)
}
