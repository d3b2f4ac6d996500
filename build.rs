#![allow(clippy::style)]


use std::env;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// Bit width of one internal digit (must match `bigdigit::DIGIT_BITS`)
const DIGIT_BITS: f64 = 64.0;

/// Largest supported token base
const MAX_BASE: u32 = 64;

fn main() -> std::io::Result<()> {
    let outdir = match std::env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };
    let outdir_path = PathBuf::from(outdir);

    write_default_division_threshold(&outdir_path, "default_division_threshold.rs")?;
    write_radix_ratios(&outdir_path, "radix_ratios.rs")?;
    Ok(())
}

/// Create default_division_threshold.rs, containing definition of constant DEFAULT_DIVISION_THRESHOLD
fn write_default_division_threshold(outdir_path: &PathBuf, filename: &str) -> std::io::Result<()>
{

    let default_threshold = env::var("RUST_TASTYINT_DIVISION_THRESHOLD")
        .map(|s| s.parse::<std::num::NonZeroUsize>().expect("$RUST_TASTYINT_DIVISION_THRESHOLD must be an integer > 0"))
        .map(|nz_num| nz_num.into())
        .unwrap_or(96usize);

    let path = outdir_path.join(filename);

    let contents = format!("const DEFAULT_DIVISION_THRESHOLD: usize = {default_threshold};");

    write_if_changed(&path, &contents)?;

    println!("cargo:rerun-if-changed={}", path.display());
    println!("cargo:rerun-if-env-changed={}", "RUST_TASTYINT_DIVISION_THRESHOLD");

    Ok(())
}

/// Create radix_ratios.rs, containing the digits-per-token and
/// tokens-per-digit tables indexed by base
fn write_radix_ratios(outdir_path: &PathBuf, filename: &str) -> std::io::Result<()>
{
    let mut digits_per_token = Vec::with_capacity(MAX_BASE as usize + 1);
    let mut tokens_per_digit = Vec::with_capacity(MAX_BASE as usize + 1);

    for base in 0..=MAX_BASE {
        if base < 2 {
            digits_per_token.push(0.0f64);
            tokens_per_digit.push(0.0f64);
            continue;
        }
        let ratio = (base as f64).log2() / DIGIT_BITS;
        digits_per_token.push(ratio);
        tokens_per_digit.push(1.0 / ratio);
    }

    let format_table = |name: &str, table: &[f64]| {
        let entries: Vec<String> = table.iter().map(|x| format!("{:?}", x)).collect();
        format!(
            "pub(crate) static {}: [f64; {}] = [\n    {},\n];\n",
            name,
            table.len(),
            entries.join(",\n    ")
        )
    };

    let contents = format!(
        "{}\n{}",
        format_table("DIGITS_PER_TOKEN", &digits_per_token),
        format_table("TOKENS_PER_DIGIT", &tokens_per_digit),
    );

    let path = outdir_path.join(filename);
    write_if_changed(&path, &contents)?;

    println!("cargo:rerun-if-changed={}", path.display());

    Ok(())
}

// Rewriting the file if it already exists with the same contents
// would force a rebuild.
fn write_if_changed(path: &PathBuf, contents: &str) -> std::io::Result<()> {
    match std::fs::read_to_string(path) {
        Ok(existing_contents) if existing_contents == contents => {},
        _ => {
            let mut file = File::create(path)
                .expect("Could not create generated source file");
            write!(file, "{contents}")?;
        }
    };
    Ok(())
}
