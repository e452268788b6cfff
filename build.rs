#[path = "shared/lib.rs"]
mod shared;
use shared::constants::{COMPRESSED_ORGANIZATION_FILE_NAME, ORGANIZATION_CSV_FILE_PATH};

use flate2::write::GzEncoder;
use flate2::Compression;
use std::env;
use std::fs::File;
use std::io::{self};
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Ensure that Cargo re-runs the build script if the input file changes
    println!(
        "cargo:rerun-if-changed={}",
        ORGANIZATION_CSV_FILE_PATH.display()
    );

    // Generated artifacts go to Cargo's output directory and are picked up with `include_bytes!`
    let output_path = PathBuf::from(env::var("OUT_DIR")?).join(COMPRESSED_ORGANIZATION_FILE_NAME);

    let mut input_file = File::open(&*ORGANIZATION_CSV_FILE_PATH)?;
    let output_file = File::create(&output_path)?;

    let mut encoder = GzEncoder::new(output_file, Compression::best());
    io::copy(&mut input_file, &mut encoder)?;
    encoder.finish()?;

    Ok(())
}
