//! Converts a legacy redb store into the JSON organizer document.
//!
//! Run with: `gaveta-convert <legacy-store> <output-document>`

use std::path::Path;
use std::process;

use gaveta_core::storage::{StoreError, read_legacy_store, write_document};

fn main() -> gaveta_core::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let [input, output] = args.as_slice() else {
        eprintln!("usage: gaveta-convert <legacy-store> <output-document>");
        process::exit(1);
    };

    convert(Path::new(input), Path::new(output))
}

fn convert(input: &Path, output: &Path) -> gaveta_core::Result<()> {
    let organizer = read_legacy_store(input).map_err(StoreError::from)?;
    organizer.validate()?;
    write_document(output, &organizer).map_err(StoreError::from)?;

    let items: usize = organizer
        .drawers()
        .map(|(_, drawer)| drawer.items().len())
        .sum();
    println!(
        "converted {} cabinets with {} items into {}",
        organizer.cabinets().len(),
        items,
        output.display()
    );

    Ok(())
}
