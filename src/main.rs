// User Intake - CLI
// `seed` fills the store with synthetic records; `export [path]` writes the
// stored records to CSV.

use anyhow::Result;
use std::env;
use std::path::Path;

use user_intake::{
    export_csv, generate_batch, Config, RecordStore, DEFAULT_EXPORT_FILE, SEED_BATCH_SIZE,
};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(String::as_str) {
        Some("seed") => run_seed()?,
        Some("export") => run_export(args.get(2).map(String::as_str))?,
        _ => {
            eprintln!("Usage: user-intake <seed | export [path]>");
            eprintln!("  seed           Insert {} random records", SEED_BATCH_SIZE);
            eprintln!("  export [path]  Write all records to CSV (default {})", DEFAULT_EXPORT_FILE);
            std::process::exit(1);
        }
    }

    Ok(())
}

fn run_seed() -> Result<()> {
    println!("🌱 Seeding {} random records", SEED_BATCH_SIZE);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let config = Config::from_env()?;
    let mut store = RecordStore::open(&config.db_path)?;
    println!("✓ Store opened: {:?}", config.db_path);

    let batch = generate_batch(SEED_BATCH_SIZE);
    store.insert_many(&batch)?;
    println!("✓ Inserted {} records", batch.len());

    let count = store.count()?;
    println!("✓ Store now contains {} records", count);

    Ok(())
}

fn run_export(path: Option<&str>) -> Result<()> {
    println!("📄 Exporting records to CSV");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let config = Config::from_env()?;
    let store = RecordStore::open(&config.db_path)?;

    let records = store.find_all()?;
    println!("✓ Loaded {} records", records.len());

    let written = export_csv(&records, path.map(Path::new))?;
    println!("✓ Wrote {:?}", written);

    Ok(())
}
