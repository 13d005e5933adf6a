//! Command-line driver generating the four fixture tables.
//!
//! Usage:
//!   cargo run -- --seed 1234 --out-dir data
//!
//! Each table draws from its own generator, derived by hashing the
//! table name together with the global seed, so the tables can be
//! regenerated independently without disturbing one another.

use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use synth_admin::{ae, ltc, make_rng, pis, smr04, table};

#[derive(Parser)]
#[command(
    name = "synth_admin",
    about = "Generate synthetic administrative healthcare datasets"
)]
struct Args {
    /// Global seed fixing every draw across all four tables.
    #[arg(long, default_value_t = 1234)]
    seed: u64,

    /// Directory the csv files are written into.
    #[arg(long, default_value = "data")]
    out_dir: PathBuf,

    /// Rows in the prescribing and attendance tables.
    #[arg(long, default_value_t = 100)]
    nrows: usize,

    /// Identifiers are drawn from 0..max_id.
    #[arg(long, default_value_t = 20)]
    max_id: u32,

    /// Hospital stays in the inpatient table (each contributes one or
    /// more episode rows).
    #[arg(long, default_value_t = 100)]
    nstays: usize,

    /// Earliest date any event can fall on.
    #[arg(long, default_value = "2015-01-01")]
    start_date: NaiveDate,

    /// Latest date any event can fall on.
    #[arg(long, default_value = "2017-12-31")]
    end_date: NaiveDate,
}

fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    let args = Args::parse();

    let bnf_sections: Vec<String> = (101..120).map(|section| format!("{section:04}")).collect();
    let diagnosis_codes: Vec<u32> = (0..20).chain([99]).collect();
    // https://publichealthscotland.scot/services/national-data-catalogue/data-dictionary/a-to-z-of-data-dictionary-terms/attendance-category-ae/
    let attendance_categories = ["01", "02", "03", "04", "05"];

    fs::create_dir_all(&args.out_dir)?;

    let mut rng = make_rng(args.seed, "pis");
    let pis_data = pis::make_pis_data(
        &mut rng,
        args.max_id,
        args.nrows,
        args.start_date,
        args.end_date,
        &bnf_sections,
    )?;
    let path = args.out_dir.join("random_pis_data.csv");
    table::write_csv(&path, &pis::PisRecord::HEADERS, &pis_data)?;
    info!(rows = pis_data.len(), "wrote {}", path.display());

    let mut rng = make_rng(args.seed, "ae");
    let ae_data = ae::make_ae_data(
        &mut rng,
        args.max_id,
        args.nrows,
        args.start_date,
        args.end_date,
        &diagnosis_codes,
        &attendance_categories,
    )?;
    let path = args.out_dir.join("random_ae_data.csv");
    table::write_csv(&path, &ae::AeRecord::HEADERS, &ae_data)?;
    info!(rows = ae_data.len(), "wrote {}", path.display());

    let mut rng = make_rng(args.seed, "smr04");
    let stay_params = smr04::StayParams {
        max_id: args.max_id,
        start_date: args.start_date,
        end_date: args.end_date,
        nstays: args.nstays,
        admission_types: &smr04::ADMISSION_TYPES,
        specialties: &smr04::SPECIALTIES,
    };
    let smr04_data = smr04::make_smr04_data(&mut rng, &stay_params)?;
    let path = args.out_dir.join("random_smr04_data.csv");
    table::write_csv(&path, &smr04::Episode::HEADERS, &smr04_data)?;
    info!(rows = smr04_data.len(), "wrote {}", path.display());

    let mut rng = make_rng(args.seed, "ltc");
    let ltc_data = ltc::make_ltc_data(&mut rng, args.max_id, args.start_date, args.end_date)?;
    let path = args.out_dir.join("random_ltc_data.csv");
    table::write_csv(&path, &ltc::LtcRecord::HEADERS, &ltc_data)?;
    info!(rows = ltc_data.len(), "wrote {}", path.display());

    Ok(())
}
