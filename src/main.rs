//! Operation-chain demo with noise tracking and refresh statistics.

use bckks_core::{BinaryCkks, DEFAULT_REFRESH_THRESHOLD};
use csv::Writer;
use rand::Rng;
use std::error::Error;
use std::time::Instant;

fn main() -> Result<(), Box<dyn Error>> {
    let mut wtr = Writer::from_path("op_stats.csv")?;
    wtr.write_record(["index", "op", "noise", "refreshed", "time_ms"])?;

    let security = 64;
    let ring_dim = 256;
    let slots = 8;
    let max_ops = 64;

    let mut scheme = BinaryCkks::new(security, ring_dim);
    let params = *scheme.params();
    println!("Binary CKKS parameters:");
    println!(
        "lambda = {}, n = {}, h = {}, sigma = {}",
        params.lambda, params.n, params.h, params.sigma
    );
    println!("refresh threshold: {DEFAULT_REFRESH_THRESHOLD}");

    let mut active_keys = scheme.key_gen();
    let mut rng = rand::thread_rng();

    let data: Vec<u64> = (0..slots).map(|_| rng.gen_range(0..2u64)).collect();
    let mut expected = scheme.encode(&data);
    let mut cipher = scheme.encrypt(&expected, &active_keys)?;

    let start = Instant::now();
    let mut matches = 0;
    let mut refreshes = 0;

    for i in 0..max_ops {
        let bits: Vec<u64> = (0..slots).map(|_| rng.gen_range(0..2u64)).collect();
        let m = scheme.encode(&bits);
        let ct = scheme.encrypt(&m, &active_keys)?;

        let op_start = Instant::now();
        let op = if i % 4 == 3 { "mult" } else { "add" };
        cipher = if op == "mult" {
            expected = &expected * &m;
            scheme.multiply(&cipher, &ct, &active_keys)?
        } else {
            expected = &expected + &m;
            scheme.add(&cipher, &ct)?
        };

        let mut refreshed = false;
        if scheme.needs_refresh(&cipher, DEFAULT_REFRESH_THRESHOLD) {
            let next_keys = scheme.key_gen();
            cipher = scheme.refresh(&cipher, &active_keys, &next_keys)?;
            active_keys = next_keys;
            refreshed = true;
            refreshes += 1;
        }
        let elapsed_ms = op_start.elapsed().as_secs_f64() * 1000.0;

        let decoded = scheme.decode(&scheme.decrypt(&cipher, &active_keys)?, slots);
        if decoded == scheme.decode(&expected, slots) {
            matches += 1;
        }

        wtr.write_record([
            i.to_string(),
            op.to_string(),
            format!("{:.1}", cipher.noise),
            refreshed.to_string(),
            format!("{elapsed_ms:.3}"),
        ])?;
    }

    println!("\nChain completed in {:?}", start.elapsed());
    println!("operations: {max_ops} (refreshes: {refreshes})");
    println!("exact decryptions: {matches}/{max_ops}");
    println!("final noise estimate: {:.1}", cipher.noise);

    wtr.flush()?;
    Ok(())
}
