//! Check VAT numbers against VIES.
//!
//! ```text
//! cargo run --example vat_check -- NL123456789B01 DE811907980
//! RUST_LOG=vies=debug cargo run --example vat_check -- --live NL810060255B01
//! ```
//!
//! Uses the VIES test endpoint unless `--live` is passed.

use tracing_subscriber::EnvFilter;
use vies::*;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let mut numbers: Vec<String> = std::env::args().skip(1).collect();
    let live = numbers.first().is_some_and(|a| a == "--live");
    if live {
        numbers.remove(0);
    }

    let config = if live {
        ServiceConfig::production()
    } else {
        ServiceConfig::test()
    };
    let svc = match Service::from_config(config) {
        Ok(svc) => svc,
        Err(e) => {
            eprintln!("cannot build VIES client: {e}");
            std::process::exit(1);
        }
    };
    println!("=== VIES check against {} ===\n", svc.config().endpoint);

    if numbers.is_empty() {
        numbers = vec!["NL100".into(), "NL200".into(), "NL301".into(), "XX123".into()];
    }

    for number in &numbers {
        match svc.check_vat(number).await {
            Ok(vat) => {
                println!("  {number} => valid={}", vat.valid);
                if let Some(name) = &vat.name {
                    println!("    name:    {name}");
                }
                if let Some(address) = &vat.address {
                    println!("    address: {}", address.replace('\n', ", "));
                }
            }
            Err(e) => match e.kind() {
                Some(kind) => println!("  {number} => {kind}"),
                None => println!("  {number} => ERROR: {e}"),
            },
        }
    }
}
