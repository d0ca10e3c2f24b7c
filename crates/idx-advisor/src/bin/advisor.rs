//! IDX Stock Advisor CLI
//!
//! An interactive prompt: type a ticker, get the trade plan and headlines.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin advisor -p idx-advisor
//! ```

use idx_advisor::{AdvisorConfig, AdvisorEngine, CliFormatter};
use std::env;
use std::io::{self, BufRead, Write};

fn print_banner() {
    println!(
        r#"
╔══════════════════════════════════════════════════════╗
║              IDX Stock Advisor                       ║
║                                                      ║
║  Masukkan kode saham (contoh: BBNI, BBCA, TLKM)      ║
║  lalu tekan Enter untuk analisa.                     ║
║                                                      ║
║  exit / quit untuk keluar.                           ║
╚══════════════════════════════════════════════════════╝
"#
    );
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            env::var("RUST_LOG").unwrap_or_else(|_| "warn,idx_advisor=info".to_string()),
        )
        .init();

    print_banner();

    let engine = AdvisorEngine::new(AdvisorConfig::default())?;
    let formatter = CliFormatter;

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("saham> ");
        stdout.flush()?;

        let mut input = String::new();
        match stdin.lock().read_line(&mut input) {
            Ok(0) => {
                // EOF
                println!("\nSampai jumpa!");
                break;
            }
            Ok(_) => {}
            Err(e) => {
                eprintln!("Error reading input: {e}");
                continue;
            }
        }

        let input = input.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
            println!("Sampai jumpa!");
            break;
        }

        match engine.analyze(input).await {
            Ok(report) => {
                println!("\n{}", formatter.format_report(&report));
            }
            Err(e) => {
                println!("{}\n", formatter.format_error(&e.to_string()));
            }
        }
    }

    Ok(())
}
