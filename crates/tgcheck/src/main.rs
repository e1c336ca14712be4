use std::process::ExitCode;

use tgcheck_core::{check::run_check, config};
use tgcheck_telegram::HttpTransport;

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(e) = tgcheck_core::logging::init("tgcheck") {
        eprintln!("{e}");
    }

    config::load_dotenv();

    match run().await {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("❌ {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<u8, tgcheck_core::Error> {
    let mut out = std::io::stdout();

    let report = run_check(config::env_lookup, HttpTransport::new, &mut out).await?;

    Ok(report.exit_code())
}
