use crate::{errors::Error, Result};

/// Initialize diagnostic tracing for the check.
///
/// Events go to stderr so they never interleave with the report on stdout.
/// Default is quiet (`warn`); override with `RUST_LOG`.
pub fn init(service_name: &str) -> Result<()> {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warn,tgcheck_core=warn,tgcheck_telegram=warn,{}=warn",
            service_name.replace('-', "_")
        ))
    });

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| Error::External(format!("tracing init failed: {e}")))?;

    Ok(())
}
