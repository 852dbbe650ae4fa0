use anyhow::{Context, Result};
use ouitag::{run, Config};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .init();
    info!("startup");

    // ─── 2) fixed paths ──────────────────────────────────────────────
    let config = Config::default();
    info!(?config, "config");

    // ─── 3) load registry + annotate ─────────────────────────────────
    let stats = run(&config).with_context(|| {
        format!(
            "annotating {} with {}",
            config.input_path.display(),
            config.registry_path.display()
        )
    })?;

    info!(
        rows = stats.rows,
        output = %config.output_path.display(),
        "all done"
    );
    Ok(())
}
