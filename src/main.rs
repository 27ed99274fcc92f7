use anyhow::Result;
use clap::Parser;
use netmon::consumer::chart::ChartConsumer;
use netmon::consumer::text::TextConsumer;
use netmon::*;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::FormatTime;

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        )
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = match cli::Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help/--version exit 0; missing/extra arguments exit 1 with usage
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_timer(LocalTimer)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = cli.into_config();
    if let Err(e) = config.validate() {
        eprintln!("{e}");
        std::process::exit(255);
    }
    if config.chart && !term::stdout_is_interactive() {
        eprintln!("plotting requires a valid terminal");
        std::process::exit(255);
    }

    let source = Arc::new(counters::SysfsCounterSource::new());
    let (tx, rx) = tokio::sync::mpsc::channel(1);

    let active: Box<dyn consumer::Consumer> = if config.chart {
        let metric = config
            .chart_metric()
            .ok_or_else(|| anyhow::anyhow!("chart mode requires one metric and one direction"))?;
        Box::new(ChartConsumer::new(term::TermSurface, metric))
    } else {
        Box::new(TextConsumer::new(config.clone()))
    };
    let consumer_handle = consumer::spawn(rx, active);

    let monitor = sampler::Sampler::new(source, &config.interface);
    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();
    let sampler_handle = sampler::spawn(monitor, config.interval_secs, tx, shutdown_rx);

    wait_for_shutdown_signal().await;
    tracing::info!("Received shutdown signal");
    let _ = shutdown_tx.send(());
    let _ = sampler_handle.await;
    let _ = consumer_handle.await;

    println!("Program terminated.");
    Ok(())
}

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        let mut sigterm =
            match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
                Ok(s) => s,
                Err(_) => {
                    let _ = tokio::signal::ctrl_c().await;
                    return;
                }
            };
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {}
            _ = sigterm.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}
