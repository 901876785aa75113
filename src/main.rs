use crypto_liquidity::application::controller::WorkflowController;
use crypto_liquidity::config::{Config, Mode};
use crypto_liquidity::infrastructure::ServiceFactory;
use crypto_liquidity::interfaces::ui::PredictionApp;
use std::sync::Arc;

use anyhow::Context;
use tracing::{Level, info};
use tracing_subscriber::prelude::*;

fn main() -> anyhow::Result<()> {
    // 0. Load Env (before starting anything)
    dotenvy::dotenv().ok();

    // 1. Setup Logging
    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .init();

    info!("Starting Crypto Liquidity Predictor...");

    // 2. Load Config
    let config = Config::from_env().context("Failed to load config")?;
    let endpoint_label = match config.mode {
        Mode::Live => format!("API: {}", config.api_base_url),
        Mode::Mock => "API: offline mock".to_string(),
    };

    // 3. Create Tokio Runtime in a background thread
    let (handle_tx, handle_rx) = crossbeam_channel::bounded(1);

    std::thread::spawn(move || {
        let rt = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
        {
            Ok(rt) => rt,
            Err(e) => {
                tracing::error!("Failed to build Tokio runtime: {}", e);
                return;
            }
        };

        let _ = handle_tx.send(rt.handle().clone());
        info!("Background Runtime Started.");

        // The runtime must outlive every spawned request.
        rt.block_on(std::future::pending::<()>());
    });

    let runtime = handle_rx
        .recv()
        .context("Background runtime failed to start")?;

    // 4. Wire services
    let (directory, prediction) = ServiceFactory::create_services(&config);

    // 5. Run UI (Blocks Main Thread)
    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([960.0, 760.0])
            .with_title("Crypto Liquidity Predictor"),
        ..Default::default()
    };

    eframe::run_native(
        "Crypto Liquidity Predictor",
        native_options,
        Box::new(move |cc| {
            let repaint_ctx = cc.egui_ctx.clone();
            let controller = WorkflowController::new(directory, prediction, runtime)
                .with_notifier(Arc::new(move || repaint_ctx.request_repaint()));
            Ok(Box::new(PredictionApp::new(controller, endpoint_label)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Eframe error: {}", e))?;

    Ok(())
}
