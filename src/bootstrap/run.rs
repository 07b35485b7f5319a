use anyhow::{Context, Result};
use cr_app::{AppPaths, EngineRuntime};
use cr_core::ports::AppDirsPort;
use cr_platform::DirsAppDirsAdapter;
use tracing::{error, info};

use super::{load_settings, wire_engine};
use crate::console::Console;

/// Run ClipRing until the console quits or Ctrl-C is pressed.
pub fn run_app() -> Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to build tokio runtime")?;

    runtime.block_on(run())
}

async fn run() -> Result<()> {
    let app_dirs = DirsAppDirsAdapter::new().get_app_dirs()?;
    let paths = AppPaths::from_app_dirs(&app_dirs);
    info!(data_dir = %app_dirs.app_data_root.display(), "Starting ClipRing");

    let wired = wire_engine(&paths)?;
    let settings = load_settings(wired.settings_repo.as_ref()).await;

    let (engine, handle) = EngineRuntime::new(wired.deps, settings, wired.task_rx);
    let engine_task = tokio::spawn(engine.run());

    let console = Console::new(handle.clone(), wired.notifications);
    tokio::select! {
        result = console.run() => {
            if let Err(err) = result {
                error!(error = %err, "Console stopped with an error");
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Ctrl-C received");
        }
    }

    // The runtime may already be gone if every handle was dropped.
    let _ = handle.shutdown().await;
    drop(handle);
    engine_task.await.context("engine runtime task failed")?;

    info!("ClipRing stopped");
    Ok(())
}
