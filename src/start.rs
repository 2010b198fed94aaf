#[cfg(test)]
#[path = "./start_test.rs"]
mod start_test;

use std::time::Instant;

use cfg_if::cfg_if;

use crate::def::FractalConfig;
use crate::render::{self, Frame};
use crate::viewport::{Viewport, new_viewport};

cfg_if! {
    if #[cfg(feature = "tracing")] {
        use tracing::info;
        use tracing_appender::non_blocking::WorkerGuard;

        // the guard flushes pending log lines when dropped
        fn init_logging() -> WorkerGuard {
            let (writer, guard) = tracing_appender::non_blocking(std::io::stderr());
            // an already installed global subscriber stays in place
            let _ = tracing_subscriber::fmt()
                .json()
                .with_writer(writer)
                .try_init();
            guard
        }
    } else {
        fn init_logging() {}
    }
}

pub fn fractal_start(config: FractalConfig) -> Result<(), String> {
    let _guard = init_logging();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .build()
        .map_err(|e| e.to_string())?;

    let vp = setup_viewport(&config);
    let frame = runtime.block_on(render_frame(vp, &config))?;
    render::write_ppm(&frame, &config.output)?;

    #[cfg(feature = "tracing")]
    info!(output = %config.output.display(), "image written");
    Ok(())
}

/// Replays the configured taps on a fresh viewport.
pub fn setup_viewport(config: &FractalConfig) -> Viewport {
    let mut vp = new_viewport(config.width, config.height);
    for tap in &config.taps {
        vp.apply_tap(tap);
    }
    vp
}

pub async fn render_frame(vp: Viewport, config: &FractalConfig) -> Result<Frame, String> {
    let start = Instant::now();
    let frame = render::render(vp, config.arithmetic, config.bands).await?;
    let _elapsed = start.elapsed();

    #[cfg(feature = "tracing")]
    info!(
        bailouts = frame.bailouts,
        max_iter = vp.max_iter,
        elapsed_ms = _elapsed.as_millis() as u64,
        "frame rendered"
    );
    Ok(frame)
}
