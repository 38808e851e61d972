//! Native desktop client for the posture backend - entry point.

use eframe::egui;
use tracing::info;
use tracing_subscriber::EnvFilter;
use posturedesk::app::{views, AppState, Config};

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("invalid configuration: {}", e);
            std::process::exit(1);
        }
    };
    info!(server_url = config.server_url(), "starting posture desk");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 760.0])
            .with_min_inner_size([720.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        "PostureDesk",
        options,
        Box::new(|_cc| Ok(Box::new(PostureApp::new(config)))),
    )
}

struct PostureApp {
    state: AppState,
}

impl PostureApp {
    fn new(config: Config) -> Self {
        Self {
            state: AppState::new(config),
        }
    }
}

impl eframe::App for PostureApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.poll_results();

        views::render_top_bar(ctx, &mut self.state);
        views::render_main_panel(ctx, &mut self.state);

        // Worker threads finish between frames; keep polling
        ctx.request_repaint();
    }
}
