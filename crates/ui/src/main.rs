#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use env_logger::{Env, Target};
    use folio_core::{FolioConfig, Portfolio};

    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let mut route = "/".to_string();
    let mut config = FolioConfig::default();
    while let Some(arg) = args.next() {
        if arg == "--config" {
            let path = args.next().context("--config needs a path")?;
            let data = std::fs::read(&path).with_context(|| format!("cannot read config {path}"))?;
            config = FolioConfig::from_json(&data)
                .inspect_err(|e| log::warn!("rejected config: {e}"))?;
        } else {
            route = arg;
        }
    }

    let portfolio = Portfolio::new(config)?;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Portfolio")
            .with_inner_size([1200.0, 800.0]),
        ..Default::default()
    };
    eframe::run_native(
        "folio",
        options,
        Box::new(move |cc| Ok(Box::new(folio_ui::FolioApp::new(cc, portfolio, &route)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe: {e}"))
}

#[cfg(target_arch = "wasm32")]
fn main() {}
