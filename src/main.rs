use bizedge::{util, App, AppConfig};
use tracing::info;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let config = AppConfig::from_env()?;
    let log_path = util::log::init(&config.log_dir, config.debug)?;
    info!(log = %log_path.display(), backend = ?config.backend_url, "starting BizEdge");

    let app = App::new(&config)?;
    let terminal = ratatui::init();
    let result = app.run(terminal).await;
    ratatui::restore();
    result
}
