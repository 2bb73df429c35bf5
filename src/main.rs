use clap::Parser;
use navtree::core::config::{self, ResolvedConfig};
use navtree::core::nav::Nav;
use navtree::tui;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "navtree", about = "Navigation tree with selectable, collapsible entries")]
struct Args {
    /// Config file to load instead of ~/.navtree/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Initially selected entry (overrides config and NAVTREE_SELECTED)
    #[arg(short, long)]
    selected: Option<String>,

    /// Print the rendered tree as JSON and exit
    #[arg(long)]
    dump: bool,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();

    let (config, source, load_error) = match config::load_config(args.config.as_deref()) {
        Ok((config, source)) => (config, Some(source), None),
        Err(e) => {
            eprintln!("navtree: {e}, using defaults");
            (Default::default(), None, Some(e))
        }
    };
    let resolved = config::resolve(&config, args.selected.as_deref());

    // Initialize file logger - writes to navtree.log unless configured otherwise
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    // Loading happened before the logger existed; report it now
    match (&source, &load_error) {
        (Some(source), _) => source.log(),
        (None, Some(err)) => log::warn!("Falling back to default config: {}", err),
        (None, None) => {}
    }
    log::debug!("Config: {:?}", config);
    log::info!("navtree starting with selected: {:?}", resolved.selected);

    if args.dump {
        return dump(&resolved).await;
    }

    tui::run(resolved).await
}

/// Mount, flush once, print the committed tree.
async fn dump(config: &ResolvedConfig) -> std::io::Result<()> {
    let mut nav = Nav::builder()
        .selected(config.selected.clone())
        .children(config.menu.clone())
        .mount();
    nav.tick().await;

    let json = serde_json::to_string_pretty(nav.rendered()).map_err(std::io::Error::other)?;
    println!("{json}");
    nav.unmount();
    Ok(())
}
