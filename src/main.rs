use std::sync::Arc;

use async_channel::Sender;
use tokio::io::{AsyncBufReadExt, BufReader};

use placefinder::api::{DynAPI, ResultsView};
use placefinder::app::{App, UiEvent};
use placefinder::catalog::Catalog;
use placefinder::config::{Config, Mode};
use placefinder::engine::Engine;
use placefinder::entities::CategoryFilter;
use placefinder::error::Error;
use placefinder::external::google_maps::GoogleMaps;
use placefinder::headless::{parse_command, ConsoleView, HeadlessMap};
use placefinder::synchronizer::MarkerSynchronizer;

fn build_api(config: &Config) -> Result<DynAPI, Error> {
    let engine = match config.mode {
        Mode::Static => {
            let catalog = match &config.catalog_path {
                Some(path) => Catalog::from_json_file(path)?,
                None => Catalog::sample(),
            };
            Engine::with_catalog(catalog, config.clone())
        }
        Mode::Live => {
            let key = config.require_api_key()?;
            let gateway = GoogleMaps::new(&config.api_base, key);
            Engine::with_gateway(Arc::new(gateway), config.clone())
        }
    };

    Ok(Arc::new(engine))
}

async fn read_commands(sender: Sender<UiEvent>) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut category = CategoryFilter::All;

    while let Ok(Some(line)) = lines.next_line().await {
        let event = match parse_command(&line, &mut category) {
            Some(event) => event,
            None => {
                tracing::warn!("unrecognized input: {}", line);
                continue;
            }
        };

        if sender.send(event).await.is_err() {
            break;
        }
    }

    sender.send(UiEvent::Shutdown).await.ok();
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let mut view = ConsoleView::default();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            view.show_error(&err.to_string());
            std::process::exit(1);
        }
    };

    let api = match build_api(&config) {
        Ok(api) => api,
        Err(err) => {
            view.show_error(&err.to_string());
            std::process::exit(1);
        }
    };

    let map = match HeadlessMap::create(config.default_center, config.default_zoom) {
        Ok(map) => map,
        Err(err) => {
            view.show_error(&err.to_string());
            std::process::exit(1);
        }
    };
    let synchronizer = MarkerSynchronizer::new(map, &config);

    let (sender, receiver) = async_channel::unbounded();
    let app = App::new(api, synchronizer, view, &config, sender.clone());

    tokio::spawn(read_commands(sender));

    tracing::info!("ready, mode {:?}", config.mode);

    app.run(receiver).await;
}
