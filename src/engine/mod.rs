pub mod classify;
pub mod debounce;
pub mod filter;
pub mod live;
mod search_api;
pub mod sequence;

use crate::{api::DynGateway, catalog::Catalog, config::Config};

pub use debounce::DebounceTimer;
pub use sequence::RequestSequence;

enum Source {
    Catalog(Catalog),
    Live(DynGateway),
}

/// Search/filter engine over either a static catalog or a places gateway.
pub struct Engine {
    source: Source,
    config: Config,
}

impl Engine {
    #[tracing::instrument(name = "Engine::with_catalog", skip_all)]
    pub fn with_catalog(catalog: Catalog, config: Config) -> Self {
        tracing::info!("static engine with {} places", catalog.len());

        Self {
            source: Source::Catalog(catalog),
            config,
        }
    }

    #[tracing::instrument(name = "Engine::with_gateway", skip_all)]
    pub fn with_gateway(gateway: DynGateway, config: Config) -> Self {
        tracing::info!("live engine, radius {}m", config.search_radius);

        Self {
            source: Source::Live(gateway),
            config,
        }
    }
}
