use super::{Engine, Source};

use async_trait::async_trait;

use crate::{
    api::SearchAPI,
    engine::{filter, live},
    entities::{CategoryFilter, Place, SearchOutcome, SearchState},
};

#[async_trait]
impl SearchAPI for Engine {
    fn accepts(&self, query: &str) -> bool {
        match &self.source {
            Source::Catalog(_) => true,
            Source::Live(_) => query.trim().chars().count() >= self.config.min_query_len.max(1),
        }
    }

    fn initial_places(&self) -> Vec<Place> {
        match &self.source {
            Source::Catalog(catalog) => catalog.places().to_vec(),
            Source::Live(_) => vec![],
        }
    }

    #[tracing::instrument(skip(self))]
    async fn search(&self, query: String, category: CategoryFilter) -> SearchOutcome {
        match &self.source {
            Source::Catalog(catalog) => {
                let results = filter::filter(catalog.places(), &query, &category);

                tracing::info!("{} of {} places match", results.len(), catalog.len());

                SearchOutcome {
                    state: SearchState {
                        query,
                        category,
                        results,
                    },
                    resolved: None,
                }
            }
            Source::Live(gateway) => live::search(gateway.as_ref(), &self.config, &query, &category).await,
        }
    }
}
