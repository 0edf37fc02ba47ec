//! Data-product handlers: datasets collection with fallback.

use aeai_cms::records::DatasetRecord;
use aeai_content::{datasets, pages};
use axum::extract::{Path, State};
use maud::Markup;

use super::{collection_or, detail_or};
use crate::state::AppState;

/// `GET /data`
pub async fn index(State(state): State<AppState>) -> Markup {
    let listings = collection_or(
        state.cms.datasets().await,
        DatasetRecord::into_dataset,
        datasets::datasets,
        "datasets",
    );
    let stats = pages::data_stats();
    aeai_views::pages::data_index(&listings, &stats)
}

/// `GET /data/{slug}`
pub async fn detail(State(state): State<AppState>, Path(slug): Path<String>) -> Markup {
    let dataset = detail_or(
        state.cms.dataset_by_slug(&slug).await,
        DatasetRecord::into_detail,
        || datasets::dataset_detail(&slug),
        "dataset",
    );
    aeai_views::pages::dataset_detail(&dataset)
}
