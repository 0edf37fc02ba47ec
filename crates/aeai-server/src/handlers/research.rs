//! Research handlers: papers collection with fallback.

use aeai_cms::records::PaperRecord;
use aeai_content::papers;
use axum::extract::{Path, State};
use maud::Markup;

use super::{collection_or, detail_or};
use crate::state::AppState;

/// `GET /research`
pub async fn index(State(state): State<AppState>) -> Markup {
    let listings = collection_or(
        state.cms.papers().await,
        PaperRecord::into_paper,
        papers::papers,
        "papers",
    );
    aeai_views::pages::research_index(&listings)
}

/// `GET /research/{slug}`
pub async fn detail(State(state): State<AppState>, Path(slug): Path<String>) -> Markup {
    let paper = detail_or(
        state.cms.paper_by_slug(&slug).await,
        PaperRecord::into_detail,
        || papers::paper_detail(&slug),
        "paper",
    );
    aeai_views::pages::paper_detail(&paper)
}
