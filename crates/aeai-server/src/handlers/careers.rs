//! Careers handlers: jobs collection plus the careers-page singleton.

use aeai_cms::records::JobRecord;
use aeai_content::{jobs, pages};
use aeai_markup::{render_paragraphs, render_requirements};
use axum::extract::{Path, State};
use maud::Markup;

use super::{collection_or, detail_or, singleton_or_none};
use crate::state::AppState;

/// `GET /careers`
pub async fn index(State(state): State<AppState>) -> Markup {
    let (jobs_result, page_result) = tokio::join!(state.cms.jobs(), state.cms.careers_page());

    let listings = collection_or(jobs_result, JobRecord::into_job, jobs::jobs, "jobs");

    let mut hero = pages::careers_hero();
    if let Some(page) = singleton_or_none(page_result, "careers-page") {
        if let Some(record) = page.hero {
            hero = record.merge_into(hero);
        }
    }

    aeai_views::pages::careers_index(&hero, &listings)
}

/// `GET /careers/{slug}`
pub async fn detail(State(state): State<AppState>, Path(slug): Path<String>) -> Markup {
    let job = detail_or(
        state.cms.job_by_slug(&slug).await,
        JobRecord::into_detail,
        || jobs::job_detail(&slug),
        "job",
    );

    let description_html = render_paragraphs(&job.description);
    let requirements_html = if job.requirements.is_empty() {
        String::new()
    } else {
        render_requirements(&job.requirements)
    };

    aeai_views::pages::job_detail(&job, &description_html, &requirements_html)
}
