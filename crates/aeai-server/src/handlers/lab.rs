//! Lab handlers: lab-page singleton plus guides collection.

use aeai_cms::records::GuideRecord;
use aeai_content::{guides, pages};
use aeai_core::model::{CtaLink, SectionCopy};
use aeai_markup::render_guide;
use axum::extract::{Path, State};
use maud::Markup;

use super::{collection_or, detail_or, singleton_or_none};
use crate::state::AppState;

/// `GET /lab`
pub async fn index(State(state): State<AppState>) -> Markup {
    let (page_result, guides_result) = tokio::join!(state.cms.lab_page(), state.cms.guides());

    let listings = collection_or(guides_result, GuideRecord::into_guide, guides::guides, "guides");

    let mut hero = pages::lab_hero();
    let mut about = pages::lab_about();
    let (mut fellowship, mut cta_label, mut cta_url) = pages::lab_fellowship();

    if let Some(page) = singleton_or_none(page_result, "lab-page") {
        if let Some(record) = page.hero {
            hero = record.merge_into(hero);
        }
        if let Some(title) = page.about_title.filter(|t| !t.is_empty()) {
            about = SectionCopy {
                title,
                content: page
                    .about_content
                    .filter(|c| !c.is_empty())
                    .unwrap_or(about.content),
            };
        }
        if let Some(title) = page.fellowship_title.filter(|t| !t.is_empty()) {
            fellowship = SectionCopy {
                title,
                content: page
                    .fellowship_content
                    .filter(|c| !c.is_empty())
                    .unwrap_or(fellowship.content),
            };
            if let Some(cta) = page.fellowship_cta {
                if let Some(label) = cta.label.filter(|l| !l.is_empty()) {
                    cta_label = label;
                }
                if let Some(url) = cta.url.filter(|u| !u.is_empty()) {
                    cta_url = url;
                }
            }
        }
    }

    let fellowship_cta = CtaLink::new(cta_label, cta_url);
    aeai_views::pages::lab(&hero, &about, &fellowship, &fellowship_cta, &listings)
}

/// `GET /lab/guides/{slug}`
pub async fn guide(State(state): State<AppState>, Path(slug): Path<String>) -> Markup {
    let guide = detail_or(
        state.cms.guide_by_slug(&slug).await,
        GuideRecord::into_detail,
        || guides::guide_detail(&slug),
        "guide",
    );
    let body_html = render_guide(&guide.body);
    aeai_views::pages::guide_detail(&guide, &body_html)
}
