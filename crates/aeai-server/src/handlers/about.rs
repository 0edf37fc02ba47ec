//! About page handler: CMS singleton merged field-by-field with fallbacks.

use aeai_content::{pages, team};
use aeai_core::model::{SectionCopy, Stat};
use axum::extract::State;
use maud::Markup;

use super::singleton_or_none;
use crate::state::AppState;

/// `GET /about`
pub async fn index(State(state): State<AppState>) -> Markup {
    let page = singleton_or_none(state.cms.about_page().await, "about-page");

    let mut hero = pages::about_hero();
    let mut story = pages::about_story();
    let mut mission = pages::about_mission();
    let mut approach = pages::about_approach();
    let mut stats: Vec<Stat> = pages::about_stats();

    if let Some(page) = page {
        if let Some(record) = page.hero {
            hero = record.merge_into(hero);
        }
        story = merge_section(story, page.story_title, page.story_content);
        mission = merge_section(mission, page.mission_title, page.mission_content);
        approach = merge_section(approach, page.approach_title, page.approach_content);
        if !page.stats.is_empty() {
            stats = page.stats.into_iter().map(|s| s.into_stat()).collect();
        }
    }

    let members = team::team_members();
    aeai_views::pages::about(&hero, &members, &stats, &story, &mission, &approach)
}

/// Per-field merge: CMS values win only when non-empty.
fn merge_section(
    fallback: SectionCopy,
    title: Option<String>,
    content: Option<String>,
) -> SectionCopy {
    SectionCopy {
        title: title.filter(|t| !t.is_empty()).unwrap_or(fallback.title),
        content: content.filter(|c| !c.is_empty()).unwrap_or(fallback.content),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_section_prefers_cms_fields() {
        let merged = merge_section(
            SectionCopy::new("Fallback Title", "Fallback content"),
            Some("CMS Title".into()),
            None,
        );
        assert_eq!(merged.title, "CMS Title");
        assert_eq!(merged.content, "Fallback content");
    }

    #[test]
    fn test_merge_section_ignores_empty_strings() {
        let merged = merge_section(
            SectionCopy::new("Fallback Title", "Fallback content"),
            Some(String::new()),
            Some(String::new()),
        );
        assert_eq!(merged.title, "Fallback Title");
        assert_eq!(merged.content, "Fallback content");
    }
}
