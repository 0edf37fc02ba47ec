//! Home page handler. Entirely static content.

use aeai_content::{datasets, industries, insights, pages, services};
use maud::Markup;

/// `GET /`
pub async fn index() -> Markup {
    let hero = pages::home_hero();
    let services = services::services();
    let datasets = datasets::datasets();
    let industries = industries::industries();
    let insights: Vec<_> = insights::insights().into_iter().take(3).collect();

    aeai_views::pages::home(&hero, &services, &datasets, &industries, &insights)
}
