//! Data products index and dataset detail pages.

use aeai_core::model::{CtaLink, Dataset, DatasetDetail, Stat};
use aeai_markup::render_paragraphs;
use maud::{Markup, html};

use crate::components::{badge, content_block, cta_band, spec_tiles};
use crate::layout::shell;

/// Render the data-products index.
pub fn data_index(datasets: &[Dataset], stats: &[Stat]) -> Markup {
    let content = html! {
        section class="hero hero-split" {
            div class="container split" {
                div {
                    p class="kicker" { "Data Products" }
                    h1 { "Datasets built at a scale traditional statistics cannot reach" }
                    p class="standfirst" {
                        "Novel economic measurement from hundreds of millions of records, constructed with frontier AI and validated by domain experts."
                    }
                }
                div class="stats" {
                    @for stat in stats {
                        div class="stat" {
                            span class="stat-value" { (stat.value) }
                            span class="stat-label" { (stat.label) }
                        }
                    }
                }
            }
        }

        section class="section" {
            div class="container" {
                h2 class="section-header" { "Flagship Datasets" }
                p class="section-lede" {
                    "Each dataset is built from unconventional, large-scale sources using frontier AI. Available via licensing and subscription, with public preview datasets for researchers."
                }
                div class="card-grid" {
                    @for dataset in datasets {
                        a class="card card-link" href=(format!("/data/{}", dataset.slug)) {
                            div class="card-meta" {
                                (badge(dataset.access.label(), dataset.access.badge_class()))
                                @if let Some(freq) = &dataset.update_frequency {
                                    span class="meta" { "Updated " (freq) }
                                }
                            }
                            h3 { (dataset.title) }
                            p { (dataset.description) }
                            div class="card-foot" {
                                @if let Some(period) = &dataset.coverage_time_period {
                                    span class="meta" { (period) }
                                }
                                @if let Some(geo) = &dataset.coverage_geography {
                                    span class="meta" { (geo) }
                                }
                            }
                        }
                    }
                }
            }
        }

        (cta_band(
            "Need a custom dataset?",
            "We build bespoke structured datasets from unstructured sources. Tell us about your data challenge.",
            Some(&CtaLink::new("Get in touch", "/contact")),
            None,
            false,
        ))
    };
    shell("Data Products", content)
}

/// Render a dataset detail page.
pub fn dataset_detail(dataset: &DatasetDetail) -> Markup {
    let specs = dataset_specs(dataset);
    let content = html! {
        section class="hero hero-dark" {
            div class="container" {
                (badge(dataset.access.label(), dataset.access.badge_class()))
                h1 { (dataset.title) }
                p class="standfirst" { (dataset.description) }
                div class="cta-actions" {
                    @if dataset.is_downloadable() {
                        @if let Some(link) = &dataset.download_link {
                            a class="btn btn-primary" href=(link) { "Download Dataset" }
                        }
                    } @else {
                        a class="btn btn-primary" href="/contact" { "Request Access" }
                    }
                }
            }
        }

        @if !specs.is_empty() {
            section class="section" {
                div class="container" {
                    h2 class="section-header" { "Data Specifications" }
                    (spec_tiles(&specs))
                }
            }
        }

        @if let Some(methodology) = &dataset.methodology {
            (content_block("Methodology", &render_paragraphs(methodology)))
        }

        @if let Some(license) = &dataset.license {
            section class="section" {
                div class="container" {
                    h2 class="section-header" { "License & Terms" }
                    div class="card" { p { (license) } }
                }
            }
        }

        section class="backlink" {
            div class="container" {
                a href="/data" { "← Back to all datasets" }
            }
        }

        (cta_band(
            "Questions about this data?",
            "Our team can help you understand and work with this dataset.",
            Some(&CtaLink::new("Contact us", "/contact")),
            None,
            false,
        ))
    };
    shell(&dataset.title, content)
}

/// Specification tiles shown only for the fields that are present.
fn dataset_specs(dataset: &DatasetDetail) -> Vec<aeai_core::model::Spec> {
    use aeai_core::model::Spec;
    let mut specs = Vec::new();
    if let Some(v) = &dataset.coverage_time_period {
        specs.push(Spec::new("Time Coverage", v.clone()));
    }
    if let Some(v) = &dataset.coverage_geography {
        specs.push(Spec::new("Geographic Coverage", v.clone()));
    }
    if let Some(v) = &dataset.granularity {
        specs.push(Spec::new("Granularity", v.clone()));
    }
    if let Some(v) = &dataset.update_frequency {
        specs.push(Spec::new("Update Frequency", v.clone()));
    }
    specs
}

#[cfg(test)]
mod tests {
    use super::*;
    use aeai_core::model::AccessType;

    fn detail() -> DatasetDetail {
        DatasetDetail {
            title: "AIPNET".into(),
            description: "A production network.".into(),
            access: AccessType::Commercial,
            coverage_time_period: Some("Updated annually".into()),
            coverage_geography: None,
            granularity: Some("Product-pair level".into()),
            update_frequency: None,
            methodology: Some("Two-step build-prune.".into()),
            license: Some("Commercial license.".into()),
            download_link: None,
        }
    }

    #[test]
    fn test_dataset_specs_skip_absent_fields() {
        let specs = dataset_specs(&detail());
        let labels: Vec<&str> = specs.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["Time Coverage", "Granularity"]);
    }

    #[test]
    fn test_commercial_dataset_requests_access() {
        let page = dataset_detail(&detail()).into_string();
        assert!(page.contains("Request Access"));
        assert!(!page.contains("Download Dataset"));
    }

    #[test]
    fn test_open_dataset_with_link_downloads() {
        let mut d = detail();
        d.access = AccessType::Open;
        d.download_link = Some("https://example.org/aipnet.csv".into());
        let page = dataset_detail(&d).into_string();
        assert!(page.contains("Download Dataset"));
        assert!(page.contains("https://example.org/aipnet.csv"));
    }
}
