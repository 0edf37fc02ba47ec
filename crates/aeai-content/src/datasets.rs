//! Data products: fallback content for the data pages.

use aeai_core::model::{AccessType, Dataset, DatasetDetail};
use aeai_core::util::title_from_slug;

/// Flagship datasets for the listing page.
pub fn datasets() -> Vec<Dataset> {
    vec![
        Dataset {
            title: "AIPNET — AI-Generated Production Network".into(),
            slug: "aipnet".into(),
            description: "A generative AI map of global production, connecting 5,000+ products through their input-output relationships. Built using an ensemble of prompt-tuned generative AI classifications.".into(),
            access: AccessType::Commercial,
            coverage_time_period: Some("Updated annually".into()),
            coverage_geography: Some("Global (5,000+ product classifications)".into()),
            update_frequency: Some("Annual".into()),
            featured: true,
        },
        Dataset {
            title: "Work from Home Map".into(),
            slug: "wfh-map".into(),
            description: "The definitive measurement of remote work, built from 250M+ job vacancy postings across five English-speaking countries. Uses a state-of-the-art NLP framework achieving 99% classification accuracy.".into(),
            access: AccessType::Commercial,
            coverage_time_period: Some("2019–present".into()),
            coverage_geography: Some("US, UK, Canada, Australia, New Zealand".into()),
            update_frequency: Some("Ongoing".into()),
            featured: true,
        },
        Dataset {
            title: "Machinery of Progress".into(),
            slug: "machinery-of-progress".into(),
            description: "A highly granular measurement of capital equipment transactions in the US economy. 50 million transactions extracted from administrative filings using agentic AI, covering IT equipment, heavy machinery, agricultural tools, vehicles, robotics, and more.".into(),
            access: AccessType::Commercial,
            coverage_time_period: Some("1998–2024".into()),
            coverage_geography: Some("United States (5 large states)".into()),
            update_frequency: Some("Annual".into()),
            featured: true,
        },
        Dataset {
            title: "Bad Bank, Bad Luck".into(),
            slug: "bad-bank".into(),
            description: "A novel dataset on the credit relationships of 1.8 million US firms, predominantly small and medium-sized enterprises. Built by digitising and standardising 40M+ archival loan documents using LLM tools.".into(),
            access: AccessType::Commercial,
            coverage_time_period: Some("2000–present".into()),
            coverage_geography: Some("United States".into()),
            update_frequency: Some("Annual".into()),
            featured: true,
        },
    ]
}

/// Full fallback record for a dataset detail page.
///
/// Unknown slugs get a generic record titled from the slug, so the page
/// always renders.
pub fn dataset_detail(slug: &str) -> DatasetDetail {
    match slug {
        "aipnet" => DatasetDetail {
            title: "AIPNET — AI-Generated Production Network".into(),
            description: "A generative AI map of global production, connecting 5,000+ products through their input-output relationships in a directed network.".into(),
            access: AccessType::Commercial,
            coverage_time_period: Some("Updated annually".into()),
            coverage_geography: Some("Global (5,000+ product classifications)".into()),
            granularity: Some("Product-pair level, directed edges".into()),
            update_frequency: Some("Annual".into()),
            methodology: Some("AIPNET uses a two-step \"build-prune\" approach with an ensemble of prompt-tuned generative AI classifications to construct a production network over 5,000+ product nodes.\n\nIn the \"build\" step, generative AI provides an initial distribution of edge predictions representing input-output relationships between products. The \"prune\" step then re-evaluates all edges to improve precision. The resulting network captures directed relationships — which products serve as inputs to which other products in the global production process.\n\nThe dataset enables research on production network spillovers, global trade structure, on-shoring dynamics, industrial policy, and other shifts in the global economy. We document shifts in the network position of products and countries during the 21st century, and validate the network using the natural experiment presented by the 2017 blockade of Qatar.".into()),
            license: Some("Commercial license. Public preview dataset available for academic research. Contact us for full licensing.".into()),
            download_link: None,
        },
        "wfh-map" => DatasetDetail {
            title: "Work from Home Map".into(),
            description: "The definitive measurement of remote and hybrid work, built from 250M+ job vacancy postings across five English-speaking countries using state-of-the-art NLP.".into(),
            access: AccessType::Commercial,
            coverage_time_period: Some("2019–present".into()),
            coverage_geography: Some("US, UK, Canada, Australia, New Zealand".into()),
            granularity: Some("City × Industry × Occupation × Company level".into()),
            update_frequency: Some("Ongoing".into()),
            methodology: Some("The Work from Home Map analyses more than 250 million job vacancy postings across five English-speaking countries. Our state-of-the-art language-processing framework was fit, tested, and refined using 30,000 human classifications.\n\nThe classifier achieves 99% accuracy in flagging job postings that advertise hybrid or fully remote work, greatly outperforming dictionary methods and other machine learning approaches.\n\nThe data reveals that from 2019 to early 2023, the share of postings offering remote work rose more than three-fold in the US and by a factor of five or more in Australia, Canada, New Zealand, and the UK. These developments are highly non-uniform across and within cities, industries, occupations, and companies.".into()),
            license: Some("Commercial license. Contact us for pricing and academic access.".into()),
            download_link: None,
        },
        "machinery-of-progress" => DatasetDetail {
            title: "Machinery of Progress".into(),
            description: "A highly granular measurement of capital equipment transactions across the US economy — 50 million transactions extracted from administrative filings using agentic AI.".into(),
            access: AccessType::Commercial,
            coverage_time_period: Some("1998–2024".into()),
            coverage_geography: Some("United States (5 large states)".into()),
            granularity: Some("Equipment-level (make, model, characteristics, prices)".into()),
            update_frequency: Some("Annual".into()),
            methodology: Some("The Machinery of Progress dataset is constructed by digitising archival administrative filings from 1998 to 2024 and extracting 50 million capital equipment transactions from five large US states.\n\nWe deploy an \"agentic AI\" measurement approach, where multiple AI agents collaborate to build and validate the data. Specialised agents handle document parsing, entity extraction, classification, and quality checking in a coordinated pipeline.\n\nThe final dataset contains the make and model of millions of pieces of equipment — IT equipment, heavy machinery, agricultural tools, vehicles, robotics, CNC machines, and more — along with equipment-level characteristics including time-varying prices. This enables research on technological progress, innovation diffusion, and capital investment patterns at unprecedented granularity.".into()),
            license: Some("Commercial license. Public preview dataset available soon. Contact us for licensing.".into()),
            download_link: None,
        },
        "bad-bank" => DatasetDetail {
            title: "US Firm-Lender Credit Map".into(),
            description: "A novel dataset on the credit relationships of 1.8 million US firms, built by digitising and standardising 40M+ archival loan documents using LLM tools.".into(),
            access: AccessType::Commercial,
            coverage_time_period: Some("2000–present".into()),
            coverage_geography: Some("United States".into()),
            granularity: Some("Firm × Lender relationship level".into()),
            update_frequency: Some("Annual".into()),
            methodology: Some("We deploy Big Data and Large Language Model tools to digitise and standardise over 40 million archival loan documents containing detailed information on lending relationships between firms and their creditors in the United States.\n\nThe resulting dataset covers 1.8 million US firms, predominantly composed of small and medium-sized enterprises (SMEs) — a firm size segment that has been historically difficult to study due to data limitations.\n\nThe data includes detailed information on credit relationships, enabling research on the real effects of financial shocks on firm performance. Our analysis of 179 bank failures from 1990 to 2023 reveals that firms with a credit relationship to a failed bank are 6.7 percentage points (44.3%) more likely to fail themselves within five years, with surviving firms exhibiting 25% lower employment growth.".into()),
            license: Some("Commercial license. Contact us for pricing and academic access.".into()),
            download_link: None,
        },
        other => DatasetDetail {
            title: title_from_slug(other),
            description: "Novel economic dataset built using frontier AI methods.".into(),
            access: AccessType::Commercial,
            coverage_time_period: None,
            coverage_geography: None,
            granularity: None,
            update_frequency: None,
            methodology: Some("Methodology documentation coming soon.".into()),
            license: Some("Contact us at team@appliedeconomics.ai for licensing information.".into()),
            download_link: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_flagship_datasets() {
        let all = datasets();
        assert_eq!(all.len(), 4);
        assert!(all.iter().all(|d| d.featured));
        assert!(all.iter().all(|d| d.access == AccessType::Commercial));
    }

    #[test]
    fn test_every_listed_dataset_has_a_detail_record() {
        for dataset in datasets() {
            let detail = dataset_detail(&dataset.slug);
            assert!(detail.methodology.is_some(), "{} lacks methodology", dataset.slug);
            assert!(detail.license.is_some(), "{} lacks license", dataset.slug);
        }
    }

    #[test]
    fn test_unknown_slug_gets_generic_detail() {
        let detail = dataset_detail("satellite-shipping");
        assert_eq!(detail.title, "Satellite Shipping");
        assert!(detail.coverage_time_period.is_none());
        assert!(!detail.is_downloadable());
    }
}
