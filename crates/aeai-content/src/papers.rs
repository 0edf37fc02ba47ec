//! Research papers: fallback content for the research pages.

use aeai_core::model::{Paper, PaperDetail, PaperStatus};
use aeai_core::util::title_from_slug;
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}

/// All papers for the research listing, newest first.
pub fn papers() -> Vec<Paper> {
    vec![
        Paper {
            title: "AI-Generated Production Networks: Measurement and Applications to Global Trade".into(),
            slug: "aipnet".into(),
            abstract_text: "This paper leverages generative AI to build a network structure over 5,000 product nodes, where directed edges represent input-output relationships in production. We lay out a two-step build-prune approach using an ensemble of prompt-tuned generative AI classifications, document shifts in the network position of products and countries during the 21st century, and study production network spillovers using the 2017 blockade of Qatar.".into(),
            status: PaperStatus::WorkingPaper,
            publication_venue: None,
            publication_date: date(2024, 1, 1),
            authors: vec![
                "Peter Lambert".into(),
                "Thiemo Fetzer".into(),
                "Bennet Feld".into(),
                "Prashant Garg".into(),
            ],
            featured: true,
        },
        Paper {
            title: "Remote Work across Jobs, Companies, and Space".into(),
            slug: "remote-work".into(),
            abstract_text: "We examine more than 250 million job vacancy postings across five English-speaking countries to measure the pandemic-driven shift to remote work. Our state-of-the-art NLP framework achieves 99% accuracy in flagging postings that advertise remote work, greatly outperforming dictionary and other ML methods. From 2019 to early 2023, remote work postings rose more than three-fold in the US and by a factor of five or more in Australia, Canada, New Zealand and the UK.".into(),
            status: PaperStatus::WorkingPaper,
            publication_venue: Some("NBER Working Paper".into()),
            publication_date: date(2023, 1, 1),
            authors: vec![
                "Peter Lambert".into(),
                "Stephen Hansen".into(),
                "Nick Bloom".into(),
                "Steven Davis".into(),
                "Raffaella Sadun".into(),
                "Bledi Taska".into(),
            ],
            featured: true,
        },
        Paper {
            title: "Bad Bank, Bad Luck? Evidence from 1 Million Firm-Lender Relationships".into(),
            slug: "bad-bank".into(),
            abstract_text: "We deploy Big Data and LLM tools to digitise 36 million loan records, building a novel dataset on the credit relationships of 1.8 million US firms. Using 179 bank failures from 1990 to 2023, we find that firms banking with a subsequently failed institution are 6.7 percentage points more likely to fail themselves within five years, with surviving firms exhibiting 25% lower employment growth.".into(),
            status: PaperStatus::WorkingPaper,
            publication_venue: None,
            publication_date: date(2024, 1, 1),
            authors: vec!["Peter Lambert".into(), "Yannick Schindler".into()],
            featured: true,
        },
        Paper {
            title: "Machinery of Progress: Charting the Capabilities of Capital Equipment, 1998–2023".into(),
            slug: "machinery-of-progress".into(),
            abstract_text: "This paper charts technological progress embodied in capital equipment. We digitise archival administrative filings from 1998 to 2024 and extract 50 million capital equipment transactions from five large US states. We deploy an agentic AI measurement approach where multiple AI agents collaborate to build and validate the data, producing equipment-level characteristics including time-varying prices.".into(),
            status: PaperStatus::WorkingPaper,
            publication_venue: None,
            publication_date: date(2025, 1, 1),
            authors: vec!["Yannick Schindler".into(), "Peter Lambert".into()],
            featured: true,
        },
        Paper {
            title: "The Macroeconomic Impact of Chronic Illness in the United Kingdom".into(),
            slug: "chronic-illness-uk".into(),
            abstract_text: "We quantify the macroeconomic consequences of chronic illness in the UK, combining health data with macroeconomic indicators to estimate the effects of disease burden on employment, output, and government finances.".into(),
            status: PaperStatus::Published,
            publication_venue: Some("Journal of the Economics of Ageing".into()),
            publication_date: date(2025, 1, 1),
            authors: vec!["Yannick Schindler".into(), "Andrew Scott".into()],
            featured: false,
        },
        Paper {
            title: "Anatomy of Automation: CNC Machines and Industrial Robots in UK Manufacturing, 2005–2023".into(),
            slug: "anatomy-of-automation".into(),
            abstract_text: "We study the adoption and impact of CNC machines and industrial robots in UK manufacturing using novel granular data on automation equipment.".into(),
            status: PaperStatus::WorkingPaper,
            publication_venue: None,
            publication_date: date(2025, 1, 1),
            authors: vec![
                "Peter Lambert".into(),
                "Aniket Baksy".into(),
                "Daniel Chandler".into(),
            ],
            featured: false,
        },
    ]
}

/// Full fallback record for a paper detail page.
///
/// Unknown slugs get a generic record titled from the slug.
pub fn paper_detail(slug: &str) -> PaperDetail {
    let listing = papers().into_iter().find(|p| p.slug == slug);

    let key_findings: Vec<String> = match slug {
        "aipnet" => vec![
            "Generative AI classifications recover a production network over 5,000+ product nodes".into(),
            "Network positions of products and countries shifted markedly during the 21st century".into(),
            "The 2017 blockade of Qatar confirms that shocks propagate along network edges".into(),
        ],
        "remote-work" => vec![
            "The NLP classifier reaches 99% accuracy against 30,000 human labels".into(),
            "US remote-work postings rose more than three-fold from 2019 to early 2023".into(),
            "Australia, Canada, New Zealand, and the UK saw five-fold or larger increases".into(),
            "Shifts are highly non-uniform across cities, industries, occupations, and companies".into(),
        ],
        "bad-bank" => vec![
            "Firms banking with a failed institution are 6.7pp (44.3%) more likely to fail within five years".into(),
            "Surviving exposed firms show 25% lower employment growth".into(),
            "The dataset covers 1.8 million firms and 179 bank failures from 1990 to 2023".into(),
        ],
        "machinery-of-progress" => vec![
            "50 million equipment transactions extracted from archival filings across five states".into(),
            "Collaborating AI agents build and validate equipment-level characteristics".into(),
            "Time-varying prices reveal technological progress embodied in capital".into(),
        ],
        _ => vec![],
    };

    match listing {
        Some(p) => PaperDetail {
            title: p.title,
            abstract_text: p.abstract_text,
            status: p.status,
            publication_venue: p.publication_venue,
            publication_date: p.publication_date,
            authors: p.authors,
            key_findings,
            citation_apa: None,
            pdf_link: None,
        },
        None => PaperDetail {
            title: title_from_slug(slug),
            abstract_text: "This research paper examines important economic questions using rigorous empirical methods.".into(),
            status: PaperStatus::WorkingPaper,
            publication_venue: None,
            publication_date: None,
            authors: vec!["Applied Economics Research Team".into()],
            key_findings: vec![],
            citation_apa: None,
            pdf_link: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_six_papers() {
        let all = papers();
        assert_eq!(all.len(), 6);
        assert_eq!(all.iter().filter(|p| p.featured).count(), 4);
    }

    #[test]
    fn test_status_mix() {
        let all = papers();
        let published = all
            .iter()
            .filter(|p| p.status == PaperStatus::Published)
            .count();
        assert_eq!(published, 1);
    }

    #[test]
    fn test_detail_for_listed_paper_reuses_listing_fields() {
        let detail = paper_detail("bad-bank");
        assert!(detail.title.starts_with("Bad Bank"));
        assert_eq!(detail.authors.len(), 2);
        assert_eq!(detail.key_findings.len(), 3);
    }

    #[test]
    fn test_detail_for_unknown_slug() {
        let detail = paper_detail("quantum-trade");
        assert_eq!(detail.title, "Quantum Trade");
        assert!(detail.key_findings.is_empty());
        assert_eq!(detail.authors, vec!["Applied Economics Research Team"]);
    }
}
