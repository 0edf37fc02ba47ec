//! Fallback copy for page singletons (hero lines, stats, prose sections).

use aeai_core::model::{HeroCopy, SectionCopy, Stat};

// ----------------------------------------------------------------------------
// Home
// ----------------------------------------------------------------------------

/// Home page hero.
pub fn home_hero() -> HeroCopy {
    HeroCopy::new(
        "Economic Intelligence Built on Evidence",
        "We combine rigorous economics with frontier AI to deliver consulting, datasets, and policy analysis for governments, investors, and enterprises.",
    )
}

// ----------------------------------------------------------------------------
// About
// ----------------------------------------------------------------------------

/// About page hero.
pub fn about_hero() -> HeroCopy {
    HeroCopy::new(
        "Building the datasets the world is missing",
        "PhD economists building novel datasets and economic intelligence from unstructured data using frontier AI.",
    )
}

/// About page headline stats.
pub fn about_stats() -> Vec<Stat> {
    vec![
        Stat::new("500M+", "Records Processed"),
        Stat::new("4", "Flagship Data Products"),
        Stat::new("5+", "Countries Covered"),
        Stat::new("LSE", "Founded at"),
    ]
}

/// "Our Story" section.
pub fn about_story() -> SectionCopy {
    SectionCopy::new(
        "Our Story",
        "Applied Economics AI was founded in 2022 by economists at the London School of Economics who saw that the digital age was generating vast quantities of data — but the majority of it was trapped in unstructured formats. Financial documents, job postings, administrative archives, clinical observations. Rich in information, but inaccessible to traditional economic analysis.\n\nWe built the tools to change that. Using frontier AI — large language models, natural language processing, and agentic AI pipelines — we extract structured, analysis-ready data from sources that were previously impossible to work with at scale. What began as a research lab at the LSE Centre for Economic Performance has grown into a consulting and data business serving governments, central banks, statistical agencies, and institutional investors.",
    )
}

/// "Our Mission" section.
pub fn about_mission() -> SectionCopy {
    SectionCopy::new(
        "Our Mission",
        "We harness cutting-edge AI to unlock the wealth of information trapped in unstructured data sources, transforming raw information into actionable knowledge for academic research, policy analysis, and commercial decision-making.\n\nOur work sits at the intersection of academic economics and commercial AI — too rigorous for most consultancies, too practical for most academic groups, and too bespoke for standard data vendors. We bring PhD-level economic thinking to real-world problems, and frontier AI methods to serious economic questions.",
    )
}

/// "Our Approach" section.
pub fn about_approach() -> SectionCopy {
    SectionCopy::new(
        "Our Approach",
        "We work in small, focused teams of 2–4 researchers and engineers on engagements typically lasting 8 weeks. Every project starts with an economic question and ends with a concrete deliverable — whether that's a novel dataset, a forecasting model, a policy paper, or a strategic recommendation.\n\nOur methods combine traditional economic analysis with modern AI techniques: large language models for document processing, generative AI for data construction, and rigorous econometric methods for causal inference. We validate everything against ground truth. No black boxes, no hand-waving — just evidence.",
    )
}

// ----------------------------------------------------------------------------
// Careers
// ----------------------------------------------------------------------------

/// Careers page hero.
pub fn careers_hero() -> HeroCopy {
    HeroCopy::new(
        "Join Our Team",
        "Work at the intersection of academic economics and frontier AI. We are looking for talented data analysts and engineers to help build novel economic datasets.",
    )
}

// ----------------------------------------------------------------------------
// Lab
// ----------------------------------------------------------------------------

/// Lab page hero.
pub fn lab_hero() -> HeroCopy {
    HeroCopy::new(
        "Advancing economic measurement with frontier AI",
        "Advancing economic measurement with frontier AI. Open-access research, training resources, and a summer fellowship for early-career researchers.",
    )
}

/// "About the Lab" section.
pub fn lab_about() -> SectionCopy {
    SectionCopy::new(
        "About the Lab",
        "The Applied Economics AI Lab was founded in 2022 at the LSE Centre for Economic Performance. Our mission is to advance research in economics using novel Big Data and AI/ML tools.\n\nWe build large open-access datasets from unconventional sources that help inform academic and policy research on a wide range of topics. We publish data insights, develop publicly available guides for using advanced computational tools and generative AI in economics research, and operate an annual summer fellowship programme to train research fellows in cutting-edge methodologies.",
    )
}

/// Summer fellowship section with its CTA.
pub fn lab_fellowship() -> (SectionCopy, String, String) {
    (
        SectionCopy::new(
            "Summer Fellowship",
            "Our annual summer fellowship programme brings together talented early-career researchers for intensive training in frontier AI and data methodologies applied to economics.\n\nFellows work alongside our senior researchers on real data construction and analysis projects, gaining hands-on experience with large language models, NLP pipelines, cloud computing, and reproducible research workflows. The programme is designed to bridge the gap between academic training and the practical skills needed to work with modern AI tools in economics research.",
        ),
        "Enquire about the fellowship".into(),
        "/contact".into(),
    )
}

// ----------------------------------------------------------------------------
// Data products
// ----------------------------------------------------------------------------

/// Headline stats for the data-products index.
pub fn data_stats() -> Vec<Stat> {
    vec![
        Stat::new("250M+", "Records processed"),
        Stat::new("5,000+", "Product nodes"),
        Stat::new("1.8M", "Firms mapped"),
        Stat::new("5", "Countries covered"),
    ]
}

// ----------------------------------------------------------------------------
// Contact
// ----------------------------------------------------------------------------

/// Inquiry types offered by the contact form, as (value, label) pairs.
pub fn inquiry_types() -> Vec<(String, String)> {
    vec![
        ("general".into(), "General Inquiry".into()),
        ("consulting".into(), "Consulting Services".into()),
        ("research".into(), "Research Partnership".into()),
        ("data".into(), "Data Licensing".into()),
        ("media".into(), "Media Inquiry".into()),
    ]
}

/// Contact email address.
pub const CONTACT_EMAIL: &str = "team@appliedeconomics.ai";

/// Office location line.
pub const CONTACT_LOCATION: &str = "London, United Kingdom";

/// Typical response time line.
pub const CONTACT_RESPONSE_TIME: &str = "Typically within 24 hours";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_copy_present() {
        assert!(home_hero().headline.contains("Economic Intelligence"));
        assert!(careers_hero().headline.contains("Join"));
    }

    #[test]
    fn test_about_sections_have_two_paragraphs() {
        for section in [about_story(), about_mission(), about_approach()] {
            assert_eq!(section.content.split("\n\n").count(), 2, "{}", section.title);
        }
    }

    #[test]
    fn test_inquiry_types() {
        let types = inquiry_types();
        assert_eq!(types.len(), 5);
        assert_eq!(types[0].0, "general");
    }
}
