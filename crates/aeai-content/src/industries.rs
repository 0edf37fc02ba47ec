//! Industry verticals: hand-written copy for the industries pages.

use aeai_core::model::{Industry, RelatedLink, Spec};

/// All industry verticals, in display order.
pub fn industries() -> Vec<Industry> {
    vec![
        Industry {
            name: "Governments".into(),
            slug: "governments".into(),
            headline: "Evidence-Based Decision-Making for Government".into(),
            description: "We help treasuries, ministries, and government data units make policy decisions grounded in rigorous economic evidence and novel data.".into(),
            specs: vec![
                Spec::new("TYPICAL ENGAGEMENT", "8 Weeks"),
                Spec::new("DELIVERABLES", "Policy Briefs & Models"),
                Spec::new("METHODS", "Causal Inference & AI"),
                Spec::new("REACH", "G7 & G20"),
            ],
            how_we_help: "Government departments face policy decisions where the relevant data often does not exist in official statistics. Traditional economic indicators arrive with long lags, leaving decision-makers to act on outdated information. We bridge that gap.\n\nOur team provides board-level economic analysis for treasuries and policy units — from macroeconomic impact assessment to AI adoption strategy. We combine rigorous econometric methods with frontier AI to produce evidence that meets the standard required for parliamentary select committees, ministerial submissions, and inter-departmental review.\n\nWe have presented findings to senior government officials, contributed expert evidence to parliamentary inquiries on the use of AI in government, and advised on data strategy for national-level programmes. Every engagement produces a concrete deliverable: an impact model, a policy brief, or a strategic recommendation backed by reproducible analysis.".into(),
            related_services: vec![
                RelatedLink::new("Economic Consulting", "economic-consulting"),
                RelatedLink::new("Policy Analysis", "policy-analysis"),
            ],
            related_data: vec![
                RelatedLink::new("AIPNET", "aipnet"),
                RelatedLink::new("Machinery of Progress", "machinery-of-progress"),
            ],
            cta_headline: "Need rigorous evidence for a policy decision?".into(),
            cta_description: "Tell us about your challenge. We will outline how our team, methods, and data can help.".into(),
        },
        Industry {
            name: "Central Banks".into(),
            slug: "central-banks".into(),
            headline: "Quantitative Tools for Monetary Policy and Financial Stability".into(),
            description: "We build macroeconomic forecasting models, alternative data products, and bespoke analytical tools for central bank research departments.".into(),
            specs: vec![
                Spec::new("FORECASTING", "DSGE & Reduced-Form"),
                Spec::new("ALTERNATIVE DATA", "Labour & Credit"),
                Spec::new("VALIDATION", "Peer-Review Grade"),
                Spec::new("COVERAGE", "Multi-Country"),
            ],
            how_we_help: "Central banks require economic analysis at a level of rigour that most consultancies cannot provide. Monetary policy committees need models calibrated to specific economies and validated against historical episodes. Research departments need alternative data that supplements — not replaces — official statistics.\n\nWe build DSGE and reduced-form forecasting models for inflation, output, employment, and bond yields. Our models are calibrated to specific policy regimes and stress-tested against known macroeconomic episodes, producing scenario analyses suitable for internal review and publication.\n\nOur data products offer central banks a new lens on the economy. The Work from Home Map tracks structural shifts in labour markets across five countries. The US Firm-Lender Credit Map provides granular visibility into credit relationships across 1.8 million firms — a critical input for financial stability monitoring. Each dataset is built with the methodological transparency that central bank research departments expect.".into(),
            related_services: vec![
                RelatedLink::new("Economic Consulting", "economic-consulting"),
                RelatedLink::new("Data & AI Solutions", "data-ai-solutions"),
            ],
            related_data: vec![
                RelatedLink::new("Work from Home Map", "wfh-map"),
                RelatedLink::new("US Firm-Lender Credit Map", "bad-bank"),
            ],
            cta_headline: "Looking for analytical tools that meet central bank standards?".into(),
            cta_description: "Describe your research question. We will outline how our models and data can support your work.".into(),
        },
        Industry {
            name: "Statistical Agencies".into(),
            slug: "statistical-agencies".into(),
            headline: "AI Adoption and Methodology for National Statistics".into(),
            description: "We advise national statistics offices on integrating frontier AI into their workflows — from survey methodology to automated data extraction and dissemination.".into(),
            specs: vec![
                Spec::new("TRAINING", "Hands-On Workshops"),
                Spec::new("AI STRATEGY", "2 & 5 Year Plans"),
                Spec::new("SCOPE", "Full Transformation"),
                Spec::new("STAFF TRAINED", "40+"),
            ],
            how_we_help: "National statistics offices are under pressure to modernise — to produce faster, more granular statistics while managing tighter budgets and rising respondent burden. AI offers a path forward, but adopting it requires deep domain expertise and a strategy tailored to the unique constraints of official statistics.\n\nWe have advised G20 national statistics offices on comprehensive AI adoption strategies, including multi-year transformation plans, data quality enhancement frameworks, and automated dissemination workflows. Our engagements cover the full scope: inter-agency data sharing, cost reduction through novel data sources, survey methodology redesign, and the development of interactive dashboards for economic structure visualisation.\n\nWe also deliver hands-on training programmes for statisticians, equipping teams to use large language models for automated data extraction from survey responses and administrative filings. Our workshops are built around the agency's own data and tools, ensuring immediate applicability.".into(),
            related_services: vec![
                RelatedLink::new("Training & Workshops", "training-workshops"),
                RelatedLink::new("Data & AI Solutions", "data-ai-solutions"),
            ],
            related_data: vec![
                RelatedLink::new("AIPNET", "aipnet"),
                RelatedLink::new("Machinery of Progress", "machinery-of-progress"),
            ],
            cta_headline: "Ready to modernise your statistical production?".into(),
            cta_description: "Tell us about your agency's challenges. We will outline a practical path to AI adoption.".into(),
        },
        Industry {
            name: "Policy Institutions".into(),
            slug: "policy-institutions".into(),
            headline: "Rigorous Economic Evidence for Policy Impact".into(),
            description: "We produce research that quantifies the economic effects of policy interventions — translating complex analysis into clear, actionable recommendations.".into(),
            specs: vec![
                Spec::new("IMPACT MODELLING", "GDP & Fiscal Effects"),
                Spec::new("METHODS", "Macro-Health Economics"),
                Spec::new("OUTPUT", "Board-Ready Briefs"),
                Spec::new("EVIDENCE STANDARD", "Publication Grade"),
            ],
            how_we_help: "Policy institutions commission research to inform high-stakes decisions — but the gap between academic rigour and practical relevance is often wide. We bridge it. Our team produces policy-relevant research that combines the methodological standards of top economics journals with the clarity required for ministerial and board-level audiences.\n\nOur work for policy institutions has quantified the macroeconomic benefits of preventative health care, estimating that targeted reductions in major disease categories could raise GDP by 0.74% within five years — an annual boost of £19.8 billion with fiscal savings of £10.2 billion by 2030. This required building a bespoke model that jointly analyses health and macroeconomic policy, validated against national accounts data.\n\nWe deliver impact estimates, scenario models, and policy briefs that meet the evidence standards increasingly demanded by regulators, select committees, and institutional investors. Every claim is backed by reproducible analysis.".into(),
            related_services: vec![
                RelatedLink::new("Policy Analysis", "policy-analysis"),
                RelatedLink::new("Economic Consulting", "economic-consulting"),
            ],
            related_data: vec![
                RelatedLink::new("Work from Home Map", "wfh-map"),
                RelatedLink::new("AIPNET", "aipnet"),
            ],
            cta_headline: "Need to quantify the economic case for a policy?".into(),
            cta_description: "Describe your policy question. We will outline how evidence-based analysis can support it.".into(),
        },
        Industry {
            name: "Institutional Investors".into(),
            slug: "institutional-investors".into(),
            headline: "Alternative Data and Economic Models for Investment Decisions".into(),
            description: "We provide asset managers, hedge funds, and sovereign wealth funds with proprietary datasets and bespoke forecasting models built on economic fundamentals.".into(),
            specs: vec![
                Spec::new("DATA ADVANTAGE", "Proprietary Datasets"),
                Spec::new("FORECASTING", "DSGE & Scenario Models"),
                Spec::new("SIGNALS", "Labour, Trade, Credit"),
                Spec::new("UPDATE CYCLE", "Ongoing"),
            ],
            how_we_help: "Institutional investors need analytical edges that off-the-shelf data cannot provide. Standard economic indicators are priced in by the time they are published. We build proprietary datasets and bespoke models that give investors an informational advantage grounded in economic fundamentals — not statistical artefacts.\n\nOur data products track structural shifts in the economy before they appear in official statistics. The Work from Home Map reveals labour market restructuring across 250 million job postings. The AIPNET production network maps input-output relationships across 5,000+ products, providing early signals on trade disruption, supply chain concentration, and industrial policy effects. The US Firm-Lender Credit Map covers 1.8 million firm-bank relationships — a granular view of credit risk that no other source provides.\n\nWe also build bespoke DSGE and reduced-form models calibrated to specific investment theses, producing scenario analyses for inflation, employment, output, and interest rates under alternative policy regimes.".into(),
            related_services: vec![
                RelatedLink::new("Economic Consulting", "economic-consulting"),
                RelatedLink::new("Data & AI Solutions", "data-ai-solutions"),
            ],
            related_data: vec![
                RelatedLink::new("Work from Home Map", "wfh-map"),
                RelatedLink::new("AIPNET", "aipnet"),
                RelatedLink::new("US Firm-Lender Credit Map", "bad-bank"),
            ],
            cta_headline: "Looking for data that moves ahead of official statistics?".into(),
            cta_description: "Tell us about your investment thesis. We will outline how our data and models can support it.".into(),
        },
        Industry {
            name: "Global Trade".into(),
            slug: "global-trade".into(),
            headline: "Mapping the Structure of Global Production and Trade".into(),
            description: "We build AI-driven tools that reveal the hidden network connecting products, countries, and supply chains in the global economy.".into(),
            specs: vec![
                Spec::new("PRODUCT NODES", "5,000+"),
                Spec::new("NETWORK TYPE", "Directed Input-Output"),
                Spec::new("COVERAGE", "Global"),
                Spec::new("VALIDATED AGAINST", "Natural Experiments"),
            ],
            how_we_help: "Global trade is structured by production networks — intricate webs of input-output relationships that determine how economic shocks propagate across products and countries. Traditional trade statistics capture bilateral flows but miss the underlying network structure. We map it.\n\nOur flagship AIPNET dataset uses generative AI to construct a production network over 5,000+ product nodes, where directed edges represent input-output relationships. The network reveals which products are critical intermediates, which countries occupy central network positions, and how these positions have shifted during the 21st century.\n\nWe have used this network to study production network spillovers using the natural experiment presented by the 2017 blockade of Qatar, demonstrating how trade disruptions propagate through the network in predictable ways. This research informs governments designing on-shoring and industrial policy, investors assessing supply chain risk, and international organisations tracking structural change in the global economy.".into(),
            related_services: vec![
                RelatedLink::new("Economic Consulting", "economic-consulting"),
                RelatedLink::new("Policy Analysis", "policy-analysis"),
            ],
            related_data: vec![RelatedLink::new("AIPNET", "aipnet")],
            cta_headline: "Need to understand your position in the global production network?".into(),
            cta_description: "Tell us about your trade or supply chain question. We will outline how AIPNET and our analytical tools can help.".into(),
        },
        Industry {
            name: "Healthcare".into(),
            slug: "healthcare".into(),
            headline: "The Macroeconomic Dimensions of Health".into(),
            description: "We quantify the economic effects of health interventions and disease burden — connecting population health to GDP, employment, and public finances.".into(),
            specs: vec![
                Spec::new("GDP IMPACT MODELLED", "0.74% Boost"),
                Spec::new("FISCAL SAVINGS", "£10.2B by 2030"),
                Spec::new("METHODS", "Joint Health-Macro Models"),
                Spec::new("PUBLISHED IN", "Academic Journals"),
            ],
            how_we_help: "Health policy is rarely designed with macroeconomic modelling. Industrial policy is rarely designed with health economics. We work at the intersection, building models that jointly analyse how population health affects employment, output, and government finances.\n\nOur published research quantifies the macroeconomic consequences of chronic illness, combining health data with macroeconomic indicators to estimate the effects of disease burden on the economy. For policy institutions, we have estimated that a 20% reduction in six major disease categories could raise GDP by 0.74% within five years, generating annual fiscal savings of £10.2 billion.\n\nThis work requires a rare combination of skills: macroeconomic modelling, health data analysis, and the ability to translate findings into policy recommendations. Our team has published in academic journals on these topics and presented findings to government health and economic policy teams.".into(),
            related_services: vec![
                RelatedLink::new("Policy Analysis", "policy-analysis"),
                RelatedLink::new("Economic Consulting", "economic-consulting"),
            ],
            related_data: vec![RelatedLink::new("Work from Home Map", "wfh-map")],
            cta_headline: "Need to quantify the economic case for a health intervention?".into(),
            cta_description: "Describe your question. We will outline how our macro-health models can inform the analysis.".into(),
        },
        Industry {
            name: "Logistics".into(),
            slug: "logistics".into(),
            headline: "Supply Chain Intelligence from Production Network Data".into(),
            description: "We provide data and analytical tools that map supply chain dependencies, identify critical intermediates, and model the propagation of disruptions.".into(),
            specs: vec![
                Spec::new("NETWORK SCOPE", "5,000+ Products"),
                Spec::new("RELATIONSHIPS", "Input-Output Edges"),
                Spec::new("EQUIPMENT DATA", "50M Transactions"),
                Spec::new("USE CASE", "Risk & Resilience"),
            ],
            how_we_help: "Modern supply chains are opaque. Companies and governments know their direct suppliers but rarely have visibility into the deeper network of dependencies that determine vulnerability to disruption. Our data makes this network visible.\n\nThe AIPNET production network maps directed input-output relationships across 5,000+ products, revealing which inputs are critical bottlenecks and how disruptions in one product category propagate to others. We have validated these network effects using natural experiments, demonstrating that production network structure predicts the real-world propagation of trade shocks.\n\nOur Machinery of Progress dataset adds a complementary lens — tracking 50 million capital equipment transactions across the US economy, covering heavy machinery, vehicles, robotics, and IT equipment. Together, these datasets enable logistics and supply chain teams to assess concentration risk, model disruption scenarios, and identify strategic alternatives for critical inputs.".into(),
            related_services: vec![
                RelatedLink::new("Economic Consulting", "economic-consulting"),
                RelatedLink::new("Data & AI Solutions", "data-ai-solutions"),
            ],
            related_data: vec![
                RelatedLink::new("AIPNET", "aipnet"),
                RelatedLink::new("Machinery of Progress", "machinery-of-progress"),
            ],
            cta_headline: "Need visibility into your supply chain dependencies?".into(),
            cta_description: "Tell us about your supply chain challenge. We will outline how our network data can help.".into(),
        },
    ]
}

/// Look up an industry by slug.
pub fn industry_by_slug(slug: &str) -> Option<Industry> {
    industries().into_iter().find(|i| i.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eight_industries_in_order() {
        let all = industries();
        assert_eq!(all.len(), 8);
        assert_eq!(all[0].slug, "governments");
        assert_eq!(all[7].slug, "logistics");
    }

    #[test]
    fn test_lookup_by_slug() {
        let industry = industry_by_slug("central-banks").unwrap();
        assert_eq!(industry.name, "Central Banks");
        assert_eq!(industry.specs.len(), 4);
        assert!(industry_by_slug("unknown").is_none());
    }

    #[test]
    fn test_related_links_point_at_known_slugs() {
        let service_slugs = [
            "economic-consulting",
            "data-ai-solutions",
            "policy-analysis",
            "training-workshops",
        ];
        for industry in industries() {
            for link in &industry.related_services {
                assert!(
                    service_slugs.contains(&link.slug.as_str()),
                    "{} links unknown service {}",
                    industry.slug,
                    link.slug
                );
            }
        }
    }
}
