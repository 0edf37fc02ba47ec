//! Service lines: hand-written copy for the services pages.

use aeai_core::model::{
    Capability, Challenge, EngagementHighlight, MethodStep, Metric, RelatedLink, RelatedProduct,
    Service, Spec,
};

fn step(title: &str, description: &str, is_core: bool) -> MethodStep {
    MethodStep {
        title: title.into(),
        description: description.into(),
        is_core,
    }
}

fn challenge(title: &str, description: &str) -> Challenge {
    Challenge {
        title: title.into(),
        description: description.into(),
    }
}

fn capability(title: &str, description: &str, deliverables: &str) -> Capability {
    Capability {
        title: title.into(),
        description: description.into(),
        deliverables: deliverables.into(),
    }
}

fn metric(value: &str, label: &str) -> Metric {
    Metric {
        value: value.into(),
        label: label.into(),
    }
}

fn product(name: &str, description: &str, slug: &str) -> RelatedProduct {
    RelatedProduct {
        name: name.into(),
        description: description.into(),
        slug: slug.into(),
    }
}

/// All service lines, in display order.
pub fn services() -> Vec<Service> {
    vec![
        Service {
            title: "Economic Consulting".into(),
            slug: "economic-consulting".into(),
            order: 1,
            summary: "Bespoke economic analysis for strategic, policy, and investment decisions. From macroeconomic forecasting to national accounts methodology, our work is built on evidence and academic rigour.".into(),
            proof_point: "Advised G20 national statistics offices on AI adoption strategy".into(),
            headline: "Bespoke Economic Analysis for High-Stakes Decisions".into(),
            introduction: "We provide board-level economic advisory for governments, statistical agencies, central banks, and institutional investors. Our team combines PhD-level economic training with hands-on experience building and deploying analytical tools at scale.".into(),
            key_specs: vec![
                Spec::new("MACRO FORECASTING", "DSGE Models"),
                Spec::new("NATIONAL ACCOUNTS", "Statistical Methods"),
                Spec::new("IMPACT ASSESSMENT", "GDP & Fiscal Effects"),
                Spec::new("CLIENT REACH", "G20 Advisory"),
            ],
            challenges: vec![
                challenge(
                    "Decisions That Outpace Traditional Analysis",
                    "Treasury departments and central banks face policy decisions where the relevant data does not yet exist in official statistics. Traditional economic indicators arrive with 6-12 month lags, leaving decision-makers to act on outdated information.",
                ),
                challenge(
                    "Methodology Questions That Consultancies Cannot Answer",
                    "When a national statistics office redesigns its capital expenditure survey or rebalances its supply-use tables, it needs academic-grade methodology — not a strategy deck. The Big 4 do not have the depth.",
                ),
                challenge(
                    "Evidence Standards Are Rising",
                    "Select committees, regulators, and institutional investors increasingly require peer-reviewed, reproducible evidence behind economic claims. Assertions without rigorous backing no longer satisfy.",
                ),
            ],
            methodology: vec![
                step("Scoping", "We define the economic question, identify available data sources, and agree on deliverables and timeline.", false),
                step("Analysis", "A focused team of 2–4 PhD economists conducts rigorous analysis using appropriate methods and data.", true),
                step("Translation", "We translate technical findings into board-ready insights — policy briefs, strategic recommendations, or data products.", false),
                step("Delivery", "Final deliverables, presentations, and ongoing support. Typical engagements run 8 weeks.", false),
            ],
            capabilities: vec![
                capability(
                    "Macroeconomic Forecasting",
                    "DSGE and reduced-form models to forecast inflation, output, employment, and bond yields. We build models calibrated to specific economies and policy regimes, validated against historical episodes.",
                    "DSGE models, Scenario analysis, Quarterly briefings",
                ),
                capability(
                    "National Accounts Advisory",
                    "Methodology design for national statistics agencies, including balance sheet frameworks, capital expenditure surveys, and supply-use table balancing tools.",
                    "Methodology reports, Balancing tools, Training",
                ),
                capability(
                    "Economic Impact Assessment",
                    "Rigorous quantification of the GDP, employment, and fiscal effects of policy interventions. We model direct, indirect, and induced effects with full sensitivity analysis.",
                    "Impact models, Policy briefs, Board presentations",
                ),
                capability(
                    "Strategic Data Advisory",
                    "Identifying opportunities to improve data quality, reduce reporting burdens, and leverage novel data sources such as card transactions, satellite imagery, and administrative records.",
                    "Data strategy, Gap analysis, Implementation roadmap",
                ),
            ],
            engagement_highlight: EngagementHighlight {
                title: "AI Strategy for a G20 National Statistics Office".into(),
                description: "We advised a G20 national statistics office on a comprehensive AI adoption strategy, including a 2- and 5-year transformation plan, data quality enhancements, and automated dissemination workflows. The engagement covered inter-agency data sharing, cost reduction through novel data sources, and development of interactive dashboards for economic structure visualisation.".into(),
                metrics: vec![
                    metric("2+5", "YEAR TRANSFORMATION PLAN"),
                    metric("G20", "CLIENT TIER"),
                    metric("40+", "STAFF TRAINED"),
                ],
            },
            related_data_products: vec![
                product("AIPNET", "A generative AI map of global production, revealing input-output connections across 5,000+ products.", "aipnet"),
                product("Machinery of Progress", "Tracking capital investment and technological progress through 50M+ administrative equipment transactions.", "machinery-of-progress"),
            ],
            cta_headline: "Ready to bring rigour to your next decision?".into(),
            cta_description: "Tell us about your economic question. We will outline how our team, methods, and data can help.".into(),
        },
        Service {
            title: "Data & AI Solutions".into(),
            slug: "data-ai-solutions".into(),
            order: 2,
            summary: "We build structured datasets from unstructured sources using frontier AI. Financial documents, job postings, administrative archives — we transform raw data into analysis-ready economic intelligence.".into(),
            proof_point: "250M+ job postings and 40M+ loan documents processed".into(),
            headline: "Structured Datasets from Unstructured Sources".into(),
            introduction: "The vast majority of economically valuable data comes in unstructured formats — handwritten documents, PDF filings, free-text job postings, clinical records. We deploy large language models, NLP pipelines, and agentic AI workflows to extract structured, validated data from these sources at scale.".into(),
            key_specs: vec![
                Spec::new("JOB POSTINGS", "250M+"),
                Spec::new("LOAN DOCUMENTS", "40M+"),
                Spec::new("EQUIPMENT TXNS", "50M+"),
                Spec::new("COUNTRIES", "5"),
            ],
            challenges: vec![
                challenge(
                    "Vast Archives, No Structure",
                    "Governments, banks, and research institutions hold decades of records in formats no machine can read — handwritten ledgers, scanned PDFs, free-text filings. The information exists but cannot be analysed.",
                ),
                challenge(
                    "AI Hype, Validation Gap",
                    "Off-the-shelf LLMs produce output that looks plausible but requires rigorous validation against ground truth before any analytical use. Most AI vendors ship outputs without quality guarantees.",
                ),
                challenge(
                    "Bespoke Requirements, Generic Tools",
                    "Each institution's data has unique structures, quality issues, and domain-specific vocabulary that generic data extraction tools cannot handle. Economic data demands economic understanding.",
                ),
            ],
            methodology: vec![
                step("Data Assessment", "We evaluate your unstructured data sources and define the target structured output — schema, coverage, and quality standards.", false),
                step("Pipeline Design", "We design the AI extraction pipeline: model selection, prompt engineering, validation strategy, and quality gates.", false),
                step("Build & Validate", "We run the pipeline at scale, validating outputs against ground truth and iterating until quality thresholds are met.", true),
                step("Delivery & Documentation", "Clean, documented datasets delivered with full methodology notes and reproducibility guarantees.", false),
            ],
            capabilities: vec![
                capability(
                    "Document Digitisation",
                    "AI-powered extraction from archival, handwritten, and scanned documents — from loan records to administrative filings. We achieve production-grade accuracy through multi-agent validation.",
                    "Structured datasets, Extraction pipelines, Quality reports",
                ),
                capability(
                    "Text Classification",
                    "High-accuracy classification of large-scale text data using fine-tuned language models, validated against 30,000+ human labels. We built the system that classifies remote work in 250M job postings with 99% accuracy.",
                    "Classification models, Labelled datasets, Accuracy benchmarks",
                ),
                capability(
                    "Agentic AI Pipelines",
                    "Multi-agent AI workflows where specialised models collaborate to build, validate, and quality-check datasets. Our Machinery of Progress dataset was built entirely through agentic AI collaboration.",
                    "Multi-agent pipelines, Automated QA, Documentation",
                ),
                capability(
                    "Custom Dataset Construction",
                    "End-to-end design and delivery of bespoke structured datasets from unconventional sources. We work with your data, your domain, and your analytical needs.",
                    "Bespoke datasets, Schema design, Methodology papers",
                ),
            ],
            engagement_highlight: EngagementHighlight {
                title: "Digitising America's Lending History".into(),
                description: "We deployed LLM tools to digitise 40 million archival loan documents, transforming handwritten records into the most granular dataset of US firm-lender relationships available to researchers and policymakers. The dataset covers 1.8 million firms and 179 bank failures from 1990 to 2023.".into(),
                metrics: vec![
                    metric("40M+", "DOCUMENTS DIGITISED"),
                    metric("1.8M", "FIRMS COVERED"),
                    metric("33yr", "TIME SPAN"),
                ],
            },
            related_data_products: vec![
                product("Work from Home Map", "The definitive picture of remote work, built from 250M+ job postings across five countries.", "wfh-map"),
                product("AIPNET", "A generative AI map of global production, revealing input-output connections across 5,000+ products.", "aipnet"),
                product("US Firm-Lender Credit Map", "The hidden history of American credit, reconstructed from 40M+ archival loan documents.", "bad-bank"),
            ],
            cta_headline: "Have unstructured data that needs structure?".into(),
            cta_description: "Describe your data challenge. We will assess feasibility and outline an extraction approach.".into(),
        },
        Service {
            title: "Policy Analysis".into(),
            slug: "policy-analysis".into(),
            order: 3,
            summary: "Evidence-based research for governments and policy institutions. We quantify the economic impact of policy interventions and translate findings into actionable recommendations.".into(),
            proof_point: "Estimated £19.8B annual GDP boost from preventative health policy".into(),
            headline: "Evidence-Based Research for Government and Policy".into(),
            introduction: "We produce policy-relevant research that combines academic rigour with clear communication. Our work has informed decisions at central banks, treasury departments, and international policy institutions.".into(),
            key_specs: vec![
                Spec::new("GDP BOOST IDENTIFIED", "0.74%"),
                Spec::new("ANNUAL OUTPUT GAIN", "£19.8B"),
                Spec::new("FISCAL SAVINGS/YR", "£10.2B"),
                Spec::new("EVIDENCE PROVIDED", "Select Committee"),
            ],
            challenges: vec![
                challenge(
                    "Policy Without Evidence",
                    "Government departments design interventions worth billions of pounds without rigorous quantification of their economic effects. The cost-benefit analysis is often absent or superficial.",
                ),
                challenge(
                    "Disciplinary Silos",
                    "Health policy is made without macroeconomic modelling. Industrial policy is made without trade network analysis. The economic dimensions of policy decisions are routinely underweighted.",
                ),
                challenge(
                    "Communication Gap",
                    "Academic research that could inform policy sits in journals that policymakers never read. Translating rigorous findings into clear, actionable briefs requires a rare combination of skills.",
                ),
            ],
            methodology: vec![
                step("Question Definition", "We work with policymakers to define the question precisely — what intervention, what outcomes, what time horizon.", false),
                step("Model & Data", "We build or adapt economic models and assemble the required data, often combining multiple administrative and survey sources.", true),
                step("Analysis & Scenarios", "We estimate baseline effects and run policy scenarios, with full sensitivity analysis and uncertainty quantification.", false),
                step("Policy Brief", "Findings are translated into clear policy recommendations with supporting evidence, suitable for ministerial or board-level audiences.", false),
            ],
            capabilities: vec![
                capability(
                    "Policy Impact Quantification",
                    "Rigorous estimation of GDP, employment, and fiscal effects of proposed policy interventions. We model direct, indirect, and induced effects with full uncertainty quantification.",
                    "Impact estimates, Scenario models, Sensitivity analysis",
                ),
                capability(
                    "Macro-Health Economics",
                    "Joint analysis of health and macroeconomic policy, modelling how improved population health affects employment, output, and government finances. Our framework was used to quantify the GDP case for preventative health.",
                    "Joint models, GDP estimates, Fiscal projections",
                ),
                capability(
                    "Regulatory Analysis",
                    "Economic assessment of regulatory proposals, including cost-benefit analysis, distributional effects, and dynamic impacts on investment and innovation.",
                    "Cost-benefit analyses, Regulatory impact assessments",
                ),
                capability(
                    "Board-Level Briefs",
                    "Clear, evidence-based communications for policymakers, central bank governors, and government ministers. We translate complex economic analysis into actionable recommendations.",
                    "Policy briefs, Ministerial submissions, Presentations",
                ),
            ],
            engagement_highlight: EngagementHighlight {
                title: "The Economic Case for Preventative Health".into(),
                description: "We quantified the macroeconomic benefits of preventative health care for a leading policy institution, building a model that jointly analyses health and macroeconomic policy. We estimated that a 20% reduction in six major disease categories could raise GDP by 0.74% within five years — an annual boost of £19.8 billion.".into(),
                metrics: vec![
                    metric("0.74%", "GDP BOOST IN 5 YEARS"),
                    metric("£19.8B", "ANNUAL OUTPUT GAIN"),
                    metric("£10.2B", "FISCAL SAVINGS BY 2030"),
                ],
            },
            related_data_products: vec![
                product("Work from Home Map", "The definitive picture of remote work, built from 250M+ job postings across five countries.", "wfh-map"),
                product("AIPNET", "A generative AI map of global production, revealing input-output connections across 5,000+ products.", "aipnet"),
            ],
            cta_headline: "Need rigorous evidence for a policy decision?".into(),
            cta_description: "Describe your policy question. We will outline how evidence-based analysis can inform the decision.".into(),
        },
        Service {
            title: "Training & Workshops".into(),
            slug: "training-workshops".into(),
            order: 4,
            summary: "Hands-on training in AI tools, computational methods, and data analysis for economics teams. We help organisations build internal capacity in frontier analytical methods.".into(),
            proof_point: "Delivered for national statistics agencies and research institutions".into(),
            headline: "Frontier Methods for Economics Teams".into(),
            introduction: "We design and deliver training programmes for economists, statisticians, and data teams who want to adopt frontier AI and computational methods. Our workshops are practical, hands-on, and grounded in real applications.".into(),
            key_specs: vec![
                Spec::new("PROGRAMME DURATION", "1–5 Days"),
                Spec::new("FORMAT", "Hands-On"),
                Spec::new("CURRICULUM", "Custom"),
                Spec::new("CLIENTS SERVED", "National Agencies"),
            ],
            challenges: vec![
                challenge(
                    "AI Tools Without AI Understanding",
                    "Economics teams are adopting AI tools without understanding their strengths, limitations, or appropriate use cases. This leads to misapplication and unreliable outputs.",
                ),
                challenge(
                    "Reproducibility Crisis",
                    "Research teams produce analysis that cannot be replicated, verified, or extended by colleagues. Version control, containerisation, and documentation practices lag behind other quantitative fields.",
                ),
                challenge(
                    "Cloud Skills Gap",
                    "Large-scale data processing requires cloud infrastructure that most economics teams have never used. The gap between desktop tools and production-grade data pipelines is widening.",
                ),
            ],
            methodology: vec![
                step("Needs Assessment", "We assess your team's current capabilities, tools, and analytical needs to define learning objectives.", false),
                step("Programme Design", "We design a hands-on curriculum using your team's actual data and tools where possible.", true),
                step("Delivery", "Interactive workshops combining instruction with practical exercises. Typically 1–5 days.", false),
                step("Follow-Up", "Post-workshop support, reference materials, and follow-up sessions to ensure adoption.", false),
            ],
            capabilities: vec![
                capability(
                    "AI for Economics",
                    "Practical training on using LLMs, NLP, and generative AI for economic data construction and analysis. We cover prompt engineering, model selection, and validation strategies specific to economic data.",
                    "Workshop materials, Code notebooks, Reference guides",
                ),
                capability(
                    "Cloud Computing",
                    "Hands-on workshops for setting up and using cloud infrastructure for large-scale data processing. We cover AWS, GCP, and Azure with a focus on economics workloads.",
                    "Cloud setup guides, Template infrastructure, Cost management",
                ),
                capability(
                    "Reproducible Workflows",
                    "Best practices for version control, containerisation, and documentation in research teams. We teach Git, Docker, and modern documentation tools tailored for economists.",
                    "Workflow templates, Git training, Docker setups",
                ),
                capability(
                    "Custom Programmes",
                    "Bespoke training designed around your team's specific tools, data, and analytical needs. We work with your actual projects to ensure immediate applicability.",
                    "Custom curriculum, Hands-on exercises, Follow-up support",
                ),
            ],
            engagement_highlight: EngagementHighlight {
                title: "AI Tools for a National Statistics Office".into(),
                description: "We designed and delivered a custom training programme for a G20 national statistics office, equipping their team to use large language models for automated data extraction from survey responses and administrative filings.".into(),
                metrics: vec![
                    metric("3", "DAY PROGRAMME"),
                    metric("40+", "STATISTICIANS TRAINED"),
                    metric("LLM", "FOCUS AREA"),
                ],
            },
            related_data_products: vec![],
            cta_headline: "Want your team to work with frontier tools?".into(),
            cta_description: "Tell us about your team's needs. We will design a programme that builds real capability.".into(),
        },
    ]
}

/// Look up a service by slug.
pub fn service_by_slug(slug: &str) -> Option<Service> {
    services().into_iter().find(|s| s.slug == slug)
}

/// Name + slug pairs for every service, used by cross-service navigation.
pub fn all_service_links() -> Vec<RelatedLink> {
    services()
        .into_iter()
        .map(|s| RelatedLink {
            name: s.title,
            slug: s.slug,
        })
        .collect()
}

/// Client segments shown on the services index.
pub fn client_segments() -> Vec<(String, String)> {
    vec![
        (
            "Governments".into(),
            "Treasuries, policy units, and ministerial offices across the G7 and G20".into(),
        ),
        (
            "Central Banks".into(),
            "Monetary policy teams, research departments, and financial stability units".into(),
        ),
        (
            "Statistical Agencies".into(),
            "National statistics offices, survey methodology teams, and data dissemination units".into(),
        ),
        (
            "Institutional Investors".into(),
            "Asset managers, hedge funds, and sovereign wealth funds".into(),
        ),
    ]
}

/// Engagement model specification tiles shown on the services index.
pub fn engagement_model_specs() -> Vec<Spec> {
    vec![
        Spec::new("TEAM SIZE", "2–4 PhD Economists"),
        Spec::new("TYPICAL TIMELINE", "8 Weeks"),
        Spec::new("DELIVERABLES", "Models, Datasets, Board Briefs"),
        Spec::new("ENGAGEMENT START", "Scoping Call + Proposal"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_services_ordered() {
        let all = services();
        assert_eq!(all.len(), 4);
        let orders: Vec<u32> = all.iter().map(|s| s.order).collect();
        assert_eq!(orders, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_every_service_has_a_core_method_step() {
        for service in services() {
            assert_eq!(
                service.methodology.iter().filter(|s| s.is_core).count(),
                1,
                "{} should highlight exactly one core step",
                service.slug
            );
        }
    }

    #[test]
    fn test_lookup_by_slug() {
        assert_eq!(
            service_by_slug("policy-analysis").unwrap().title,
            "Policy Analysis"
        );
        assert!(service_by_slug("nope").is_none());
    }

    #[test]
    fn test_all_service_links() {
        let links = all_service_links();
        assert_eq!(links.len(), 4);
        assert_eq!(links[0].slug, "economic-consulting");
    }

    #[test]
    fn test_training_has_no_related_products() {
        let training = service_by_slug("training-workshops").unwrap();
        assert!(training.related_data_products.is_empty());
    }
}
