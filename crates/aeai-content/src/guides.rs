//! Lab guides: fallback content for the lab pages.

use aeai_core::model::{Guide, GuideDetail};
use aeai_core::util::title_from_slug;

/// Guides shown on the lab page, in display order.
pub fn guides() -> Vec<Guide> {
    vec![
        Guide {
            title: "Using Generative AI in Economics Research".into(),
            slug: "generative-ai-economics".into(),
            summary: "A practical guide to deploying large language models for data extraction, classification, and construction in applied economics research.".into(),
        },
        Guide {
            title: "Cloud Computing for Economists".into(),
            slug: "cloud-computing".into(),
            summary: "Setting up and using cloud infrastructure for large-scale data processing — from basic compute instances to distributed pipelines.".into(),
        },
        Guide {
            title: "Working with Administrative Data".into(),
            slug: "administrative-data".into(),
            summary: "Best practices for using administrative records in economic research, including data access, linking, and common pitfalls.".into(),
        },
        Guide {
            title: "Reproducible Research Workflows".into(),
            slug: "reproducible-workflows".into(),
            summary: "How to structure your research project for reproducibility using version control, containerisation, and documentation standards.".into(),
        },
    ]
}

/// Full fallback record for a guide detail page.
///
/// Unknown slugs get a placeholder record titled from the slug.
pub fn guide_detail(slug: &str) -> GuideDetail {
    match slug {
        "generative-ai-economics" => GuideDetail {
            title: "Using Generative AI in Economics Research".into(),
            summary: "A practical guide to deploying large language models for data extraction, classification, and construction in applied economics research.".into(),
            body: r##"# Using Generative AI in Economics Research

Large language models have opened a new frontier for economic measurement: data that was trapped in unstructured text can now be extracted, classified, and structured at scale. This guide covers the practical workflow we use to build research-grade datasets with generative AI.

## When LLMs Are the Right Tool

LLMs excel where the task requires reading comprehension rather than arithmetic: classifying free-text job postings, extracting fields from scanned filings, normalising entity names across archives. They are the wrong tool for numerical computation, exact matching, and anything you can do with a deterministic parser.

## The Extraction Workflow

- Define the target schema before touching a model
- Build a human-labelled validation set first
- Start with a small prompt-engineering loop on a few hundred examples
- Scale up only once accuracy on held-out labels is stable

**Validation is the work:** An extraction pipeline without ground-truth validation is a liability, not a dataset. Our production classifiers are validated against tens of thousands of human labels before any analytical use.

## Prompt Engineering for Measurement

Treat prompts as code: version them, test them, and change one thing at a time. Ensemble approaches — several prompt variants voting on each record — materially improve precision on ambiguous inputs, and disagreement rates are themselves a useful quality signal.

## Cost and Reproducibility

Pin model versions and temperatures, cache raw responses, and log every request. Model updates silently change behaviour; a dataset you cannot regenerate is a dataset you cannot defend in peer review.

## Conclusion

Generative AI rewards the same habits that good empirical economics always has: clear definitions, honest validation, and meticulous documentation."##.into(),
            authors: vec!["Dr. Peter Lambert".into()],
        },
        "cloud-computing" => GuideDetail {
            title: "Cloud Computing for Economists".into(),
            summary: "Setting up and using cloud infrastructure for large-scale data processing — from basic compute instances to distributed pipelines.".into(),
            body: r##"# Cloud Computing for Economists

Processing hundreds of millions of records does not fit on a laptop. This guide walks through the cloud-computing concepts an economics team needs to move from desktop tools to production-grade data pipelines.

## Why the Cloud

- Elastic compute: rent a large machine for an afternoon instead of buying one
- Storage that scales past what any workstation holds
- Managed services for databases, queues, and batch processing

## Picking a Starting Point

All three major providers (AWS, GCP, Azure) cover the same ground. Pick whichever your institution already has agreements with; the concepts transfer. Begin with a single virtual machine and object storage before touching anything distributed.

## A Minimal Research Setup

**Core components:**
- One compute instance sized for your largest job
- An object-storage bucket for raw and processed data
- A container image that pins your environment

Keep raw data immutable in storage and treat compute as disposable: any machine should be rebuildable from a script in minutes.

## Scaling Up

When one machine stops being enough, scale out with batch services rather than hand-managed clusters. Embarrassingly parallel workloads — per-document extraction, per-file parsing — map cleanly onto managed batch queues.

## Cost Management

Set billing alerts on day one. Shut instances down when idle, use spot capacity for restartable jobs, and remember that storage is cheap but egress is not.

## Conclusion

Cloud infrastructure is a research skill like econometrics: a modest upfront investment that permanently expands the questions you can answer."##.into(),
            authors: vec!["Applied Economics Team".into()],
        },
        "administrative-data" => GuideDetail {
            title: "Working with Administrative Data".into(),
            summary: "Best practices for using administrative records in economic research, including data access, linking, and common pitfalls.".into(),
            body: r##"# Working with Administrative Data

Administrative data — records collected for administrative purposes like tax records, social security data, and health insurance claims — has revolutionized empirical economics. This guide covers best practices for working with these powerful but complex datasets.

## Advantages of Administrative Data

**Coverage and scale:** Administrative data often covers entire populations, enabling studies of rare events and subgroups.

**Accuracy:** Some variables (like earnings from tax records) are measured with less error than survey responses.

**Longitudinal structure:** Administrative records often span long time periods, enabling studies of lifecycle dynamics.

## Common Data Sources

- Tax records (IRS, SSA)
- Social security and retirement data
- Health insurance claims (Medicare, Medicaid, private)
- Education records (transcript data, student loans)
- Court and criminal justice records
- Unemployment insurance records

## Data Access Considerations

**Restricted access:** Most administrative data requires formal data use agreements and secure computing environments.

**IRB approval:** Research involving identifiable data typically requires Institutional Review Board approval.

**Disclosure review:** Results must often pass disclosure review before publication to prevent re-identification.

## Data Linking

Linking records across datasets and over time is both a key advantage and a major challenge with administrative data.

**Best practices:**
- Use deterministic linking on Social Security Numbers when available
- Apply probabilistic linking methods (e.g., Fellegi-Sunter) when exact identifiers are missing
- Document linking procedures and assess match quality
- Be transparent about linking rates and potential selection

## Common Pitfalls

**Missing data:** Administrative data may have systematic gaps (e.g., self-employed individuals in wage records).

**Measurement concerns:** Administrative definitions may not match economic concepts of interest.

**Selection:** Coverage may change over time or across jurisdictions.

## Conclusion

Administrative data offers tremendous opportunities for economic research, but requires careful attention to data quality, measurement, and access considerations."##.into(),
            authors: vec!["Dr. Sarah Chen".into()],
        },
        "reproducible-workflows" => GuideDetail {
            title: "Reproducible Research Workflows".into(),
            summary: "How to structure your research project for reproducibility using version control, containerization, and documentation standards.".into(),
            body: r##"# Reproducible Research Workflows

Reproducibility is essential for credible science. This guide provides practical recommendations for organizing your research project to ensure that others (and your future self) can reproduce your results.

## Why Reproducibility Matters

- Verification: Others can check your work
- Extension: Researchers can build on your methods
- Efficiency: You can easily revisit and update analyses
- Credibility: Reproducible work is more trustworthy

## Project Organization

A well-organized project structure makes reproducibility easier:

```
project/
├── README.md
├── data/
│   ├── raw/           # Original, immutable data
│   └── processed/     # Cleaned/transformed data
├── code/
│   ├── 01_clean.R     # Data cleaning
│   ├── 02_analyze.R   # Main analysis
│   └── 03_tables.R    # Output generation
├── output/
│   ├── figures/
│   └── tables/
└── docs/
    └── codebook.md
```

## Version Control with Git

Version control is essential for reproducibility. Use Git to:

- Track all changes to code and documentation
- Create a clear history of your project
- Collaborate with coauthors
- Link your code to specific results

**Key practices:**
- Commit frequently with descriptive messages
- Use branches for experimental work
- Tag releases that correspond to paper versions

## Environment Management

Your code should run the same way on any machine. Tools for managing environments include:

- R: renv for package management
- Python: conda or virtualenv
- Cross-language: Docker containers

## Documentation Standards

Good documentation is essential:

- README with project overview and instructions
- Codebook describing all variables
- Comments in code explaining logic
- Clear mapping from code to results

## Automation

Automate your workflow so results can be regenerated with a single command:

- Use makefiles or build tools
- Scripts should run end-to-end without manual intervention
- Document any manual steps that cannot be automated

## Conclusion

Investing in reproducibility pays off through increased credibility, easier collaboration, and reduced time spent recreating analyses."##.into(),
            authors: vec!["Dr. James Wilson".into()],
        },
        "intro-causal-inference" => GuideDetail {
            title: "Introduction to Causal Inference".into(),
            summary: "A practical guide to causal inference methods for applied economists, covering selection on observables, instrumental variables, regression discontinuity, and difference-in-differences.".into(),
            body: r##"# Introduction

Causal inference is at the heart of empirical economics. This guide provides a practical introduction to the core methods used by applied economists to identify causal effects from observational data.

## Why Causal Inference Matters

Most interesting economic questions are causal in nature: Does education increase earnings? Do minimum wage increases reduce employment? Does access to credit help businesses grow?

Answering these questions requires more than establishing correlations — we need to identify causal effects. This guide will help you understand when and how different methods can help achieve causal identification.

## Selection on Observables

The simplest approach to causal inference assumes that, conditional on observed covariates, treatment assignment is as good as random. This is sometimes called "selection on observables" or the "conditional independence assumption."

**Key methods:**
- Regression adjustment
- Matching estimators
- Propensity score methods
- Inverse probability weighting

**When to use:** When you have rich data on all relevant confounders and believe unobserved confounding is minimal.

## Instrumental Variables

Instrumental variables (IV) methods identify causal effects using variation in treatment induced by an "instrument" — a variable that affects treatment but has no direct effect on the outcome.

**Key requirements:**
- Relevance: The instrument affects treatment
- Exclusion: The instrument affects outcomes only through treatment
- Independence: The instrument is as good as randomly assigned

**Common applications:** Natural experiments, policy changes, geographic variation.

## Regression Discontinuity

Regression discontinuity (RD) designs exploit situations where treatment assignment changes discontinuously at some threshold. By comparing units just above and below the threshold, we can identify local treatment effects.

**Key requirements:**
- Treatment assignment based on a continuous running variable with a cutoff
- Units cannot precisely manipulate the running variable
- No other treatments change at the same threshold

## Difference-in-Differences

Difference-in-differences (DiD) compares changes over time between treated and untreated groups. The key assumption is that, absent treatment, both groups would have followed parallel trends.

**Key requirements:**
- Pre-treatment parallel trends
- No anticipation of treatment
- Stable composition of treatment and control groups

## Conclusion

Each method has its strengths and limitations. The best approach depends on your specific setting, data availability, and the assumptions you're willing to make. Good applied work involves carefully thinking through identification and being transparent about potential threats to validity."##.into(),
            authors: vec!["Dr. Emily Zhang".into(), "Dr. Robert Kim".into()],
        },
        other => GuideDetail {
            title: title_from_slug(other),
            summary: "A methodological guide for applied economists.".into(),
            body: "Content coming soon.".into(),
            authors: vec![],
        },
    }
}
