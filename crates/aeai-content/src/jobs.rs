//! Job postings: fallback content for the careers pages.

use aeai_core::model::{EmploymentType, Job, JobDetail};
use aeai_core::util::title_from_slug;

/// Open positions for the careers listing.
pub fn jobs() -> Vec<Job> {
    vec![
        Job {
            title: "Data Analyst".into(),
            slug: "data-analyst".into(),
            location: "London".into(),
            kind: EmploymentType::FullTime,
            department: Some("Data Products".into()),
            featured: true,
        },
        Job {
            title: "Data Engineer".into(),
            slug: "data-engineer".into(),
            location: "London".into(),
            kind: EmploymentType::FullTime,
            department: Some("Data Products".into()),
            featured: true,
        },
        Job {
            title: "Summer Research Fellow".into(),
            slug: "summer-research-fellow".into(),
            location: "London".into(),
            kind: EmploymentType::Fellowship,
            department: Some("AEAI Lab".into()),
            featured: false,
        },
    ]
}

/// Full fallback record for a job detail page.
///
/// Unknown slugs get a generic record titled from the slug.
pub fn job_detail(slug: &str) -> JobDetail {
    match slug {
        "data-analyst" => JobDetail {
            title: "Data Analyst".into(),
            location: "London".into(),
            kind: EmploymentType::FullTime,
            department: Some("Data Products".into()),
            description: "We are looking for a Data Analyst to join our team building novel economic datasets from unconventional sources. You will work directly with our founders on data construction, validation, and analysis for both commercial data products and consulting engagements.\n\nThis role involves processing and analysing large-scale datasets — from millions of archival documents to hundreds of millions of job postings. You will develop and run data pipelines, perform quality assurance on AI-extracted data, conduct exploratory analysis, and produce visualisations and summary statistics for clients and research papers.\n\nThis is an opportunity to work at the intersection of academic economics and frontier AI, producing datasets that are used by governments, central banks, and investors worldwide.".into(),
            requirements: "**Required Qualifications:**\n- Bachelor's or Master's degree in Economics, Statistics, Data Science, or a related quantitative field\n- Strong programming skills in Python or R\n- Experience with data manipulation and analysis (pandas, tidyverse, or similar)\n- Familiarity with SQL and working with large datasets\n- Strong attention to detail and commitment to data quality\n\n**Preferred Qualifications:**\n- Experience with NLP or text data\n- Familiarity with cloud computing (AWS, GCP, or Azure)\n- Knowledge of econometric methods\n- Interest in applied economics or policy research".into(),
            apply_url: Some("mailto:team@appliedeconomics.ai?subject=Data%20Analyst%20Application".into()),
        },
        "data-engineer" => JobDetail {
            title: "Data Engineer".into(),
            location: "London".into(),
            kind: EmploymentType::FullTime,
            department: Some("Data Products".into()),
            description: "We are hiring a Data Engineer to build and maintain the infrastructure behind our flagship data products. Our datasets are constructed from hundreds of millions of records using AI pipelines — and we need someone to make these pipelines robust, scalable, and reproducible.\n\nYou will design data architectures, build ETL pipelines for processing large-scale unstructured data, deploy and monitor AI extraction workflows, and ensure our data products meet the quality and reliability standards expected by institutional clients. You will work closely with our economists and researchers to translate analytical requirements into production-grade data systems.\n\nOur current stack involves Python, cloud infrastructure, LLM APIs, and both structured and unstructured data stores. We value pragmatic engineering over theoretical perfection — systems that work reliably at scale.".into(),
            requirements: "**Required Qualifications:**\n- Bachelor's or Master's degree in Computer Science, Data Engineering, or a related technical field\n- 2+ years of professional experience in data engineering or backend development\n- Strong Python skills and experience building data pipelines\n- Experience with cloud platforms (AWS, GCP, or Azure)\n- Familiarity with SQL and NoSQL databases\n\n**Preferred Qualifications:**\n- Experience with LLM APIs and AI/ML pipelines\n- Knowledge of containerisation (Docker) and orchestration tools\n- Experience processing unstructured data (text, PDFs, scanned documents)\n- Familiarity with data quality frameworks and monitoring\n- Interest in economics, social science, or policy".into(),
            apply_url: Some("mailto:team@appliedeconomics.ai?subject=Data%20Engineer%20Application".into()),
        },
        "summer-research-fellow" => JobDetail {
            title: "Summer Research Fellow".into(),
            location: "London".into(),
            kind: EmploymentType::Fellowship,
            department: Some("AEAI Lab".into()),
            description: "The AEAI Lab summer fellowship is an intensive research programme for early-career economists and data scientists who want to gain hands-on experience with frontier AI methods applied to economics research.\n\nFellows work alongside our senior researchers on real data construction and analysis projects. Past projects have involved deploying large language models to extract structured data from archival documents, building classification pipelines for large-scale text data, and conducting causal inference analysis on novel datasets.\n\nThe programme provides training in practical skills that are increasingly essential for applied economics research: LLM deployment, cloud computing, reproducible workflows, and working with unconventional data sources at scale.".into(),
            requirements: "**Required Qualifications:**\n- Currently enrolled in or recently completed a Master's or PhD programme in Economics, Data Science, or a related quantitative field\n- Programming experience in Python or R\n- Strong interest in applied economics research\n- Intellectual curiosity and willingness to learn new tools\n\n**Preferred Qualifications:**\n- Experience with machine learning or NLP\n- Familiarity with cloud computing\n- Prior research experience\n- Interest in labour economics, trade, macro, or financial economics".into(),
            apply_url: Some("mailto:team@appliedeconomics.ai?subject=Summer%20Fellowship%20Application".into()),
        },
        other => JobDetail {
            title: title_from_slug(other),
            location: "London".into(),
            kind: EmploymentType::FullTime,
            department: Some("Applied Economics AI".into()),
            description: "We are looking for talented individuals to join our team. Please contact us at team@appliedeconomics.ai for more information about this position.".into(),
            requirements: "Requirements will be discussed during the application process.".into(),
            apply_url: None,
        },
    }
}
