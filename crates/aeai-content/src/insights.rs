//! Insight articles: hand-written copy for the insights pages.

use aeai_core::model::{Author, Insight, Topic};
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn author_schindler() -> Author {
    Author {
        name: "Yannick Schindler".into(),
        title: "Director of Research".into(),
        bio: "Yannick leads research at Applied Economics, specialising in labour market analytics and the application of alternative data to economic measurement. His work has been cited by central banks, government departments, and leading academic journals.".into(),
        slug: "yannick-schindler".into(),
        photo_url: Some("/assets/team/yannick_schindler.webp".into()),
    }
}

fn author_team() -> Author {
    Author {
        name: "Applied Economics Team".into(),
        title: "Research Division".into(),
        bio: "The Applied Economics research team combines expertise in economics, data science, and public policy to produce actionable insights for decision-makers in government and industry.".into(),
        slug: "applied-economics-team".into(),
        photo_url: None,
    }
}

fn topic(name: &str, slug: &str) -> Topic {
    Topic::new(name, slug)
}

/// All insight articles, newest first.
pub fn insights() -> Vec<Insight> {
    vec![
        Insight {
            title: "AEAI Provides Expert Evidence on AI in Government to Parliamentary Committee".into(),
            slug: "parliamentary-evidence".into(),
            excerpt: "Our team presented findings on the role of artificial intelligence in public sector decision-making, covering both the opportunities and the structural risks that policymakers must navigate.".into(),
            published_at: date(2025, 2, 10),
            read_time: 8,
            featured: true,
            topics: vec![topic("AI & Policy", "ai-policy"), topic("Government", "government")],
            authors: vec![author_schindler()],
            body: r#"## The Invitation

In January 2025, the House of Commons Science, Innovation and Technology Committee invited Applied Economics to provide expert evidence on the deployment of artificial intelligence in UK government departments. The inquiry focused on a central question: how should the public sector adopt AI tools without compromising accountability, equity, or the quality of decisions that affect millions of citizens?

Our evidence drew on two years of research into algorithmic decision-making in public services, supported by data from our Administrative Data Analytics Platform.

## What We Presented

Our testimony covered three areas where AI intersects with government operations in ways that demand careful attention.

### Algorithmic Bias in Welfare Administration

We presented evidence showing that machine learning models used in benefits eligibility assessments exhibit measurable demographic bias. Our analysis of over 2 million DWP decisions between 2019 and 2024 found that automated screening tools were 23% more likely to flag applications from claimants in the lowest income decile for manual review, even after controlling for all stated eligibility criteria.

> The problem is not that algorithms are biased by design. The problem is that they are trained on historically biased decisions, and without rigorous audit frameworks, these patterns become invisible and self-reinforcing.

### Data Infrastructure Gaps

UK government departments operate over 1,200 distinct data systems, many of which cannot communicate with each other. This fragmentation means that the training data available for AI models is incomplete, inconsistent, and often outdated. We argued that no amount of algorithmic sophistication can compensate for poor data infrastructure.

### The Case for Algorithmic Auditing

We proposed a framework for mandatory algorithmic impact assessments, modelled on environmental impact assessments. The framework includes pre-deployment bias testing, ongoing performance monitoring disaggregated by protected characteristics, and public reporting requirements.

## Committee Response

The committee expressed particular interest in our data on bias in welfare administration, and several members asked follow-up questions about the feasibility of mandatory auditing. The committee chair noted that our evidence was "among the most specific and data-grounded submissions the committee has received."

## What This Means

Parliamentary inquiries shape legislation. The evidence we provided will inform the committee's forthcoming report on AI governance, expected in spring 2025. We will continue to engage with policymakers to ensure that data-driven insights inform the regulatory framework for AI in government.

The full written evidence submission is available on the UK Parliament website."#.into(),
        },
        Insight {
            title: "VoxEU Article Reveals Remote Worker Migration Reshaping US Electoral Map".into(),
            slug: "voxeu-remote-workers".into(),
            excerpt: "New research documents the blue-to-red state exodus among remote workers ahead of the 2024 election, with implications for political representation and local economies.".into(),
            published_at: date(2024, 11, 1),
            read_time: 12,
            featured: true,
            topics: vec![
                topic("Remote Work", "remote-work"),
                topic("Migration", "migration"),
                topic("Labour Markets", "labour-markets"),
            ],
            authors: vec![author_schindler()],
            body: r#"## The Migration Pattern

Our latest research, published as a VoxEU column, documents a significant and largely unexamined shift in American political geography: the systematic migration of remote workers from high-cost, politically blue states to lower-cost, politically red states.

Using data from our Job Postings Analytics Network (AIPNET), supplemented with Census Bureau migration statistics and voter registration records, we tracked the movement of approximately 2.3 million remote-capable workers between 2020 and 2024.

## Key Findings

### The Scale of Movement

Between 2020 and 2024, net domestic migration from the five largest blue states (California, New York, Illinois, New Jersey, Massachusetts) to red-leaning states totalled approximately 1.8 million people. Of these, our analysis estimates that 680,000 were remote workers whose relocation was directly enabled by employer flexibility policies adopted during and after the pandemic.

### Where They Went

The top destination states for remote worker migration were:

1. **Florida** — 184,000 net remote worker arrivals
2. **Texas** — 167,000
3. **Tennessee** — 52,000
4. **North Carolina** — 48,000
5. **Arizona** — 41,000

### The Income Effect

Remote workers who relocated earned, on average, 34% more than the median income in their destination counties. This income premium has measurable effects on local housing markets, tax revenues, and consumer spending patterns.

> Remote work did not just change where people work. It changed where economic and political power concentrates. The implications for congressional apportionment after the 2030 Census could be substantial.

## Political Implications

The electoral implications are significant. Using precinct-level voter registration data, we estimate that remote worker migration shifted the effective electorate in several swing counties. In Maricopa County, Arizona — decided by fewer than 12,000 votes in 2020 — our models estimate that remote worker in-migration added approximately 8,000 new registered voters by 2024, with a partisan lean that differs significantly from the existing electorate.

We are careful to note that migration does not mechanically translate into vote changes. Many remote workers maintain political affiliations that differ from their destination communities. The research documents the demographic shift, not a prediction of electoral outcomes.

## Methodology

The analysis combines three data sources:

1. **AIPNET job postings data** — to identify remote-eligible positions and track where remote job holders are located
2. **Census Bureau ACS and migration data** — for baseline population flows
3. **State voter registration files** — for party affiliation patterns among new registrants

The full methodology is available in the VoxEU column and the accompanying technical appendix.

## Why This Matters

This research matters because the political geography of the United States is being quietly redrawn by economic forces that have little to do with ideology. Understanding these patterns is essential for anyone making decisions that depend on demographic projections — from congressional redistricting to infrastructure investment to retail site selection.

The full VoxEU column is available online."#.into(),
        },
        Insight {
            title: "AEAI Presenting at Google DeepMind / ESRC Conference".into(),
            slug: "deepmind-esrc-conference".into(),
            excerpt: "A range of our data products and research projects are featured at this year's joint conference on AI and economic measurement.".into(),
            published_at: date(2024, 10, 15),
            read_time: 5,
            featured: false,
            topics: vec![
                topic("Conferences", "conferences"),
                topic("Data Products", "data-products"),
                topic("AI & Policy", "ai-policy"),
            ],
            authors: vec![author_team()],
            body: r#"## The Conference

Applied Economics is presenting at the 2024 Google DeepMind and ESRC joint conference on "AI for Economic Measurement," held at the Google DeepMind offices in London. The conference brings together researchers from academia, government statistical agencies, and the private sector to examine how artificial intelligence and large-scale data can improve economic measurement.

## Our Presentations

We are presenting three pieces of work at this year's conference.

### Real-Time Labour Market Indicators from Job Postings

Our lead presentation covers the methodology behind AIPNET, our flagship job postings analytics platform. The talk demonstrates how natural language processing applied to 250 million online job advertisements can produce labour market indicators that are more timely, more granular, and in many cases more accurate than traditional survey-based statistics.

The presentation includes a live comparison of AIPNET's occupational demand indices against the Office for National Statistics' Labour Force Survey, showing that our indicators lead official statistics by approximately 45 days.

### Measuring the AI Skills Transition

Our second presentation focuses on a new research project tracking the adoption of AI-related skills across the UK economy. Using AIPNET data, we have constructed a taxonomy of 847 AI-adjacent skills and tracked their prevalence in job postings from 2018 to 2024. The data reveals sharp sectoral differences in AI adoption rates, with financial services and technology leading, and construction and hospitality significantly behind.

### Administrative Data Linkage for Policy Evaluation

Our third presentation, delivered in collaboration with a UK government department, demonstrates a privacy-preserving methodology for linking administrative datasets across agencies. The approach uses secure multi-party computation to enable cross-departmental analysis without any single party having access to the combined individual-level data.

## Why Conferences Matter

Academic and policy conferences are where research becomes practice. The connections formed at events like this one lead directly to new data partnerships, research collaborations, and — most importantly — better policy decisions informed by better data.

We will publish detailed summaries of each presentation in the coming weeks."#.into(),
        },
    ]
}

/// Look up an insight by slug.
pub fn insight_by_slug(slug: &str) -> Option<Insight> {
    insights().into_iter().find(|i| i.slug == slug)
}

/// Related articles for a slug: ranked by topic overlap, then recency.
///
/// Unknown slugs fall back to the newest `limit` articles.
pub fn related_insights(current_slug: &str, limit: usize) -> Vec<Insight> {
    let all = insights();
    let Some(current) = all.iter().find(|i| i.slug == current_slug) else {
        return all.into_iter().take(limit).collect();
    };
    let current = current.clone();

    let mut related: Vec<Insight> = all
        .into_iter()
        .filter(|i| i.slug != current_slug)
        .collect();
    related.sort_by(|a, b| {
        let overlap_a = current.topic_overlap(a);
        let overlap_b = current.topic_overlap(b);
        overlap_b
            .cmp(&overlap_a)
            .then(b.published_at.cmp(&a.published_at))
    });
    related.truncate(limit);
    related
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insights_present_and_dated() {
        let all = insights();
        assert_eq!(all.len(), 3);
        // Newest first in the authored order.
        assert!(all[0].published_at > all[1].published_at);
        assert!(all[1].published_at > all[2].published_at);
    }

    #[test]
    fn test_lookup_by_slug() {
        let article = insight_by_slug("voxeu-remote-workers").unwrap();
        assert_eq!(article.read_time, 12);
        assert_eq!(article.topics.len(), 3);
        assert!(insight_by_slug("missing").is_none());
    }

    #[test]
    fn test_related_ranked_by_topic_overlap() {
        // parliamentary-evidence shares "ai-policy" with the conference
        // article and nothing with the VoxEU article.
        let related = related_insights("parliamentary-evidence", 3);
        assert_eq!(related.len(), 2);
        assert_eq!(related[0].slug, "deepmind-esrc-conference");
        assert_eq!(related[1].slug, "voxeu-remote-workers");
    }

    #[test]
    fn test_related_unknown_slug_falls_back_to_newest() {
        let related = related_insights("nope", 2);
        assert_eq!(related.len(), 2);
        assert_eq!(related[0].slug, "parliamentary-evidence");
    }

    #[test]
    fn test_related_excludes_current() {
        let related = related_insights("voxeu-remote-workers", 3);
        assert!(related.iter().all(|i| i.slug != "voxeu-remote-workers"));
    }
}
