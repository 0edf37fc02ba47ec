//! Team bios for the about page.

use aeai_core::model::TeamMember;

/// Founders and directors, in display order.
pub fn team_members() -> Vec<TeamMember> {
    vec![
        TeamMember {
            name: "Dr. Peter Lambert".into(),
            title: "Director and Co-Founder".into(),
            bio: "Peter is an economist studying organisations, industries, jobs, and economic growth. His research leverages large novel datasets — text, transactions, networks, images — and frontier AI tools to study behaviour within and across organisations. He holds a PhD in Economics from the London School of Economics.".into(),
            photo_url: "/assets/team/peter_john_lambert.webp".into(),
            affiliations: vec![
                "University of Warwick".into(),
                "London School of Economics".into(),
                "Centre for Economic Performance (CEP)".into(),
                "Centre for Macroeconomics (CfM)".into(),
                "CAGE Research Centre".into(),
            ],
            selected_work: vec![
                "AI-Generated Production Networks: Measurement and Applications to Global Trade (2024)".into(),
                "Remote Work across Jobs, Companies, and Space (NBER, 2023) — Best Paper Award, CESifo".into(),
                "Bad Bank, Bad Luck? Evidence from 1 Million Firm-Bank Relationships (2024)".into(),
                "Anatomy of Automation: CNC Machines and Industrial Robots in UK Manufacturing (2025)".into(),
            ],
            selected_presentations: vec![
                "Google DeepMind AI for Social Science Event — keynote on AI/LLMs for economics research".into(),
                "EUR-CEPR Workshop: Trade, Geography, and Industrial Organisation".into(),
            ],
        },
        TeamMember {
            name: "Dr. Yannick Schindler".into(),
            title: "Co-Founder".into(),
            bio: "Yannick is a macroeconomist whose research spans technological change, health economics, and financial markets. He deploys Big Data and AI tools to build novel measurements of the economy from administrative and archival sources. He holds a PhD in Economics from the London School of Economics and previously held positions at Princeton University and the European Central Bank.".into(),
            photo_url: "/assets/team/yannick_schindler.webp".into(),
            affiliations: vec![
                "London School of Economics".into(),
                "Centre for Macroeconomics (CfM)".into(),
            ],
            selected_work: vec![
                "Machinery of Progress: Charting the Capabilities of Capital Equipment, 1998–2023 (2025)".into(),
                "Bad Bank, Bad Luck? Evidence from 1 Million Firm-Lender Relationships (2024)".into(),
                "The Macroeconomic Impact of Chronic Illness in the UK — Journal of the Economics of Ageing (2025)".into(),
                "Prosperity Through Health — policy paper with Sir John Bell and Andrew Scott (2024)".into(),
            ],
            selected_presentations: vec![
                "FDIC, Federal Reserve Bank of Boston, Downing Street Data Science Unit".into(),
                "Stockholm School of Economics, EEA Congress, HM Treasury".into(),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_founders() {
        let team = team_members();
        assert_eq!(team.len(), 2);
        assert!(team[0].title.contains("Co-Founder"));
        assert!(!team[1].affiliations.is_empty());
    }
}
