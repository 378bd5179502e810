use super::policy::{Band, Recommendation, IMPROVEMENT_THRESHOLD, MODERATE_THRESHOLD};
use super::rules::WiscarScores;

pub(crate) fn generate_insights(psychometric: u8, technical: u8, wiscar: &WiscarScores) -> Vec<String> {
    let mut insights = Vec::new();

    insights.push(
        match Band::of(psychometric) {
            Band::Strong => "You demonstrate strong values alignment and motivation for CSR work.",
            Band::Moderate => {
                "You show good potential but may benefit from developing stronger passion for social impact."
            }
            Band::Weak => "Consider exploring whether CSR aligns with your core interests and values.",
        }
        .to_string(),
    );

    insights.push(
        match Band::of(technical) {
            Band::Strong => {
                "You have solid foundational knowledge of CSR and sustainability concepts."
            }
            Band::Moderate => {
                "You have basic knowledge but should strengthen your understanding of ESG frameworks."
            }
            Band::Weak => {
                "You need to build fundamental knowledge in sustainability and CSR practices."
            }
        }
        .to_string(),
    );

    let areas: Vec<&str> = wiscar
        .iter()
        .filter(|(_, score)| *score < MODERATE_THRESHOLD)
        .map(|(dimension, _)| dimension.development_area())
        .collect();
    if !areas.is_empty() {
        insights.push(format!("Focus on developing: {}.", areas.join(", ")));
    }

    insights
}

pub(crate) fn generate_next_steps(
    recommendation: Recommendation,
    psychometric: u8,
    technical: u8,
) -> Vec<String> {
    let steps: Vec<&str> = match recommendation {
        Recommendation::Yes => vec![
            "Begin with GRI certification or impact strategy course",
            "Start following leading CSR professionals on LinkedIn",
            "Look for CSR internship or volunteer opportunities",
        ],
        Recommendation::Maybe => {
            let mut steps = Vec::new();
            if technical < IMPROVEMENT_THRESHOLD {
                steps.push("Enroll in CSR fundamentals course");
                steps.push("Study ESG reporting frameworks (GRI, SASB, TCFD)");
            }
            if psychometric < IMPROVEMENT_THRESHOLD {
                steps.push("Explore volunteer opportunities in sustainability");
                steps.push("Read case studies of successful CSR initiatives");
            }
            steps.push("Connect with CSR professionals for informational interviews");
            steps
        }
        Recommendation::No => vec![
            "Consider alternative careers in sustainability or social impact",
            "Explore roles in ESG data analysis or environmental consulting",
            "Take a foundational course in business ethics or sustainability",
        ],
    };

    steps.into_iter().map(str::to_string).collect()
}

/// Role titles for the confidence band, chosen from the score rather than the verdict.
pub(crate) fn career_alignment(confidence: u8) -> Vec<String> {
    let roles: [&str; 4] = match Band::of(confidence) {
        Band::Strong => [
            "CSR Manager",
            "Sustainability Director",
            "ESG Strategy Lead",
            "Impact Consultant",
        ],
        Band::Moderate => [
            "CSR Coordinator",
            "Sustainability Analyst",
            "ESG Reporting Specialist",
            "Social Impact Associate",
        ],
        Band::Weak => [
            "ESG Data Analyst",
            "Environmental Compliance Officer",
            "Sustainability Coordinator",
            "Social Research Assistant",
        ],
    };

    roles.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform(score: u8) -> WiscarScores {
        WiscarScores {
            will: score,
            interest: score,
            skill: score,
            cognitive: score,
            ability: score,
            role: score,
        }
    }

    #[test]
    fn insights_bucket_each_section_independently() {
        let insights = generate_insights(80, 59, &uniform(60));
        assert_eq!(insights.len(), 2);
        assert!(insights[0].contains("strong values alignment"));
        assert!(insights[1].contains("fundamental knowledge"));

        let insights = generate_insights(60, 79, &uniform(100));
        assert!(insights[0].contains("good potential"));
        assert!(insights[1].contains("basic knowledge"));
    }

    #[test]
    fn weak_dimensions_are_named_in_natural_order() {
        let mut wiscar = uniform(80);
        wiscar.role = 20;
        wiscar.will = 40;
        wiscar.cognitive = 59;

        let insights = generate_insights(90, 90, &wiscar);

        assert_eq!(
            insights.last().map(String::as_str),
            Some(
                "Focus on developing: motivation and initiative, analytical thinking, understanding of CSR roles."
            )
        );
    }

    #[test]
    fn maybe_plan_adds_targeted_steps_below_seventy() {
        let both = generate_next_steps(Recommendation::Maybe, 69, 69);
        assert_eq!(both.len(), 5);
        assert_eq!(both[0], "Enroll in CSR fundamentals course");
        assert_eq!(both[2], "Explore volunteer opportunities in sustainability");
        assert_eq!(
            both[4],
            "Connect with CSR professionals for informational interviews"
        );

        let technical_only = generate_next_steps(Recommendation::Maybe, 70, 40);
        assert_eq!(technical_only.len(), 3);
        assert_eq!(
            technical_only[1],
            "Study ESG reporting frameworks (GRI, SASB, TCFD)"
        );

        let neither = generate_next_steps(Recommendation::Maybe, 70, 70);
        assert_eq!(
            neither,
            vec!["Connect with CSR professionals for informational interviews".to_string()]
        );
    }

    #[test]
    fn yes_and_no_plans_are_fixed() {
        let yes = generate_next_steps(Recommendation::Yes, 0, 0);
        assert_eq!(yes.len(), 3);
        assert!(yes[0].contains("GRI certification"));

        let no = generate_next_steps(Recommendation::No, 100, 100);
        assert_eq!(no.len(), 3);
        assert!(no[0].contains("alternative careers"));
    }

    #[test]
    fn career_tracks_follow_confidence_bands() {
        assert_eq!(career_alignment(80)[0], "CSR Manager");
        assert_eq!(career_alignment(79)[0], "CSR Coordinator");
        assert_eq!(career_alignment(60)[3], "Social Impact Associate");
        assert_eq!(career_alignment(59)[0], "ESG Data Analyst");
        assert_eq!(career_alignment(0).len(), 4);
    }
}
