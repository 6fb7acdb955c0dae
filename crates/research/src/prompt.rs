//! Prompt construction for the Kakuro market research task.

/// Build the deep research prompt for the Kakuro puzzle book market.
///
/// Embeds the caller's requirements verbatim between the domain statement
/// and a fixed instruction block. Same input, same output: nothing here is
/// random or time-dependent.
pub fn build_research_prompt(requirements: &str) -> String {
    format!(
        "Perform comprehensive deep research on the Kakuro puzzle book market for Amazon KDP based on the following requirements:

{requirements}

CRITICAL INSTRUCTIONS:
1. Provide SPECIFIC, VERIFIABLE data with sources.
2. For competitors, include actual BSRs, price points, and puzzle counts.
3. For keywords, provide estimated search volumes if available, or at least relative popularity.
4. For pricing, provide a clear recommendation based on current KDP printing costs and competitor ranges.
5. Format the output as a comprehensive markdown report suitable for saving as multiple research documents.

Your response should be structured to address each of the four areas (Competitors, Keywords, Pricing, Trends) in detail."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requirements_embedded_verbatim() {
        let requirements = "Target: 200-puzzle large print book\nCompare against top 10 sellers";
        let prompt = build_research_prompt(requirements);
        assert!(prompt.contains(requirements));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let requirements = "Focus on Q4 seasonal demand";
        assert_eq!(
            build_research_prompt(requirements),
            build_research_prompt(requirements)
        );
    }

    #[test]
    fn test_prompt_names_all_four_areas() {
        let prompt = build_research_prompt("");
        assert!(prompt.contains("Competitors, Keywords, Pricing, Trends"));
    }

    #[test]
    fn test_empty_requirements_still_builds() {
        let prompt = build_research_prompt("");
        assert!(prompt.starts_with("Perform comprehensive deep research"));
        assert!(prompt.contains("CRITICAL INSTRUCTIONS"));
    }
}
