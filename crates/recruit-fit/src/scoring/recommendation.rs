use super::domain::FitTier;

/// Short suggestion shown next to a school's tier badge.
pub fn get_fit_score_recommendation(score: f64, tier: FitTier) -> String {
    match tier {
        FitTier::Match => {
            "Excellent fit! This program lines up well with your athletic and academic profile."
                .to_string()
        }
        FitTier::Safety => {
            "Good safety option. You are a strong candidate here, keep it on your list."
                .to_string()
        }
        FitTier::Reach => format!(
            "Reach school ({score:.0}/100). A roster spot is possible with strong film, \
             grades, and consistent coach contact."
        ),
        FitTier::Unlikely => {
            "This program is not a strong fit based on current data. Focus on better-matched schools."
                .to_string()
        }
    }
}
