//! Natural-language prompts sent to the advisory oracle. Both prompts ask
//! for machine-readable output only; decoding stays strict on our side.

use crate::recommendation::domain::UserProfile;

fn or_unspecified(value: Option<&str>) -> &str {
    match value {
        Some(text) if !text.trim().is_empty() => text,
        _ => "Not specified",
    }
}

fn joined_or_unspecified(tags: &[String]) -> String {
    if tags.is_empty() {
        "Not specified".to_string()
    } else {
        tags.join(", ")
    }
}

/// Prompt asking for an eight-field criteria-weight object with a brief
/// rationale.
pub fn weight_prompt(profile: &UserProfile) -> String {
    format!(
        r#"You are a real estate recommendation expert. Based on the user profile below, determine the optimal weights for property recommendation criteria. The weights must sum to exactly 1.0.

User Profile:
- Job: {job}
- Age: {age}
- Income: {income}
- Budget/Fund: {fund}
- Purchase Plan: {plan}
- Property Type Preference: {variety}
- Time Frame: {time}
- Preferred Location: {location}
- Facility Preferences: {facility}

Consider these factors when determining weights:
1. Young professionals (18-30) typically prioritize location and price
2. Families (30-45) often value building area and facilities
3. Investors may prioritize price and location for ROI
4. High-income users might prioritize location and quality over price
5. Urgent buyers (< 1 year) prioritize availability and location
6. Long-term planners might focus more on investment potential

Criteria to weight:
- price: How important is the property price/budget match
- location: How important is the location preference
- category: How important is the property type match
- landArea: How important is the land size
- buildingArea: How important is the building size
- income: How important is income-to-property alignment
- plan: How important is the purchase plan compatibility
- time: How important is the time frame alignment

Return ONLY a valid JSON object with the weights, no other text:
{{
  "price": 0.xx,
  "location": 0.xx,
  "category": 0.xx,
  "landArea": 0.xx,
  "buildingArea": 0.xx,
  "income": 0.xx,
  "plan": 0.xx,
  "time": 0.xx,
  "reasoning": "Brief explanation of the weight distribution"
}}

Ensure all weights are between 0.05 and 0.4, and the sum equals exactly 1.0.
"#,
        job = or_unspecified(profile.job.as_deref()),
        age = or_unspecified(profile.age.map(|age| age.label())),
        income = or_unspecified(profile.income.map(|income| income.label())),
        fund = or_unspecified(profile.fund.map(|fund| fund.label())),
        plan = or_unspecified(profile.plan.map(|plan| plan.label())),
        variety = joined_or_unspecified(&profile.variety),
        time = or_unspecified(profile.time.map(|time| time.label())),
        location = or_unspecified(profile.location.as_deref()),
        facility = joined_or_unspecified(&profile.facility),
    )
}

/// Prompt asking for exactly one investor-archetype token.
pub fn investor_type_prompt(profile: &UserProfile) -> String {
    format!(
        r#"You are analyzing a user profile for property investment classification. You must respond with EXACTLY ONE of these five options:

private_investor
corporate_developer
strategic_partner
public_planner
urban_visionary

User Profile:
- Age: {age}
- Job: {job}
- Income: {income}
- Investment Fund: {fund}
- Payment Plan: {plan}
- Property Types: {variety}
- Timeline: {time}
- Location: {location}
- Facilities: {facility}

Classification Rules:
- private_investor: Individual investors, employees, students, nurses with personal funds
- corporate_developer: Business owners with large funds (>100M), developers, large-scale projects
- strategic_partner: Engineers, professionals seeking partnerships, B2B focus
- public_planner: Educators, government workers, those interested in HGB/land rights
- urban_visionary: Mixed-use property interest, public transport focus, modern development

Respond with only one of the five exact terms above. No explanation, no punctuation, no additional text."#,
        age = or_unspecified(profile.age.map(|age| age.label())),
        job = or_unspecified(profile.job.as_deref()),
        income = or_unspecified(profile.income.map(|income| income.label())),
        fund = or_unspecified(profile.fund.map(|fund| fund.label())),
        plan = or_unspecified(profile.plan.map(|plan| plan.label())),
        variety = joined_or_unspecified(&profile.variety),
        time = or_unspecified(profile.time.map(|time| time.label())),
        location = or_unspecified(profile.location.as_deref()),
        facility = joined_or_unspecified(&profile.facility),
    )
}
