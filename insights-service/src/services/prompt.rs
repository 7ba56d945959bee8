//! Prompt construction for the market insights request.
//!
//! Both strings are fixed except for the interpolated region, so the same
//! region always produces the same outbound payload.

/// Role, assumptions and output contract given to the model.
pub const SYSTEM_INSTRUCTION: &str = "\
You are an expert market research analyst specializing in Indian artisan crafts.
Your goal is to provide **actionable, data-driven insights** for artisans to help them boost sales and plan for upcoming festive seasons.
You must consider regional preferences, seasonal trends, and marketing opportunities.
Provide the output strictly in the JSON format specified by the user.
Assume today is September 19, 2025, and it is the peak festive season leading up to Dasara and Diwali.
Focus on practical suggestions that local artisans can implement immediately.
";

/// MIME type requested through `generationConfig.responseMimeType`.
pub const RESPONSE_MIME_TYPE: &str = "application/json";

/// System and user text for one insights request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system_instruction: String,
    pub user_query: String,
}

impl Prompt {
    pub fn for_region(region: &str) -> Self {
        Prompt {
            system_instruction: SYSTEM_INSTRUCTION.to_string(),
            user_query: user_query(region),
        }
    }
}

fn user_query(region: &str) -> String {
    format!(
        r#"For the region of {region}, generate market insights for local artisans.
Provide your output strictly as a JSON object with the following keys:

{{
  "popular_crafts": [
    {{
      "craft_name": "Name of the craft",
      "description": "Short explanation of why this craft is popular in the region."
    }}
  ],
  "trending_products": [
    {{
      "product_type": "Specific product type",
      "reasoning": "Explanation of why this product is trending in the region now."
    }}
  ],
  "marketing_angle": "A clear marketing recommendation tailored for local artisans."
}}

Provide 2–4 popular crafts, 2–4 trending products, and a detailed marketing_angle.
Do not include any extra text outside the JSON object."#
    )
}
