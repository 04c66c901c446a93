//! Static guidance text for each BMI category

use crate::bmi::BmiCategory;
use serde::Serialize;

/// Diet and general health guidance for a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Advisory {
    pub diet: &'static str,
    pub health: &'static str,
}

impl Advisory {
    /// Render as two labelled lines
    pub fn render_text(&self) -> String {
        format!("Diet: {}\nHealth: {}", self.diet, self.health)
    }
}

/// Short explanation of what the category means
pub fn description_for(category: BmiCategory) -> &'static str {
    match category {
        BmiCategory::Underweight => {
            "You are in the underweight range. It's important to eat a balanced diet."
        }
        BmiCategory::Normal => "You are in the healthy weight range. Keep up the good work!",
        BmiCategory::Overweight => "You are in the overweight range. Regular exercise can help.",
        BmiCategory::Obese => "You are in the obese range. Please consult a healthcare provider.",
    }
}

/// Diet and health suggestions for the category
pub fn advisory_for(category: BmiCategory) -> Advisory {
    match category {
        BmiCategory::Underweight => Advisory {
            diet: "Focus on nutrient-dense foods. Add healthy fats like avocados, nuts, and olive oil. \
                   Include more protein (lean meats, beans) to build muscle.",
            health: "Aim for strength training exercises to build muscle mass rather than just body fat.",
        },
        BmiCategory::Normal => Advisory {
            diet: "Maintain your balance with a diet rich in fruits, vegetables, whole grains, and lean proteins.",
            health: "Regular moderate physical activity is key to keeping your heart and body healthy.",
        },
        BmiCategory::Overweight => Advisory {
            diet: "Incorporate more fiber-rich vegetables and whole grains. \
                   Try portion control and reducing sugary drinks.",
            health: "Aim for 150 minutes of moderate activity per week, like brisk walking or swimming.",
        },
        BmiCategory::Obese => Advisory {
            diet: "Focus on whole, unprocessed foods. \
                   Reducing daily calorie intake by 500-1000 calories can help safe weight loss.",
            health: "Consult a healthcare provider for a personalized plan. \
                     Low-impact exercises like walking or water aerobics are great starts.",
        },
    }
}
