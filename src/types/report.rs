use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Band {
    Low,
    Moderate,
    High,
}

impl Band {
    pub fn label(&self) -> &'static str {
        match self {
            Band::Low => "AQ-Low",
            Band::Moderate => "AQ-Moderate",
            Band::High => "AQ-High",
        }
    }

    pub fn feedback(&self) -> &'static str {
        match self {
            Band::Low => {
                "Your adaptability is relatively lower. You may tend to prefer routine \
                 and find it challenging when faced with unexpected changes. Focus on \
                 developing your flexibility and openness to new experiences."
            }
            Band::Moderate => {
                "Your adaptability is moderate. You show some willingness to adjust to \
                 change, but there's room to grow. Continue to practice stepping outside \
                 your comfort zone and embracing new opportunities."
            }
            Band::High => {
                "Your adaptability is high! You demonstrate a strong ability to thrive \
                 in changing circumstances. Maintain your open-mindedness and continue \
                 to seek out challenges that will further enhance your adaptability."
            }
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    pub total: u32,
    pub max: u32,
    // Unrounded; renderers round to two decimals for display.
    pub percentage: f64,
    pub band: Band,
    pub generated_at: DateTime<Utc>,
}
