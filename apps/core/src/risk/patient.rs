use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::AppError;

/// Thalassemia test result, encoded 3/6/7 on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Thal {
    Normal,
    FixedDefect,
    ReversibleDefect,
}

impl TryFrom<u8> for Thal {
    type Error = AppError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            3 => Ok(Thal::Normal),
            6 => Ok(Thal::FixedDefect),
            7 => Ok(Thal::ReversibleDefect),
            other => Err(AppError::Validation(format!(
                "thal must be 3, 6 or 7, got {}",
                other
            ))),
        }
    }
}

impl From<Thal> for u8 {
    fn from(thal: Thal) -> Self {
        match thal {
            Thal::Normal => 3,
            Thal::FixedDefect => 6,
            Thal::ReversibleDefect => 7,
        }
    }
}

/// Answers from the risk assessment form.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PatientData {
    /// Age in years.
    #[validate(range(min = 20, max = 100))]
    pub age: u8,
    /// 1 = male, 0 = female.
    #[validate(range(max = 1))]
    pub sex: u8,
    /// Chest pain type (0-3).
    #[validate(range(max = 3))]
    pub cp: u8,
    /// Resting blood pressure in mm Hg.
    #[validate(range(min = 90, max = 200))]
    pub trestbps: u16,
    /// Serum cholesterol in mg/dl.
    #[validate(range(min = 100, max = 600))]
    pub chol: u16,
    /// Fasting blood sugar > 120 mg/dl (1 = true).
    #[validate(range(max = 1))]
    pub fbs: u8,
    /// Resting electrocardiographic results (0-2).
    #[validate(range(max = 2))]
    pub restecg: u8,
    /// Maximum heart rate achieved.
    #[validate(range(min = 60, max = 220))]
    pub thalach: u16,
    /// Exercise induced angina (1 = yes).
    #[validate(range(max = 1))]
    pub exang: u8,
    /// ST depression induced by exercise relative to rest.
    #[validate(range(min = 0.0, max = 10.0))]
    pub oldpeak: f64,
    /// Slope of the peak exercise ST segment (0-2).
    #[validate(range(max = 2))]
    pub slope: u8,
    /// Major vessels colored by fluoroscopy (0-3).
    #[validate(range(max = 3))]
    pub ca: u8,
    pub thal: Thal,
}

impl PatientData {
    /// Parse and validate a JSON form submission.
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        let data: PatientData = serde_json::from_str(json)?;
        data.validate()?;
        Ok(data)
    }
}
