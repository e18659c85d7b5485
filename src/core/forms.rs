//! Validation of raw form input. Nothing reaches the engine until it passes here.

use std::fmt;

use uuid::Uuid;

use crate::domain::{Cadence, EarningCategory, Frequency, PaymentChannel, MAX_SIMULATOR_INCREMENT};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

pub type FieldResult<T> = Result<T, ValidationError>;

pub fn require_name(field: &'static str, input: &str) -> FieldResult<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        Err(ValidationError::new(field, "Value cannot be empty"))
    } else {
        Ok(trimmed.to_string())
    }
}

/// A finite number strictly above zero.
pub fn parse_amount(field: &'static str, input: &str) -> FieldResult<f64> {
    let value = input
        .trim()
        .parse::<f64>()
        .map_err(|_| ValidationError::new(field, "Enter a numeric value"))?;
    if !value.is_finite() {
        return Err(ValidationError::new(field, "Enter a numeric value"));
    }
    if value <= 0.0 {
        return Err(ValidationError::new(field, "Value must be greater than zero"));
    }
    Ok(value)
}

fn parse_choice<T: Copy>(field: &'static str, input: &str, options: &[(&str, T)]) -> FieldResult<T> {
    let normalized = input.trim().to_lowercase();
    options
        .iter()
        .find(|(label, _)| *label == normalized)
        .map(|(_, value)| *value)
        .ok_or_else(|| {
            let labels: Vec<&str> = options.iter().map(|(label, _)| *label).collect();
            ValidationError::new(field, format!("Value must be one of: {}", labels.join(", ")))
        })
}

pub fn parse_channel(input: &str) -> FieldResult<PaymentChannel> {
    parse_choice(
        "channel",
        input,
        &[("cash", PaymentChannel::Cash), ("card", PaymentChannel::Card)],
    )
}

/// Blank input means a service.
pub fn parse_category(input: Option<&str>) -> FieldResult<EarningCategory> {
    match input.map(str::trim) {
        None | Some("") => Ok(EarningCategory::default()),
        Some(raw) => parse_choice(
            "category",
            raw,
            &[
                ("service", EarningCategory::Service),
                ("tip", EarningCategory::Tip),
            ],
        ),
    }
}

pub fn parse_frequency(input: &str) -> FieldResult<Frequency> {
    parse_choice(
        "frequency",
        input,
        &[("daily", Frequency::Daily), ("weekly", Frequency::Weekly)],
    )
}

pub fn parse_cadence(input: &str) -> FieldResult<Cadence> {
    parse_choice(
        "cadence",
        input,
        &[("weekly", Cadence::Weekly), ("monthly", Cadence::Monthly)],
    )
}

pub fn parse_id(field: &'static str, input: &str) -> FieldResult<Uuid> {
    Uuid::parse_str(input.trim())
        .map_err(|_| ValidationError::new(field, "Enter a valid identifier"))
}

/// Bounds a slider position to `0..=MAX_SIMULATOR_INCREMENT`.
pub fn clamp_increment(raw: i64) -> u8 {
    raw.clamp(0, MAX_SIMULATOR_INCREMENT as i64) as u8
}

pub fn parse_increment(input: &str) -> FieldResult<u8> {
    input
        .trim()
        .parse::<i64>()
        .map(clamp_increment)
        .map_err(|_| ValidationError::new("increment", "Enter a whole number (e.g., 5)"))
}

/// Raw fields of the "log an earning" form.
#[derive(Debug, Clone, Default)]
pub struct EarningForm {
    pub amount: String,
    pub channel: String,
    pub category: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidEarning {
    pub amount: f64,
    pub channel: PaymentChannel,
    pub category: EarningCategory,
}

impl EarningForm {
    pub fn validate(&self) -> FieldResult<ValidEarning> {
        Ok(ValidEarning {
            amount: parse_amount("amount", &self.amount)?,
            channel: parse_channel(&self.channel)?,
            category: parse_category(self.category.as_deref())?,
        })
    }
}

/// Raw fields of the "add fixed cost" form.
#[derive(Debug, Clone, Default)]
pub struct ExpenseForm {
    pub name: String,
    pub amount: String,
    pub frequency: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidExpense {
    pub name: String,
    pub amount: f64,
    pub frequency: Frequency,
}

impl ExpenseForm {
    pub fn validate(&self) -> FieldResult<ValidExpense> {
        Ok(ValidExpense {
            name: require_name("name", &self.name)?,
            amount: parse_amount("amount", &self.amount)?,
            frequency: parse_frequency(&self.frequency)?,
        })
    }
}

/// Raw fields of the goal setup form.
#[derive(Debug, Clone, Default)]
pub struct GoalForm {
    pub name: String,
    pub cadence: String,
    pub amount: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidGoal {
    pub name: String,
    pub cadence: Cadence,
    pub amount: f64,
}

impl GoalForm {
    pub fn validate(&self) -> FieldResult<ValidGoal> {
        Ok(ValidGoal {
            name: require_name("name", &self.name)?,
            cadence: parse_cadence(&self.cadence)?,
            amount: parse_amount("amount", &self.amount)?,
        })
    }
}
