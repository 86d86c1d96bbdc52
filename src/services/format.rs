use crate::models::ReturnClass;

/// Display-ready rendering of one optional percentage return.
#[derive(Debug, Clone, PartialEq)]
pub struct FormattedReturn {
    pub display: String,
    pub class: ReturnClass,
}

pub fn format_return(value: Option<f64>) -> FormattedReturn {
    FormattedReturn {
        display: display_string(value),
        class: return_class(value),
    }
}

/// "N/A" when absent; otherwise two decimals with a % suffix. Zero counts as
/// non-negative and gets the explicit leading +.
pub fn display_string(value: Option<f64>) -> String {
    match value {
        None => "N/A".to_string(),
        Some(v) if v >= 0.0 => format!("+{:.2}%", v),
        Some(v) => format!("{:.2}%", v),
    }
}

pub fn return_class(value: Option<f64>) -> ReturnClass {
    match value {
        None => ReturnClass::Neutral,
        Some(v) if v > 0.0 => ReturnClass::Positive,
        Some(v) if v < 0.0 => ReturnClass::Negative,
        Some(_) => ReturnClass::Neutral,
    }
}
