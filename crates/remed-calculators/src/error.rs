use thiserror::Error;

#[derive(Debug, Error)]
pub enum CalculatorError {
    #[error("unknown calculator: {0}")]
    UnknownCalculator(String),

    #[error("unknown input '{input_id}' for calculator '{calculator_id}'")]
    UnknownInput {
        calculator_id: String,
        input_id: String,
    },
}
