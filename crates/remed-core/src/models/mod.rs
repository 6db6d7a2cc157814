pub mod abbreviation;
pub mod lab_value;
pub mod mnemonic;
pub mod nutrition;
pub mod procedure;
pub mod terminology;

pub use abbreviation::Abbreviation;
pub use lab_value::{LabValue, ReferenceRange};
pub use mnemonic::Mnemonic;
pub use nutrition::{NutritionGuideline, NutritionSubsection};
pub use procedure::Procedure;
pub use terminology::TerminologyEntry;
