//! The calculator definitions, grouped by clinical domain.

pub mod anthropometry;
pub mod cardiology;
pub mod dosing;
pub mod electrolytes;
pub mod gastroenterology;
pub mod hematology;
pub mod hepatology;
pub mod pulmonology;
pub mod renal;
pub mod screening;
