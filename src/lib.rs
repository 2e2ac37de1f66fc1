pub mod badge;
pub mod geometry;
pub mod mask;
pub mod report;
pub mod validator;

pub use badge::{convert_to_badge, load_image};
pub use mask::apply_circular_mask;
pub use report::ValidationReport;
pub use validator::{validate, validate_report, Check, ValidationResult, TARGET_SIZE};
