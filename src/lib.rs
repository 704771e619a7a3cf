pub mod error;
pub mod report;
pub mod template;
pub mod validation;
