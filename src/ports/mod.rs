// src/ports/mod.rs
pub mod report;
pub mod text;

pub use report::ExamReportPresenter;
pub use text::TextPresenter;
