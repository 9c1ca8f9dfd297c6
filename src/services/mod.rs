pub mod exam_service;
pub mod import_service;

pub use exam_service::ExamService;
pub use import_service::ImportService;
