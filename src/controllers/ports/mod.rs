pub mod file_presenter;
pub mod soundtrack;
