#![forbid(unsafe_code)]

pub mod app_services;
pub mod catalog_service;
pub mod error;
pub mod lessons_source;
pub mod progress_store;

pub use app_services::AppServices;
pub use catalog_service::CatalogService;
pub use error::{AppServicesError, LessonsError, ProgressError};
pub use lessons_source::{FileLessonsSource, HttpLessonsSource, LessonsLocation, LessonsSource};
pub use progress_store::{PROGRESS_STORAGE_KEY, ProgressStore, Subscription};

pub use reqwest::StatusCode;
