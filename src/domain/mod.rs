//! 领域层：Firestore 响应模型

pub mod document;

pub use document::{Document, Double, ListDocumentsResponse, ProductPreview, Value, PLACEHOLDER};
