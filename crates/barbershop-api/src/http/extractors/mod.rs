//! Request extractors that reject with [`AppError`](crate::http::error::AppError)
//! instead of axum's plain-text rejections.

pub mod barber_id;
pub mod json;
