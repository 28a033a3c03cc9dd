pub mod batch;
pub mod comments;
