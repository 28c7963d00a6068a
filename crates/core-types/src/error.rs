use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid status filter '{0}': expected one of All, Active, Inactive")]
    InvalidStatusFilter(String),
}
