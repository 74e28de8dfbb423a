// Domain errors for query parameter parsing
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WindowParamError {
    #[error("empty parameter")]
    Empty,

    #[error("not a number: {0:?}")]
    InvalidOffset(String),

    #[error("offset is not finite: {0:?}")]
    NonFiniteOffset(String),

    #[error("not a calendar date: {0:?}")]
    InvalidDate(String),
}
