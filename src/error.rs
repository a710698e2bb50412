use thiserror::Error;

use crate::algorithm::Algorithm;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Unknown rotation algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("Unknown workload: {0}")]
    UnknownWorkload(String),

    #[error("{algorithm} disagrees with the reference at index {index} (na = {na}, nb = {nb})")]
    Mismatch {
        algorithm: Algorithm,
        na: usize,
        nb: usize,
        index: usize,
    },

    #[error("{algorithm} did not restore the input after rotating back (na = {na}, nb = {nb})")]
    NotInvolutive {
        algorithm: Algorithm,
        na: usize,
        nb: usize,
    },
}
