use thiserror::Error;

use crate::consts::MIN_ORDER;

#[derive(Error, Debug)]
pub enum GroveError {
    #[error("Invalid order {0}: a grove needs an order of at least {min}", min = MIN_ORDER)]
    InvalidOrder(usize),

    #[error("Invalid arena block size {0}: blocks must hold at least one record")]
    InvalidBlockSize(usize),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

pub type GroveResult<T> = std::result::Result<T, GroveError>;
