use thiserror::Error;

use crate::item::ItemId;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Duplicate item id in catalog: {0}")]
    DuplicateItem(ItemId),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
