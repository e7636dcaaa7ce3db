use crate::error::GameError;

pub trait Validate {
    fn validate(&self) -> Result<(), GameError>;
}
