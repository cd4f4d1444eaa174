use std::fmt::Display;

use anyhow::Error;
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};
use thiserror::Error;

/// An error caused by invalid input from the caller.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct InputError {
    message: String,
}

impl InputError {
    /// Constructs a new input error.
    pub fn new<M>(message: M) -> Self
    where
        M: Display,
    {
        Self {
            message: message.to_string(),
        }
    }
}

/// A not found error.
#[derive(Error, Debug)]
#[error("{target} not found")]
pub struct NotFoundError {
    target: String,
}

impl NotFoundError {
    /// Constructs a new not found error.
    pub fn new<M>(target: M) -> Self
    where
        M: Display,
    {
        Self {
            target: target.to_string(),
        }
    }
}

/// Helper for an [`struct@Error`] wrapping an [`InputError`].
pub fn input_error<M>(message: M) -> Error
where
    M: Display,
{
    InputError::new(message).into()
}

/// Helper for an [`struct@Error`] wrapping a [`NotFoundError`].
pub fn not_found_error<M>(target: M) -> Error
where
    M: Display,
{
    NotFoundError::new(target).into()
}

/// The class of an error returned by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, SerializeLabeledStringEnum, DeserializeLabeledStringEnum)]
pub enum ErrorKind {
    /// The request was invalid and should not be retried as is.
    #[string = "input"]
    Input,
    /// A requested record does not exist.
    #[string = "not found"]
    NotFound,
    /// The service failed.
    #[string = "internal"]
    Internal,
}

/// Classifies an error returned by the service.
pub fn error_kind(error: &Error) -> ErrorKind {
    if error.downcast_ref::<InputError>().is_some() {
        ErrorKind::Input
    } else if error.downcast_ref::<NotFoundError>().is_some() {
        ErrorKind::NotFound
    } else {
        ErrorKind::Internal
    }
}
