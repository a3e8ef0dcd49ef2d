use std::{
    fmt::Display,
    io::{Error as IoError, ErrorKind},
};

#[derive(Debug, PartialEq, Eq)]
pub enum HeapError {
    BadAction(String),
    EmptyHeap,
    OutOfBounds(usize, usize),
}

impl Display for HeapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HeapError::BadAction(text) => {
                write!(f, "Unrecognised action '{}' (expected 'pop' or an integer)", text)
            }
            HeapError::EmptyHeap => {
                write!(f, "Cannot pop the root of an empty heap")
            }
            HeapError::OutOfBounds(index, size) => {
                write!(f, "Index {} out of bounds for heap of size {}", index, size)
            }
        }
    }
}

impl std::error::Error for HeapError {}

pub fn as_io_error(error: HeapError) -> std::io::Error {
    IoError::new(ErrorKind::Other, error)
}
