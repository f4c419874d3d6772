//! Error module.
use std::fmt::Display;

#[derive(Debug)]
pub enum Error {
    IOError(std::io::Error),
    IESError(crate::io::ies::Error),
    RequestError(crate::compute::err::Error),
    GridError(crate::field::err::Error),
    InternalError(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::IOError(err)
    }
}

impl From<crate::io::ies::Error> for Error {
    fn from(err: crate::io::ies::Error) -> Self {
        Error::IESError(err)
    }
}

impl From<crate::compute::err::Error> for Error {
    fn from(err: crate::compute::err::Error) -> Self {
        Error::RequestError(err)
    }
}

impl From<crate::field::err::Error> for Error {
    fn from(err: crate::field::err::Error) -> Self {
        Error::GridError(err)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", {
            match self {
                Error::IOError(ref e) => format!("IO Error: {}", e),
                Error::IESError(ref e) => format!("IES Parse Error: {}", e),
                Error::RequestError(ref e) => format!("Invalid Compute Request: {}", e),
                Error::GridError(ref e) => format!("Grid Error: {}", e),
                Error::InternalError(ref e) => format!("Internal Error: {}", e),
            }
        })
    }
}
