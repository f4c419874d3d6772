use std::fmt::Display;

#[derive(Debug, Clone)]
pub enum Error {
    TooManyPoints(usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", {
            match self {
                Error::TooManyPoints(ref count) => {
                    format!(
                        "The calculation grid is too large ({} points). Reduce the radius factor or the detail level. ",
                        count
                    )
                }
            }
        })
    }
}
