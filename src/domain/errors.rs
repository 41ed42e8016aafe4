#[derive(Debug, Clone, PartialEq)]
pub enum DirectoryError {
    Transport(String),
    Status(u16),
    Decode(String),
}

impl std::fmt::Display for DirectoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DirectoryError::Transport(msg) => {
                write!(f, "Directory service unreachable: {}", msg)
            }
            DirectoryError::Status(code) => {
                write!(f, "Directory service returned HTTP {}", code)
            }
            DirectoryError::Decode(msg) => {
                write!(f, "Unexpected directory response: {}", msg)
            }
        }
    }
}

impl std::error::Error for DirectoryError {}

pub type DirectoryResult<T> = Result<T, DirectoryError>;
