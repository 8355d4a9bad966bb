use core::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(String),
    Io(std::io::Error),
    NotFound(String),
    ParseCommand(String),
    ParseInt(std::num::ParseIntError),
    Validation(String),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<std::num::ParseIntError> for AppError {
    fn from(err: std::num::ParseIntError) -> Self {
        AppError::ParseInt(err)
    }
}

impl From<tracing_subscriber::filter::ParseError> for AppError {
    fn from(err: tracing_subscriber::filter::ParseError) -> Self {
        AppError::Config(format!("invalid log filter: {}", err))
    }
}

impl From<tracing_subscriber::util::TryInitError> for AppError {
    fn from(err: tracing_subscriber::util::TryInitError) -> Self {
        AppError::Config(format!("logger already initialised: {}", err))
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Config(msg) => {
                write!(f, "Configuration error: {}", msg)
            }
            AppError::Io(e) => {
                write!(f, "I/O error while reading input or writing output: {}", e)
            }
            AppError::NotFound(item) => {
                write!(f, "{} Not found", item)
            }
            AppError::ParseCommand(cmd) => {
                write!(f, "Unrecognized command: '{}'", cmd)
            }
            AppError::ParseInt(e) => {
                write!(f, "Invalid number format: {}", e)
            }
            AppError::Validation(msg) => {
                write!(f, "Validation failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Io(e) => Some(e),
            AppError::ParseInt(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirm_parse_int_error_message() {
        let wrong_string = "abc".parse::<usize>().unwrap_err();
        let err = AppError::ParseInt(wrong_string);

        assert!(format!("{}", err).contains("Invalid number format: "));
    }

    #[test]
    fn confirm_not_found_message() {
        let err = AppError::NotFound("Contact".to_string());

        assert_eq!(format!("{}", err), "Contact Not found");
    }

    #[test]
    fn confirm_unknown_command_message() {
        let err = AppError::ParseCommand("frobnicate".to_string());

        assert_eq!(format!("{}", err), "Unrecognized command: 'frobnicate'");
    }

    #[test]
    fn io_error_keeps_its_source() {
        let err: AppError = std::io::Error::other("pipe closed").into();

        assert!(std::error::Error::source(&err).is_some());
    }
}
