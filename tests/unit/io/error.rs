//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use mosaic::MosaicError;
    use mosaic::io::error::{invalid_parameter, missing_value};
    use std::error::Error;

    // Tests error source chaining for file system failures
    // Verified by returning None from every source arm
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = MosaicError::FileSystem {
            path: "/tmp/pattern.png".into(),
            operation: "create directory",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(error.to_string().contains("create directory"));
        assert!(error.to_string().contains("/tmp/pattern.png"));
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("offset", &11, &"must be between 1 and 10");

        let message = error.to_string();
        assert!(message.contains("offset"));
        assert!(message.contains("11"));
        assert!(message.contains("must be between 1 and 10"));
        assert!(error.source().is_none());
    }

    // Tests MissingValue names what was missing
    // Verified by dropping the description from the message
    #[test]
    fn test_missing_value_error() {
        let error = missing_value("dispensed colour");

        assert!(matches!(
            error,
            MosaicError::MissingValue {
                what: "dispensed colour"
            }
        ));
        assert!(error.to_string().contains("dispensed colour"));
    }

    // Tests colour and region errors echo the rejected input
    // Verified by printing a fixed placeholder instead of the input
    #[test]
    fn test_parse_errors_echo_input() {
        let colour = MosaicError::InvalidColour {
            hexcode: "#12".to_string(),
        };
        let region = MosaicError::InvalidRegion {
            text: "1;2".to_string(),
        };

        assert!(colour.to_string().contains("'#12'"));
        assert!(region.to_string().contains("'1;2'"));
    }

    // Tests automatic conversion from std::io::Error
    // Verified by removing From implementation
    #[test]
    fn test_from_io_error() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error: MosaicError = io_error.into();

        match error {
            MosaicError::FileSystem {
                path, operation, ..
            } => {
                assert_eq!(path.to_string_lossy(), "<unknown>");
                assert_eq!(operation, "unknown");
            }
            _ => unreachable!("Expected FileSystem error"),
        }
    }
}
