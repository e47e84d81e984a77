use super::*;
use crate::constants::header;
use std::error::Error as _;

mod downstream_error {
    use super::*;

    #[test]
    fn should_default_to_internal_server_error_without_headers() {
        // Arrange & Act
        let err = DownstreamError::new("Whoops!");

        // Assert
        assert_eq!(err.status, 500);
        assert!(err.headers.is_empty());
        assert_eq!(err.source.to_string(), "Whoops!");
    }

    #[test]
    fn should_carry_declared_status_and_headers() {
        // Arrange & Act
        let err = DownstreamError::new("teapot")
            .with_status(418)
            .with_header(header::VARY, "Accept-Encoding");

        // Assert
        assert_eq!(err.status, 418);
        assert_eq!(err.headers.get("vary"), Some("Accept-Encoding"));
        assert!(err.to_string().contains("418"));
    }
}

mod cors_error {
    use super::*;

    #[test]
    fn should_expose_resolver_failure_as_source() {
        // Arrange
        let err = CorsError::OriginResolver("lookup failed".into());

        // Act
        let source = err.source();

        // Assert
        assert_eq!(
            source.map(|source| source.to_string()),
            Some("lookup failed".to_string())
        );
        assert_eq!(err.to_string(), "origin resolver failed: lookup failed");
    }

    #[test]
    fn should_return_downstream_error_from_into_downstream() {
        // Arrange
        let err = CorsError::from(DownstreamError::new("Whoops!").with_status(503));

        // Act
        let downstream = err.into_downstream();

        // Assert
        assert!(matches!(downstream, Ok(inner) if inner.status == 503));
    }

    #[test]
    fn should_return_self_from_into_downstream_given_resolver_failure() {
        // Arrange
        let err = CorsError::CredentialsResolver("nope".into());

        // Act
        let downstream = err.into_downstream();

        // Assert
        assert!(matches!(downstream, Err(CorsError::CredentialsResolver(_))));
    }
}
