use super::*;

mod default {
    use super::*;

    #[test]
    fn when_constructed_should_use_expected_defaults() {
        // Arrange & Act
        let options = CorsOptions::default();

        // Assert
        assert!(matches!(options.origin, Origin::RequestOrigin));
        assert_eq!(options.allow_methods, AllowedMethods::default());
        assert_eq!(options.allow_headers, AllowedHeaders::MirrorRequest);
        assert!(options.expose_headers.is_none());
        assert!(matches!(options.credentials, Credentials::Static(false)));
        assert!(options.max_age.is_none());
        assert!(options.keep_headers_on_error);
        assert!(!options.secure_context);
        assert!(!options.private_network_access);
    }

    #[test]
    fn when_mutated_instance_should_not_affect_other_defaults() {
        // Arrange
        let mut first = CorsOptions::default();
        let second = CorsOptions::default();

        // Act
        first.keep_headers_on_error = false;

        // Assert
        assert_ne!(first.keep_headers_on_error, second.keep_headers_on_error);
    }
}

mod max_age {
    use super::*;

    #[test]
    fn when_number_provided_should_render_decimal() {
        assert_eq!(MaxAge::from(3600u64).as_str(), "3600");
        assert_eq!(MaxAge::from(0u32).to_string(), "0");
    }

    #[test]
    fn when_negative_number_provided_should_keep_sign() {
        assert_eq!(MaxAge::from(-1i64).as_str(), "-1");
    }

    #[test]
    fn when_duration_provided_should_use_whole_seconds() {
        let max_age = MaxAge::from(std::time::Duration::from_millis(90_500));

        assert_eq!(max_age.as_str(), "90");
    }

    #[test]
    fn when_string_provided_should_keep_it_verbatim() {
        assert_eq!(MaxAge::from("3600").as_str(), "3600");
        assert_eq!(MaxAge::from(String::from("-1")).as_str(), "-1");
    }
}
