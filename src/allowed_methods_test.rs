use super::AllowedMethods;

mod default {
    use super::*;

    #[test]
    fn should_list_methods_in_conventional_order() {
        let methods = AllowedMethods::default();

        assert_eq!(
            methods.header_value().as_deref(),
            Some("GET,HEAD,PUT,POST,DELETE,PATCH")
        );
    }
}

mod list {
    use super::*;

    #[test]
    fn should_preserve_order_and_casing_given_values_provided() {
        let methods = AllowedMethods::list(["POST", "get"]);

        assert_eq!(methods, AllowedMethods::List(vec!["POST".into(), "get".into()]));
    }
}

mod header_value {
    use super::*;

    #[test]
    fn should_return_none_given_list_is_empty() {
        let methods = AllowedMethods::list(Vec::<String>::new());

        assert!(methods.header_value().is_none());
    }

    #[test]
    fn should_join_with_commas_given_list_has_values() {
        let methods = AllowedMethods::list(["GET", "POST"]);

        assert_eq!(methods.header_value().as_deref(), Some("GET,POST"));
    }

    #[test]
    fn should_return_none_given_disabled() {
        let methods = AllowedMethods::disabled();

        assert!(methods.header_value().is_none());
    }

    #[test]
    fn should_emit_joined_string_verbatim_given_str() {
        let methods = AllowedMethods::from("GET,POST");

        assert_eq!(methods.header_value().as_deref(), Some("GET,POST"));
    }
}
