use super::*;

fn request(path: &str) -> RequestContext {
    RequestContext::new("GET", path).with_header("Origin", "http://koajs.com")
}

mod default {
    use super::*;

    #[test]
    fn when_constructed_should_be_disabled() {
        assert!(matches!(Credentials::default(), Credentials::Static(false)));
    }
}

mod resolve {
    use super::*;

    #[tokio::test]
    async fn when_static_true_should_return_true() {
        // Arrange
        let credentials = Credentials::from(true);

        // Act
        let allowed = credentials.resolve(&request("/")).await;

        // Assert
        assert!(allowed.expect("resolves"));
    }

    #[tokio::test]
    async fn when_callback_depends_on_path_should_follow_it() {
        // Arrange
        let credentials = Credentials::from_fn(|ctx: &RequestContext| ctx.path() != "/public");

        // Act
        let private = credentials.resolve(&request("/account")).await;
        let public = credentials.resolve(&request("/public")).await;

        // Assert
        assert!(private.expect("resolves"));
        assert!(!public.expect("resolves"));
    }

    #[tokio::test]
    async fn when_async_callback_should_await_result() {
        // Arrange
        let credentials = Credentials::from_async_fn(|_: &RequestContext| async {
            tokio::task::yield_now().await;
            Ok::<_, BoxError>(true)
        });

        // Act
        let allowed = credentials.resolve(&request("/")).await;

        // Assert
        assert!(allowed.expect("resolves"));
    }

    #[tokio::test]
    async fn when_callback_fails_should_return_credentials_resolver_error() {
        // Arrange
        let credentials =
            Credentials::try_from_fn(|_: &RequestContext| Err::<bool, _>("session store down"));

        // Act
        let allowed = credentials.resolve(&request("/")).await;

        // Assert
        assert!(matches!(allowed, Err(CorsError::CredentialsResolver(_))));
    }
}
