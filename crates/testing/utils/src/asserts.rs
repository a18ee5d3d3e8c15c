const DISABLE_STRING_CHECKS_ENV_VAR: &str = "MSGSIG_SKIP_STRING_ERROR_CHECKS";

pub trait ResultAssertsExt {
    /// Panics unless `self` is an error whose message contains `s`
    fn assert_error_contains(&self, s: &str);
}

impl<T, E> ResultAssertsExt for Result<T, E>
where
    E: ToString,
{
    fn assert_error_contains(&self, to_contain: &str) {
        let Err(err) = self else {
            panic!("expected an error containing `{to_contain}`, got Ok");
        };

        // set to compare error kinds only, e.g. while rewording messages
        if std::env::var_os(DISABLE_STRING_CHECKS_ENV_VAR).is_some() {
            eprintln!("skipping error message check: `{DISABLE_STRING_CHECKS_ENV_VAR}` is set");
            return;
        }

        let message = err.to_string();
        assert!(
            message.contains(to_contain),
            "error `{message}` does not contain `{to_contain}`"
        );
    }
}
