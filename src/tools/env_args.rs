#[cfg(test)]
use std::cell::RefCell;
#[cfg(not(test))]
use std::env;

/// Retrieve the value of an `arg=value` token passed to the app.
/// The first token starting with `{arg_name}=` wins; everything after the first `=` is the value.
///
/// /!\ As this reads global state, a function calling `retrieve_arg_value`
/// can be tricky to test. To do so, wrap your test with `with_env_args(args, fn)`,
/// which is only available in a test context.
pub fn retrieve_arg_value(arg_name: &str) -> Option<String> {
    let prefix = format!("{arg_name}=");
    get_env_args()
        .into_iter()
        .find(|arg| arg.starts_with(&prefix))
        .and_then(|arg| arg.split_once('=').map(|(_, value)| value.to_owned()))
}

/// Retrieve the value of a required arg, or fail with the given error.
pub fn retrieve_expected_arg_value<E>(arg_name: &str, error_if_missing: E) -> Result<String, E> {
    retrieve_arg_value(arg_name).ok_or(error_if_missing)
}

#[cfg(not(test))]
fn get_env_args() -> Vec<String> {
    env::args().collect()
}

#[cfg(test)]
thread_local! {
    /// A mutable `Vec<String>` to host env args for tests.
    /// When a test runs inside `with_env_args`, the inner `Vec` is set to
    /// whatever is passed, then reset to its previous state.
    static ENV_ARGS: RefCell<Vec<String>> = const { RefCell::new(vec![]) };
}
#[cfg(test)]
fn get_env_args() -> Vec<String> {
    ENV_ARGS.with(|args| args.borrow().clone())
}

#[cfg(test)]
/// Run `function` with `args` visible as the app's env args.
/// The real process args are appended after `args`, so they never shadow the test's own.
pub fn with_env_args<F, T>(mut args: Vec<String>, function: F) -> T
where
    F: FnOnce() -> T,
{
    ENV_ARGS.with(|refcell| {
        args.extend(std::env::args());
        let old_value = refcell.replace(args);
        let result = function();
        refcell.replace(old_value);
        result
    })
}
