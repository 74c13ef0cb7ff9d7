/// Join the non-empty parts of a test invocation with single spaces.
///
/// Order is always prefix, interpreter, runner program, test path, flags.
/// Empty parts are dropped, so the result never has leading, trailing or
/// doubled separators.
pub fn build_command(
    prefix_command: &str,
    python_path: &str,
    manage_program: &str,
    test_path: &str,
    flags: &str,
) -> String {
    [prefix_command, python_path, manage_program, test_path, flags]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
