use anyhow::{bail, Result};

/// Split a `FILE[:LINE]` argument into the file and a 0-based cursor line.
///
/// `LINE` counts from 1, the way editors report it. A suffix that is not a
/// number stays part of the file name.
pub fn parse_filepath_with_line(arg: &str) -> Result<(String, Option<usize>)> {
    let Some((file, line)) = arg
        .rsplit_once(':')
        .and_then(|(file, suffix)| suffix.parse::<usize>().ok().map(|line| (file, line)))
    else {
        return Ok((arg.to_string(), None));
    };

    match line.checked_sub(1) {
        Some(cursor) => Ok((file.to_string(), Some(cursor))),
        None => bail!("Line numbers start at 1: {arg}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_with_line() {
        assert_eq!(
            parse_filepath_with_line("app/tests/test_models.py:42").unwrap(),
            ("app/tests/test_models.py".to_string(), Some(41))
        );
        assert_eq!(
            parse_filepath_with_line("tests.py:1").unwrap(),
            ("tests.py".to_string(), Some(0))
        );
    }

    #[test]
    fn test_line_zero_is_rejected() {
        let err = parse_filepath_with_line("tests.py:0").unwrap_err();
        assert!(err.to_string().contains("start at 1"));
    }

    #[test]
    fn test_path_without_line() {
        assert_eq!(
            parse_filepath_with_line("app/tests.py").unwrap(),
            ("app/tests.py".to_string(), None)
        );
        assert_eq!(
            parse_filepath_with_line("C:\\work\\app\\tests.py").unwrap(),
            ("C:\\work\\app\\tests.py".to_string(), None)
        );
        assert_eq!(
            parse_filepath_with_line("tests.py:end").unwrap(),
            ("tests.py:end".to_string(), None)
        );
    }
}
