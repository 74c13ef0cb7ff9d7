use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use super::utils::indent_width;
use crate::types::ScopeMatch;

// Anchored so `def`/`class` inside strings or trailing comments never match.
static METHOD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*def\s+(test_\w+)\s*\(").unwrap());
static CLASS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*class\s+(\w+)").unwrap());

/// Find the nearest test method and its enclosing class.
///
/// `lines` runs from the cursor line back to the top of the file. The first
/// `def test_*` line seen becomes the method and fixes a reference indent; the
/// enclosing class is the first `class` line indented strictly less than that
/// method. Classes at the method's depth or deeper are siblings or nested
/// helpers and are skipped. With no method seen, the first class wins.
///
/// Blank lines and lines whose content starts with `#` are ignored.
pub fn parse_lines<I, S>(lines: I) -> ScopeMatch
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut scope = ScopeMatch::default();
    let mut method_indent: Option<usize> = None;

    for line in lines {
        let line = line.as_ref();
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let indent = indent_width(line);

        if method_indent.is_none() {
            if let Some(caps) = METHOD_RE.captures(line) {
                scope.method_name = caps[1].to_string();
                method_indent = Some(indent);
                debug!("Matched test method '{}' at indent {}", scope.method_name, indent);
                continue;
            }
        }

        if let Some(caps) = CLASS_RE.captures(line) {
            match method_indent {
                Some(method_indent) if indent >= method_indent => {
                    debug!("Skipping class '{}' at indent {} (method at {})", &caps[1], indent, method_indent);
                }
                _ => {
                    scope.class_name = caps[1].to_string();
                    debug!("Matched enclosing class '{}' at indent {}", scope.class_name, indent);
                    break;
                }
            }
        }
    }

    scope
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Parse `source` as if the cursor sat on its last line
    fn parse_at_end(source: &[&str]) -> ScopeMatch {
        parse_lines(source.iter().rev())
    }

    #[test]
    fn test_basic_method_and_class() {
        let result = parse_lines(["        pass", "    def test_x(self):", "class C(TestCase):"]);
        assert_eq!(result, ScopeMatch::new("test_x", "C"));
    }

    #[test]
    fn test_cursor_on_method_line() {
        let result = parse_at_end(&[
            "class MyTestCase(TestCase):",
            "    def test_first(self):",
            "        pass",
            "    def test_second(self):",
        ]);
        assert_eq!(result, ScopeMatch::new("test_second", "MyTestCase"));
    }

    #[test]
    fn test_class_inside_string_is_ignored() {
        let result = parse_at_end(&[
            "class MyTest(TestCase):",
            "    def test_has_broken_str(self):",
            "        expected_result = 'class ThisStringBrokeIt'",
        ]);
        assert_eq!(result, ScopeMatch::new("test_has_broken_str", "MyTest"));
    }

    #[test]
    fn test_class_inside_subtest_message_is_ignored() {
        let result = parse_at_end(&[
            "class MyTest(TestCase):",
            "    def test_has_broken_subtest(self):",
            "        with self.subTest('should return the value of class var cls.SOMETHING'):",
            "            subject = MyClass()",
        ]);
        assert_eq!(result, ScopeMatch::new("test_has_broken_subtest", "MyTest"));
    }

    #[test]
    fn test_class_inside_comment_is_ignored() {
        let result = parse_at_end(&[
            "class RealClass(TestCase):",
            "    def test_something(self):",
            "        # class FakeClass should not match",
            "        pass",
        ]);
        assert_eq!(result, ScopeMatch::new("test_something", "RealClass"));
    }

    #[test]
    fn test_nested_class_does_not_replace_enclosing_class() {
        let result = parse_at_end(&[
            "class MyTest(TestCase):",
            "    class MyHelperClass:",
            "        pass",
            "    def test_something(self):",
            "        pass",
        ]);
        assert_eq!(result, ScopeMatch::new("test_something", "MyTest"));
    }

    #[test]
    fn test_deeper_and_sibling_classes_are_skipped() {
        let result = parse_at_end(&[
            "class Outer(TestCase):",
            "    def helper(self):",
            "        class Local:",
            "            pass",
            "    class Sibling:",
            "        pass",
            "    def test_outer(self):",
            "        value = 1",
        ]);
        assert_eq!(result, ScopeMatch::new("test_outer", "Outer"));
    }

    #[test]
    fn test_class_only_lookup() {
        let result = parse_at_end(&["class MyTestCase(TestCase):", "    pass"]);
        assert_eq!(result, ScopeMatch::new("", "MyTestCase"));
    }

    #[test]
    fn test_cursor_on_bare_class_line() {
        let result = parse_at_end(&[
            "class First(TestCase):",
            "    def test_a(self):",
            "        pass",
            "class Second(TestCase):",
        ]);
        assert_eq!(result, ScopeMatch::new("", "Second"));
    }

    #[test]
    fn test_no_scope_found() {
        let result = parse_at_end(&["# just a comment", "", "import os"]);
        assert!(result.is_empty());
        assert!(parse_lines(Vec::<String>::new()).is_empty());
    }

    #[test]
    fn test_non_test_methods_are_skipped() {
        let result = parse_at_end(&[
            "class MyTest(TestCase):",
            "    def helper_method(self):",
            "        pass",
            "    def test_real(self):",
            "        pass",
        ]);
        assert_eq!(result, ScopeMatch::new("test_real", "MyTest"));

        let result = parse_at_end(&[
            "class MyTest(TestCase):",
            "    def setUp(self):",
            "        self.value = 1",
        ]);
        assert_eq!(result, ScopeMatch::new("", "MyTest"));
    }

    #[test]
    fn test_space_before_parenthesis() {
        let result = parse_at_end(&["class MyTest(TestCase):", "    def test_spaced (self):"]);
        assert_eq!(result, ScopeMatch::new("test_spaced", "MyTest"));
    }

    #[test]
    fn test_nearest_of_multiple_classes() {
        let result = parse_at_end(&[
            "class FirstTest(TestCase):",
            "    def test_first(self):",
            "        pass",
            "",
            "class SecondTest(TestCase):",
            "    def test_second(self):",
            "        pass",
        ]);
        assert_eq!(result, ScopeMatch::new("test_second", "SecondTest"));
    }

    #[test]
    fn test_blank_lines_and_comments_are_skipped() {
        let result = parse_at_end(&[
            "class MyTest(TestCase):",
            "",
            "    # This is a test",
            "    def test_something(self):",
            "        # More comments",
            "        pass",
        ]);
        assert_eq!(result, ScopeMatch::new("test_something", "MyTest"));
    }

    #[test]
    fn test_module_level_test_function_has_no_class() {
        let result = parse_at_end(&["import pytest", "", "def test_module_level():", "    assert True"]);
        assert_eq!(result, ScopeMatch::new("test_module_level", ""));
    }

    #[test]
    fn test_commented_out_method_is_ignored() {
        let result = parse_at_end(&[
            "class MyTest(TestCase):",
            "    def test_live(self):",
            "        pass",
            "    # def test_dead(self):",
            "        pass",
        ]);
        assert_eq!(result, ScopeMatch::new("test_live", "MyTest"));
    }

    #[test]
    fn test_tab_indentation() {
        let result = parse_at_end(&["class Tabbed(TestCase):", "\tdef test_tab(self):", "\t\tpass"]);
        assert_eq!(result, ScopeMatch::new("test_tab", "Tabbed"));
    }
}
