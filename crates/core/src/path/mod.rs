//! Dotted test paths from workspace-relative file paths
//!
//! `app/tests/test_models.py` becomes `app.tests.test_models`, which can then
//! be narrowed to a class (`app.tests.test_models.MyTestCase`) or a method
//! (`app.tests.test_models.MyTestCase.test_it`). django-nose separates the
//! module from the class with `:` instead.

use std::path::Path;

fn is_separator(c: char) -> bool {
    c == '/' || c == '\\'
}

/// Convert a workspace-relative file path to a dotted module path.
///
/// Drops one trailing `.py`, any leading separators, and collapses each run
/// of `/` or `\` into a single `.`.
pub fn file_path_to_dotted_path(relative_path: &str) -> String {
    let without_ext = relative_path.strip_suffix(".py").unwrap_or(relative_path);
    let trimmed = without_ext.trim_start_matches(is_separator);

    let mut dotted = String::with_capacity(trimmed.len());
    let mut in_separator_run = false;
    for c in trimmed.chars() {
        if is_separator(c) {
            if !in_separator_run {
                dotted.push('.');
            }
            in_separator_run = true;
        } else {
            dotted.push(c);
            in_separator_run = false;
        }
    }
    dotted
}

/// Remove a leading package from a dotted module path.
///
/// `strip_root_folder` drops the first dotted segment and wins over
/// `root_package_name`. Otherwise everything up to and including the first
/// occurrence of `root_package_name.` is dropped. Paths without a match come
/// back unchanged.
pub fn strip_root_package(path: &str, strip_root_folder: bool, root_package_name: &str) -> String {
    if strip_root_folder {
        return match path.split_once('.') {
            Some((_, rest)) => rest.to_string(),
            None => path.to_string(),
        };
    }

    if root_package_name.is_empty() {
        return path.to_string();
    }

    let root = if root_package_name.ends_with('.') {
        root_package_name.to_string()
    } else {
        format!("{root_package_name}.")
    };

    match path.find(&root) {
        Some(idx) => path[idx + root.len()..].to_string(),
        None => path.to_string(),
    }
}

fn module_separator(django_nose: bool) -> char {
    if django_nose { ':' } else { '.' }
}

/// `module.Class.method`, or `module:Class.method` for django-nose
pub fn build_full_test_path(
    file_path: &str,
    class_name: &str,
    method_name: &str,
    django_nose: bool,
) -> String {
    format!(
        "{file_path}{}{class_name}.{method_name}",
        module_separator(django_nose)
    )
}

/// `module.Class`, or `module:Class` for django-nose
pub fn build_class_test_path(file_path: &str, class_name: &str, django_nose: bool) -> String {
    format!("{file_path}{}{class_name}", module_separator(django_nose))
}

/// Path of `file` relative to `workspace_root`, as the string the dotted
/// conversion expects.
///
/// Files outside the workspace keep their full path.
pub fn relative_path(file: &Path, workspace_root: &Path) -> String {
    file.strip_prefix(workspace_root)
        .unwrap_or(file)
        .to_string_lossy()
        .into_owned()
}
