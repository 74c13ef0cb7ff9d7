use django_runner_core::services::FileSource;
use django_runner_core::{Analysis, TestTarget};

use crate::utils::WorkspaceContext;

pub fn describe_target(target: TestTarget) -> &'static str {
    match target {
        TestTarget::Method => "Test method",
        TestTarget::Class => "Test class",
        TestTarget::File => "Test module",
        TestTarget::App => "Whole suite",
    }
}

fn or_none(value: &str) -> &str {
    if value.is_empty() { "(none)" } else { value }
}

pub fn print_analysis(source: &FileSource, context: &WorkspaceContext, analysis: &Analysis) {
    println!(
        "🔍 Analyzing: {}{}",
        source.file_path().display(),
        if let Some(l) = source.cursor_line() {
            format!(":{}", l + 1)
        } else {
            String::new()
        }
    );
    println!("{}", "=".repeat(80));

    println!("📁 Workspace: {}", context.workspace_root().display());
    match &context.loaded.source {
        Some(source) => println!("⚙️  Config: {}", source.display()),
        None => println!("⚙️  Config: defaults"),
    }
    println!("🐍 Interpreter: {}", or_none(&context.settings.python_path));

    println!("\n📄 Module: {}", analysis.module_path);
    println!("   🧪 Method: {}", or_none(&analysis.scope.method_name));
    println!("   📦 Class: {}", or_none(&analysis.scope.class_name));

    for run in &analysis.runs {
        println!("\n▶️  {}", describe_target(run.target));
        if !run.test_path.is_empty() {
            println!("   🎯 Path: {}", run.test_path);
        }
        println!("   🚀 Command: {}", run.command);
    }
}
