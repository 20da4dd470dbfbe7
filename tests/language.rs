use std::fs;

use phrase::{
    Error, Expression, evaluate,
    error::{ParseError, RuntimeError},
    interpreter::{context::Context, parser::core::MAX_DEPTH},
};
use serde_json::json;
use walkdir::WalkDir;

#[test]
fn docs_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("docs/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, block) in extract_phrase_blocks(&content).into_iter().enumerate() {
            count += check_block(&block).unwrap_or_else(|message| {
                                            panic!("Example block {} in {:?} failed:\n{}\n{}",
                                                   i + 1,
                                                   path,
                                                   block,
                                                   message)
                                        });
        }
    }

    assert!(count > 0, "No phrase examples found in docs/src");
}

fn extract_phrase_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```phrase") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

/// Checks every `expression => true | false | error` line of a block.
///
/// A `context { ... }` line replaces the context for the lines after it.
fn check_block(block: &str) -> Result<usize, String> {
    let mut context = Context::new();
    let mut checked = 0;

    for line in block.lines().map(str::trim).filter(|line| !line.is_empty()) {
        if let Some(json) = line.strip_prefix("context ") {
            context = Context::from_json(json).map_err(|e| format!("Bad context {json}: {e}"))?;
            continue;
        }

        let (source, expected) =
            line.rsplit_once(" => ")
                .ok_or_else(|| format!("Line without expectation: {line}"))?;
        let result = evaluate(source, &context);

        let matches = match expected.trim() {
            "true" => result == Ok(true),
            "false" => result == Ok(false),
            "error" => result.is_err(),
            other => return Err(format!("Unknown expectation '{other}' in: {line}")),
        };
        if !matches {
            return Err(format!("{source} => {result:?}, expected {expected}"));
        }
        checked += 1;
    }

    Ok(checked)
}

fn assert_true(src: &str, context: &Context) {
    match evaluate(src, context) {
        Ok(true) => {},
        other => panic!("'{src}' should be true, got {other:?}"),
    }
}

fn assert_false(src: &str, context: &Context) {
    match evaluate(src, context) {
        Ok(false) => {},
        other => panic!("'{src}' should be false, got {other:?}"),
    }
}

fn assert_error(src: &str, context: &Context, expected: impl Into<Error>) {
    assert_eq!(evaluate(src, context), Err(expected.into()), "'{src}'");
}

fn context(value: serde_json::Value) -> Context {
    serde_json::from_value(value).unwrap()
}

#[test]
fn empty_expression_is_error() {
    assert_eq!(Expression::compile("").unwrap_err(), ParseError::ExpressionIsEmpty);
}

#[test]
fn boolean_constants() {
    let empty = Context::new();
    assert_true("true", &empty);
    assert_false("false", &empty);
    assert_false("!true", &empty);
    assert_true("!false", &empty);
}

#[test]
fn and_truth_table() {
    let empty = Context::new();
    assert_true("true && true", &empty);
    assert_false("true && false", &empty);
    assert_false("false && true", &empty);
    assert_false("false && false", &empty);
}

#[test]
fn or_truth_table() {
    let empty = Context::new();
    assert_true("true || true", &empty);
    assert_true("true || false", &empty);
    assert_true("false || true", &empty);
    assert_false("false || false", &empty);
}

#[test]
fn chained_logical_operators_bind_left_to_right() {
    let empty = Context::new();
    assert_true("true && true && true", &empty);
    assert_false("true && true && false", &empty);
    assert_true("true || true || true", &empty);
    assert_false("false || false || false", &empty);
    assert_true("false || true && true", &empty);
    // (true || false) && false, not true || (false && false)
    assert_false("true || false && false", &empty);
}

#[test]
fn equality() {
    let empty = Context::new();
    assert_error("1 == 'some text'", &empty, RuntimeError::TypesMismatch);
    assert_true("1 == 1", &empty);
    assert_false("1 == 0", &empty);
    assert_true("1 == 1.0", &empty);
    assert_true("'abc' == 'abc'", &empty);
    assert_true("[1,2] == [1, 2]", &empty);
}

#[test]
fn inequality() {
    let empty = Context::new();
    assert_error("1 != 'some text'", &empty, RuntimeError::TypesMismatch);
    assert_false("1 != 1", &empty);
    assert_true("1 != 0", &empty);
}

#[test]
fn nullability() {
    let empty = Context::new();
    let given = context(json!({ "a": 1 }));
    assert_true("a == nil", &empty);
    assert_false("a == nil", &given);
    assert_false("a != nil", &empty);
    assert_true("a != nil", &given);
}

#[test]
fn comparison() {
    let empty = Context::new();
    for op in [">", ">=", "<", "<="] {
        assert_error(&format!("1 {op} 'some text'"), &empty, RuntimeError::TypesMismatch);
    }

    assert_true("2 > 1", &empty);
    assert_false("2 > 2", &empty);
    assert_false("2 > 3", &empty);

    assert_true("2 >= 1", &empty);
    assert_true("2 >= 2", &empty);
    assert_false("2 >= 3", &empty);

    assert_false("2 < 1", &empty);
    assert_false("2 < 2", &empty);
    assert_true("2 < 3", &empty);

    assert_false("2 <= 1", &empty);
    assert_true("2 <= 2", &empty);
    assert_true("2 <= 3", &empty);

    assert_true("9 < 10", &empty);
    assert_true("'apple' < 'pear'", &empty);
}

#[test]
fn variable_resolving() {
    assert_false("a == b", &context(json!({ "a": 1 })));
    assert_true("a == 'text'", &context(json!({ "a": "text" })));
    assert_true("a == 2", &context(json!({ "a": 2 })));
    assert_false("a == 3", &context(json!({ "a": 2 })));
    assert_true("a == 1.23456789", &context(json!({ "a": 1.234_567_89 })));
    assert_false("a == 0", &context(json!({ "a": 1.234_567_89 })));
    assert_true("a == [1,2,3]", &context(json!({ "a": [1, 2, 3] })));
    assert_false("a == []", &context(json!({ "a": [1, 2, 3] })));
}

#[test]
fn expression_literals_are_lower_cased_but_context_is_not() {
    assert_true("A == 'TEXT'", &context(json!({ "a": "text" })));
    assert_false("a == 'text'", &context(json!({ "a": "Text" })));
    assert_true("Name == nil", &context(json!({ "Name": "x" })));
}

#[test]
fn unsupported_context_values() {
    for value in [json!(null), json!(true), json!({ "b": 1 })] {
        assert_error("a == 1",
                     &context(json!({ "a": value.clone() })),
                     RuntimeError::InvalidVariableType(value));
    }
}

#[test]
fn postfix_count() {
    assert_error("a.count == 3", &context(json!({ "a": 1 })), RuntimeError::TypesMismatch);
    assert_true("a.count == 3", &context(json!({ "a": [1, 2, 3] })));
    assert_true("a.count == 0", &context(json!({ "a": [] })));
    assert_error("a.count == 3",
                 &Context::new(),
                 RuntimeError::UnknownVariable("a".to_string()));
}

#[test]
fn null_check_guards_count() {
    assert_true("a != nil && a.count == 3", &context(json!({ "a": [1, 2, 3] })));
    assert_false("a != nil && a.count == 3", &context(json!({ "a": [1] })));
    // The right side would fail, but is never evaluated.
    assert_false("a != nil && a.count == 3", &Context::new());
}

#[test]
fn logical_operators_require_logical_operands() {
    let given = context(json!({ "a": 1 }));
    assert_error("false || a", &given, RuntimeError::TypesNotLogical);
    assert_error("false || missing", &given, RuntimeError::TypesNotLogical);
    assert_false("1 && true", &given);
    assert_error("!a", &given, RuntimeError::TypesMismatch);
    assert_true("!missing", &given);
}

#[test]
fn and_tests_right_side_for_truth() {
    let given = context(json!({ "a": 1, "x": 1 }));
    assert_false("true && missing", &given);
    assert_false("x == 1 && flag", &given);
    assert_true("x == 1 && !flag", &given);
    assert_error("true && 1", &given, RuntimeError::TypesMismatch);
    assert_error("true && a", &given, RuntimeError::TypesMismatch);
    assert_error("true && 'text'", &given, RuntimeError::TypesMismatch);
}

#[test]
fn syntax_errors() {
    let empty = Context::new();
    assert_error("a ==", &empty, ParseError::InfixMissingSecondaryParameter);
    assert_error("a == 'open", &empty, ParseError::MissingClosingQuote);
    assert_error("a.first.count > 1", &empty, ParseError::InvalidToken("a.first.count".to_string()));
    assert_error("a = 1", &empty, ParseError::UnknownOperator("=".to_string()));
    assert_error("a b", &empty, ParseError::InvalidExpression);
}

#[test]
fn deep_nesting_is_a_compile_error() {
    let empty = Context::new();

    assert_true(&format!("{}true", "!".repeat(100)), &empty);
    assert_error(&format!("{}true", "!".repeat(10_000)),
                 &empty,
                 ParseError::NestingTooDeep(MAX_DEPTH));

    let chain = |terms: usize| format!("true{}", " && true".repeat(terms - 1));
    assert_true(&chain(MAX_DEPTH), &empty);
    assert_error(&chain(10_000), &empty, ParseError::NestingTooDeep(MAX_DEPTH));
}

#[test]
fn same_tree_evaluates_against_many_contexts() {
    let expression = Expression::compile("age >= 18 && country == 'de'").unwrap();

    assert_eq!(expression.evaluate_with(&context(json!({ "age": 30, "country": "de" }))),
               Ok(true));
    assert_eq!(expression.evaluate_with(&context(json!({ "age": 17, "country": "de" }))),
               Ok(false));
    assert_eq!(expression.evaluate_with(&context(json!({ "age": 30, "country": "fr" }))),
               Ok(false));
    // Ordering a missing variable is a type error, not `false`.
    assert_eq!(expression.evaluate(), Err(RuntimeError::TypesMismatch));
}

#[test]
fn repeated_evaluation_is_deterministic() {
    let expression = Expression::compile("[1, 'a'] == [1, 'a'] || false").unwrap();
    let first = expression.evaluate();
    for _ in 0..3 {
        assert_eq!(expression.evaluate(), first);
    }
    assert_eq!(first, Ok(true));
}

#[test]
fn compiled_trees_are_structurally_equal() {
    let source = "a != nil && a.count == 3";
    let first = Expression::compile(source).unwrap();
    let second = Expression::compile(source).unwrap();
    assert_eq!(first.ast(), second.ast());
    assert_eq!(first.to_string(), "((a != nil) && (a.count == 3))");
}
