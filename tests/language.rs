use std::{
    fs::{self},
    time::{Duration, Instant},
};

use deskcalc::{
    error::{Error, ParseError, RuntimeError},
    get_results,
};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_calc_blocks(&content).into_iter().enumerate() {
            count += 1;
            if let Err(e) = get_results(&code) {
                panic!("Calculator example {} in {:?} failed:\n{}\nError: {:?}",
                       i + 1,
                       path,
                       code,
                       e);
            }
        }
    }

    assert!(count > 0, "No calculator examples found in book/src");
}

fn extract_calc_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```calc") {
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

fn assert_value(src: &str, expected: f64) {
    match get_results(src) {
        Ok(values) => assert_eq!(values.last().copied(),
                                 Some(expected),
                                 "unexpected result for {src:?}"),
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn assert_failure(src: &str) -> Error {
    match get_results(src) {
        Ok(values) => panic!("Script succeeded with {values:?} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn precedence_and_associativity() {
    assert_value("1 + 2 * 3;", 7.0);
    assert_value("(1 + 2) * 3;", 9.0);
    assert_value("10 - 4 - 3;", 3.0);
    assert_value("64 / 4 / 2;", 8.0);
    assert_value("2 * 3 + 4 * 5;", 26.0);
    assert_value("2 * (3 + 4) * 5;", 70.0);
    assert_value("((((7))));", 7.0);
    assert_value("1.5 + .5;", 2.0);
    assert_value("2e3 + 1;", 2001.0);
}

#[test]
fn unary_operators() {
    assert_value("-3;", -3.0);
    assert_value("+-3;", 3.0);
    assert_value("+3;", 3.0);
    assert_value("--3;", 3.0);
    assert_value("-2 * 3;", -6.0);
    assert_value("-(2 + 3);", -5.0);
    assert_value("4 - -2;", 6.0);
}

#[test]
fn remainder() {
    assert_value("7 % 3;", 1.0);
    assert_value("-7 % 3;", -1.0);
    assert_value("7.5 % 2;", 1.5);
    assert_value("2 + 7 % 3 * 2;", 4.0);
}

#[test]
fn square_root() {
    assert_value("sqrt(4);", 2.0);
    assert_value("sqrt 16;", 4.0);
    assert_value("sqrt 4 + 5;", 7.0);
    assert_value("sqrt(0);", 0.0);
    assert!(matches!(assert_failure("sqrt(-1);"),
                     Error::Runtime(RuntimeError::NegativeRadicand { .. })));
}

#[test]
fn power() {
    assert_value("pow(2, 10);", 1024.0);
    assert_value("pow(5, 0);", 1.0);
    assert_value("pow(0, 0);", 1.0);
    assert_value("pow(-2, 3);", -8.0);
    assert_value("pow(-2, 4);", 16.0);
    assert_value("pow(2, 3.9);", 8.0);
    assert_value("pow(2, -2);", 0.25);
    assert_value("pow(-1, 7);", -1.0);
    assert_value("pow((1 + 1), (2 * 2));", 16.0);
    assert_value("let x = 3; pow(x, 0);", 1.0);
}

#[test]
fn power_with_huge_counts_is_fast() {
    let started = Instant::now();
    assert_value("pow(1.0000001, 1e10);", f64::INFINITY);
    assert_value("pow(1.000000001, 1e15);", f64::INFINITY);
    assert_value("pow(0.5, 1e15);", 0.0);
    assert_value("pow(1, 9007199254740991);", 1.0);
    assert_value("pow(-1, 9007199254740991);", -1.0);
    assert_value("pow(-1, 9007199254740990);", 1.0);
    assert_value("pow(10, 20);", 1e20);
    assert!(started.elapsed() < Duration::from_secs(1),
            "pow took {:?}",
            started.elapsed());
}

#[test]
fn power_syntax_errors() {
    assert!(matches!(assert_failure("pow 2, 3;"),
                     Error::Parse(ParseError::MissingOpenParen { .. })));
    assert!(matches!(assert_failure("pow(2 3);"),
                     Error::Parse(ParseError::MissingCommaInPow { .. })));
    assert!(matches!(assert_failure("pow(2, 3;"),
                     Error::Parse(ParseError::MissingCloseParen { .. })));
    assert!(matches!(assert_failure("pow(0, -1);"),
                     Error::Runtime(RuntimeError::DivideByZero { .. })));
    assert!(matches!(assert_failure("pow(2, 1e300);"),
                     Error::Runtime(RuntimeError::InvalidExponent { .. })));
}

#[test]
fn declarations_and_reads() {
    assert_value("let x = 5; x + 1;", 6.0);
    assert_value("let y = 2.5; y;", 2.5);
    assert_value("let a = 2; let b = a * 3; a + b;", 8.0);
    assert_value("let constant c = 4; c * c;", 16.0);
    assert!(matches!(assert_failure("let x = 5; let x = 6;"),
                     Error::Runtime(RuntimeError::DuplicateName { .. })));
    assert!(matches!(assert_failure("let 5 = 6;"),
                     Error::Parse(ParseError::NameExpected { .. })));
    assert!(matches!(assert_failure("let constant = 6;"),
                     Error::Parse(ParseError::NameExpected { .. })));
    assert!(matches!(assert_failure("let x 6;"),
                     Error::Parse(ParseError::AssignmentExpected { .. })));
}

#[test]
fn assignment_is_an_expression() {
    assert_value("let x = 1; x = 7; x;", 7.0);
    assert_value("let x = 1; x = x + 1;", 2.0);
    assert_value("let a = 0; let b = 0; a = b = 3; a + b;", 6.0);
    assert_value("let x = 1; 2 * (x = 4) + x;", 12.0);
    assert!(matches!(assert_failure("z = 3;"),
                     Error::Runtime(RuntimeError::UndefinedName { .. })));
}

#[test]
fn constants_cannot_be_assigned() {
    assert!(matches!(assert_failure("let constant c = 1; c = 2;"),
                     Error::Runtime(RuntimeError::ConstantAssignment { .. })));
    assert!(matches!(assert_failure("k = 5;"),
                     Error::Runtime(RuntimeError::ConstantAssignment { .. })));
}

#[test]
fn builtin_k_is_seeded() {
    assert_value("k;", 1000.0);
    assert_value("2 * k;", 2000.0);
    assert!(matches!(assert_failure("let k = 1;"),
                     Error::Runtime(RuntimeError::DuplicateName { .. })));
}

#[test]
fn quit_stops_evaluation() {
    assert_eq!(get_results("1; 2; q 3;").unwrap(), vec![1.0, 2.0]);
    assert_eq!(get_results(";;; 4;;").unwrap(), vec![4.0]);
    assert!(get_results("").unwrap().is_empty());
}

#[test]
fn quit_word_is_an_ordinary_name() {
    assert!(matches!(assert_failure("quit;"),
                     Error::Runtime(RuntimeError::UndefinedName { .. })));
    assert_value("let quux = 3; quux;", 3.0);
}

#[test]
fn statements_may_span_lines() {
    assert_value("let total =\n  1 +\n  2;\ntotal;", 3.0);
}

#[test]
fn test_script_file() {
    let script = fs::read_to_string("tests/example.calc").expect("missing file");
    let values = get_results(&script).expect("script failed");
    assert_eq!(values.last().copied(), Some(78.5));
}

#[test]
fn division_by_zero_is_error() {
    assert!(matches!(assert_failure("1 / 0;"),
                     Error::Runtime(RuntimeError::DivideByZero { line: 1 })));
    assert!(matches!(assert_failure("1 % 0;"),
                     Error::Runtime(RuntimeError::DivideByZero { .. })));
    assert!(matches!(assert_failure("1 / (2 - 2);"),
                     Error::Runtime(RuntimeError::DivideByZero { .. })));
}

#[test]
fn unknown_variable_is_error() {
    assert!(matches!(assert_failure("foo + 1;"),
                     Error::Runtime(RuntimeError::UndefinedName { .. })));
}

#[test]
fn syntax_errors() {
    assert!(matches!(assert_failure("(1 + 2;"),
                     Error::Parse(ParseError::MissingCloseParen { .. })));
    assert!(matches!(assert_failure("1 + ;"),
                     Error::Parse(ParseError::PrimaryExpected { .. })));
    assert!(matches!(assert_failure(")"),
                     Error::Parse(ParseError::PrimaryExpected { .. })));
    assert!(matches!(assert_failure("1 + $;"),
                     Error::Parse(ParseError::BadToken { .. })));
    assert!(matches!(assert_failure("1 +"),
                     Error::Parse(ParseError::UnexpectedEndOfInput { .. })));
}

#[test]
fn errors_report_their_line() {
    let error = assert_failure("1;\n2;\n3 / 0;");
    assert_eq!(error.to_string(), "Error on line 3: Divide by zero.");
}
