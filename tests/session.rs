use deskcalc::interpreter::{
    session::{Calculator, SessionConfig},
    token_stream::TokenStream,
};

fn run(config: SessionConfig, input: impl AsRef<[u8]>) -> (String, String) {
    let mut calculator = Calculator::new(config);
    let mut tokens = TokenStream::new(input.as_ref());
    let (mut out, mut err) = (Vec::new(), Vec::new());

    calculator.run_session(&mut tokens, &mut out, &mut err)
              .unwrap_or_else(|e| panic!("session failed: {e}"));

    (String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
}

fn run_quiet(input: impl AsRef<[u8]>) -> (String, String) {
    run(SessionConfig { show_prompt: false,
                        ..SessionConfig::default() },
        input)
}

#[test]
fn prints_prompt_and_results() {
    let (out, err) = run(SessionConfig::default(), "2 + 3;\nq\n");
    assert_eq!(out, "> = 5\n> ");
    assert!(err.is_empty());
}

#[test]
fn several_statements_on_one_line() {
    let (out, _) = run_quiet("1; 2; 3;");
    assert_eq!(out, "= 1\n= 2\n= 3\n");
}

#[test]
fn empty_statements_are_skipped() {
    let (out, err) = run_quiet(";;;\n;\n4;;\n");
    assert_eq!(out, "= 4\n");
    assert!(err.is_empty());
}

#[test]
fn quit_ends_the_session() {
    let (out, _) = run_quiet("1;\nq\n2;\n");
    assert_eq!(out, "= 1\n");
}

#[test]
fn end_of_input_ends_the_session() {
    let (out, err) = run_quiet("7 * 6");
    assert_eq!(out, "= 42\n");
    assert!(err.is_empty());
}

#[test]
fn session_continues_after_divide_by_zero() {
    let (out, err) = run_quiet("1/0;\n5 + 5;\n");
    assert_eq!(out, "= 10\n");
    assert_eq!(err, "Error on line 1: Divide by zero.\n");
}

#[test]
fn recovery_skips_to_the_next_statement_only() {
    let (out, err) = run_quiet("1 + $ + 2; 3;\n");
    assert_eq!(out, "= 3\n");
    assert_eq!(err, "Error on line 1: Bad token '$'.\n");
}

#[test]
fn recovery_keeps_a_terminator_already_read() {
    // The `;` ending the broken statement is the boundary; `4` survives.
    let (out, err) = run_quiet("(1 + 2; 4;\n");
    assert_eq!(out, "= 4\n");
    assert_eq!(err,
               "Error on line 1: Expected closing parenthesis ')' but none found.\n");

    let (out, _) = run_quiet("1 + ; 4;\n");
    assert_eq!(out, "= 4\n");
}

#[test]
fn recovery_spans_lines() {
    let (out, err) = run_quiet("foo\n+ 1\n+ 2; 8;\n");
    assert_eq!(out, "= 8\n");
    assert_eq!(err, "Error on line 1: Undefined name 'foo'.\n");
}

#[test]
fn invalid_utf8_is_a_bad_token() {
    let (out, err) = run_quiet(b"1 \xB0 2;\n3;\n");
    assert_eq!(out, "= 3\n");
    assert_eq!(err, "Error on line 1: Bad token '\u{FFFD}'.\n");
}

#[test]
fn every_error_is_reported_and_recovered() {
    let input = "let x = 1;\nlet x = 2;\nsqrt(-4);\nx = 3;\nx;\nq\n";
    let (out, err) = run_quiet(input);
    assert_eq!(out, "= 1\n= 3\n= 3\n");
    assert_eq!(err,
               "Error on line 2: 'x' declared twice.\nError on line 3: Radicand can't be \
                negative, found -4.\n");
}

#[test]
fn constants_reject_assignment_in_session() {
    let (out, err) = run_quiet("let constant c = 2;\nc = 3;\nc;\n");
    assert_eq!(out, "= 2\n= 2\n");
    assert_eq!(err, "Error on line 2: Cannot assign to constant 'c'.\n");
}

#[test]
fn builtins_can_be_disabled() {
    let (out, _) = run_quiet("k;");
    assert_eq!(out, "= 1000\n");

    let config = SessionConfig { show_prompt: false,
                                 builtins: false,
                                 ..SessionConfig::default() };
    let (out, err) = run(config, "k;\nlet k = 3;\n");
    assert_eq!(out, "= 3\n");
    assert_eq!(err, "Error on line 1: Undefined name 'k'.\n");
}

#[test]
fn results_use_general_notation() {
    let (out, _) = run_quiet("1 / 3;\npow(10, 20);\n2.5;\n0.0001;\n0.00001;\n");
    assert_eq!(out, "= 0.333333\n= 1e+20\n= 2.5\n= 0.0001\n= 1e-05\n");
}

#[test]
fn precision_is_configurable() {
    let config = SessionConfig { show_prompt: false,
                                 precision: 3,
                                 ..SessionConfig::default() };
    let (out, _) = run(config, "1 / 3;\n1234;\n");
    assert_eq!(out, "= 0.333\n= 1.23e+03\n");
}

#[test]
fn variables_persist_between_statements() {
    let mut calculator = Calculator::default();
    assert_eq!(calculator.evaluate("let a = 2;").unwrap(), vec![2.0]);
    assert_eq!(calculator.evaluate("a = a * 10; a + 1;").unwrap(), vec![20.0, 21.0]);

    let names: Vec<_> = calculator.symbols()
                                  .variables()
                                  .map(|variable| variable.name.as_str())
                                  .collect();
    assert_eq!(names, vec!["k", "a"]);
}
