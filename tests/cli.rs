use std::process::Command;

fn deskcalc(args: &[&str]) -> (Option<i32>, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_deskcalc")).args(args)
                                                             .output()
                                                             .unwrap();
    (output.status.code(),
     String::from_utf8(output.stdout).unwrap(),
     String::from_utf8(output.stderr).unwrap())
}

#[test]
fn statements_from_the_command_line() {
    let (code, out, err) = deskcalc(&["--quiet", "1 + 1; pow(2, 3);"]);
    assert_eq!(code, Some(0));
    assert_eq!(out, "= 2\n= 8\n");
    assert!(err.is_empty());
}

#[test]
fn script_file_is_evaluated() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/example.calc");
    let (code, out, _) = deskcalc(&["--quiet", "--file", path]);
    assert_eq!(code, Some(0));
    assert!(out.ends_with("= 78.5\n"), "unexpected output {out:?}");
}

#[test]
fn unreadable_file_exits_with_one() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/no-such-script.calc");
    let (code, out, err) = deskcalc(&["--quiet", "--file", path]);
    assert_eq!(code, Some(1));
    assert!(out.is_empty());
    assert!(err.starts_with("exception: I/O error:"), "unexpected diagnostics {err:?}");
}
