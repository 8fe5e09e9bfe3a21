//! Diagnostic rendering tests

mod common;

use common::assert_eq;
use pascalite_runtime::{error_codes, Diagnostic, Pascalite};
use rstest::rstest;

fn diagnose(source: &str, file: &str) -> Diagnostic {
    let err = Pascalite::new()
        .run(source)
        .expect_err("source should fail");
    Diagnostic::from_error(&err, file, source)
}

#[test]
fn test_runtime_error_rendering() {
    let diag = diagnose("PROGRAM p;\nBEGIN\n  x := y\nEND.", "demo.pas");
    insta::assert_snapshot!(diag.to_human_string().trim_end(), @r###"
error[PL3001]: undefined variable 'y' at line 3, column 8
  --> demo.pas:3:8
   |
 3 |   x := y
   |        ^ not defined
   = help: variables holding 0, 0.0, '' or false also read as undefined unless falsy_is_undefined = false
"###);
}

#[test]
fn test_lex_error_rendering() {
    let diag = diagnose("PROGRAM p; BEGIN s := 'abc END.", "<input>");
    insta::assert_snapshot!(diag.to_human_string().trim_end(), @r###"
error[PL1002]: unterminated string literal starting at line 1, column 23
  --> <input>:1:23
   |
 1 | PROGRAM p; BEGIN s := 'abc END.
   |                       ^^^^^^^^^ string starts here
   = help: close the string with a matching '
"###);
}

#[test]
fn test_syntax_error_rendering() {
    let diag = diagnose("PROGRAM p; BEGIN x := 1 y := 2 END.", "<input>");
    insta::assert_snapshot!(diag.to_human_string().trim_end(), @r###"
error[PL2001]: expected ';', found identifier at line 1, column 25
  --> <input>:1:25
   |
 1 | PROGRAM p; BEGIN x := 1 y := 2 END.
   |                         ^ expected ';'
"###);
}

#[rstest]
#[case("PROGRAM p; BEGIN x := 1 ? END.", error_codes::UNEXPECTED_CHARACTER)]
#[case("PROGRAM p; BEGIN x := 'a END.", error_codes::UNTERMINATED_STRING)]
#[case("PROGRAM p; { BEGIN END.", error_codes::UNTERMINATED_COMMENT)]
#[case("PROGRAM p; BEGIN x := 99999999999999999999 END.", error_codes::NUMBER_OUT_OF_RANGE)]
#[case("PROGRAM p; BEGIN x := 1 END", error_codes::UNEXPECTED_TOKEN)]
#[case("PROGRAM p; BEGIN END. x", error_codes::TRAILING_INPUT)]
#[case("PROGRAM p; BEGIN x := y END.", error_codes::UNDEFINED_VARIABLE)]
#[case("PROGRAM p; BEGIN x := 'a' * 2 END.", error_codes::TYPE_MISMATCH)]
#[case("PROGRAM p; BEGIN x := 1 div 0 END.", error_codes::DIVISION_BY_ZERO)]
#[case("PROGRAM p; BEGIN x := 9223372036854775807 * 2 END.", error_codes::INTEGER_OVERFLOW)]
fn test_error_codes(#[case] source: &str, #[case] expected_code: &str) {
    let diag = diagnose(source, "<input>");
    assert_eq!(diag.code, expected_code);
    assert_eq!(diag.line, 1);
}

#[test]
fn test_json_diagnostic() {
    let diag = diagnose("PROGRAM p; BEGIN x := 1 / 0 END.", "calc.pas");
    let json: serde_json::Value = serde_json::from_str(&diag.to_json_string().unwrap()).unwrap();

    assert_eq!(json["code"], "PL3003");
    assert_eq!(json["file"], "calc.pas");
    assert_eq!(json["line"], 1);
    assert_eq!(json["column"], 23);
    assert_eq!(json["snippet"], "PROGRAM p; BEGIN x := 1 / 0 END.");
    assert_eq!(json["label"], "divisor is zero");
}
