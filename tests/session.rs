use reckon::{
    repl::{Line, PROMPT, Session, SessionSummary, classify},
    util::num::format_general,
};

fn run_quiet(input: &str) -> (String, SessionSummary) {
    let mut output = Vec::new();
    let summary = Session::new(input.as_bytes(), &mut output).run()
                                                             .expect("in-memory session cannot fail");
    (String::from_utf8(output).expect("session output is UTF-8"), summary)
}

#[test]
fn classify_lines() {
    assert_eq!(classify("quit"), Line::Quit);
    assert_eq!(classify("  exit  \n"), Line::Quit);
    assert_eq!(classify("\n"), Line::Blank);
    assert_eq!(classify(""), Line::Blank);
    assert_eq!(classify("Quit"), Line::Expression("Quit"));
    assert_eq!(classify("  2 + 2\r\n"), Line::Expression("2 + 2"));
}

#[test]
fn prints_results_and_errors() {
    let (output, summary) = run_quiet("2+2\n5/0\n(2+3)*(4-1)\n5+a\n");
    assert_eq!(output,
               "= 4\nError: division by zero\n= 15\nError: invalid token in expression: 'a'\n");
    assert_eq!(summary,
               SessionSummary { evaluated: 4,
                                failed:    2, });
}

#[test]
fn skips_blank_lines() {
    let (output, summary) = run_quiet("\n   \n1+1\n\t\n");
    assert_eq!(output, "= 2\n");
    assert_eq!(summary.evaluated, 1);
}

#[test]
fn stops_at_quit_or_exit() {
    let (output, _) = run_quiet("1\nquit\n2\n");
    assert_eq!(output, "= 1\n");

    let (output, _) = run_quiet("  exit \n2\n");
    assert_eq!(output, "");
}

#[test]
fn stops_at_end_of_input_without_newline() {
    let (output, _) = run_quiet("1+2");
    assert_eq!(output, "= 3\n");
}

#[test]
fn tabs_inside_a_line_are_rejected() {
    let (output, _) = run_quiet("\t1 + 2\t\n1\t+2\n");
    assert_eq!(output, "= 3\nError: invalid token in expression: '\t'\n");
}

#[test]
fn invalid_utf8_line_is_reported_and_session_continues() {
    let mut output = Vec::new();
    let summary = Session::new(&b"1+1\n\xff\n2+2\n"[..], &mut output).run().unwrap();

    assert_eq!(String::from_utf8(output).unwrap(),
               "= 2\nError: invalid token in expression: '\u{fffd}'\n= 4\n");
    assert_eq!(summary,
               SessionSummary { evaluated: 3,
                                failed:    1, });
}

#[test]
fn interactive_session_prints_banner_prompts_and_farewell() {
    let mut output = Vec::new();
    Session::new("2*3\nexit\n".as_bytes(), &mut output).interactive(true)
                                                       .run()
                                                       .unwrap();
    let output = String::from_utf8(output).unwrap();

    assert!(output.starts_with("Welcome to reckon!\n"));
    assert!(output.contains(&format!("{PROMPT}= 6\n{PROMPT}")));
    assert!(output.ends_with("Goodbye!\n"));
}

#[test]
fn interactive_session_ends_cleanly_on_eof() {
    let mut output = Vec::new();
    let summary = Session::new("1/4\n".as_bytes(), &mut output).interactive(true)
                                                               .run()
                                                               .unwrap();
    let output = String::from_utf8(output).unwrap();

    assert!(output.ends_with(&format!("{PROMPT}= 0.25\n{PROMPT}\nGoodbye!\n")));
    assert_eq!(summary.evaluated, 1);
}

#[test]
fn general_format() {
    assert_eq!(format_general(15.0), "15");
    assert_eq!(format_general(-2.5), "-2.5");
    assert_eq!(format_general(0.0), "0");
    assert_eq!(format_general(-0.0), "-0");
    assert_eq!(format_general(999_999.0), "999999");
    assert_eq!(format_general(1e6), "1e+06");
    assert_eq!(format_general(-1.5e300), "-1.5e+300");
    assert_eq!(format_general(0.000_1), "0.0001");
    assert_eq!(format_general(0.000_099), "9.9e-05");
    assert_eq!(format_general(f64::NAN), "NaN");
    assert_eq!(format_general(f64::INFINITY), "+Inf");
}
