//! # Trace Parsing Tests
//!
//! Verifies activity recognition, delimiter handling, and parse failures.

use intsim_core::SimError;
use intsim_core::trace::{Activity, TraceEvent, parse_line};
use rstest::rstest;

#[rstest]
#[case("CPU, 50", TraceEvent::Cpu { duration: 50 })]
#[case("CPU 50", TraceEvent::Cpu { duration: 50 })]
#[case("SYSCALL, 2", TraceEvent::Syscall { device: 2 })]
#[case("SYSCALL\t2", TraceEvent::Syscall { device: 2 })]
#[case("END_IO, 14", TraceEvent::EndIo { device: 14 })]
#[case("  END_IO ,  3  ", TraceEvent::EndIo { device: 3 })]
#[case("CPU,0", TraceEvent::Cpu { duration: 0 })]
#[case("CPU 4294967295", TraceEvent::Cpu { duration: 4_294_967_295 })]
#[case("SYSCALL, 4294967295", TraceEvent::Syscall { device: 4_294_967_295 })]
fn parses_known_activities(#[case] line: &str, #[case] expected: TraceEvent) {
    assert_eq!(parse_line(line).unwrap(), expected);
}

#[rstest]
#[case("FOO 9", "FOO")]
#[case("cpu, 10", "cpu")]
#[case("FORK, 0", "FORK")]
fn unknown_activity_is_not_an_error(#[case] line: &str, #[case] token: &str) {
    let event = parse_line(line).unwrap();
    assert_eq!(event.activity(), Activity::Unknown);
    assert_eq!(event.operand(), 0);
    assert_eq!(
        event,
        TraceEvent::Unknown {
            activity: token.to_owned()
        }
    );
}

#[rstest]
#[case("CPU, abc")]
#[case("CPU, -5")]
#[case("SYSCALL, 2.5")]
#[case("END_IO")]
#[case("CPU,")]
#[case("FOO, bar")]
fn malformed_operand_fails(#[case] line: &str) {
    match parse_line(line) {
        Err(SimError::TraceParse { line: 0, text, .. }) => assert_eq!(text, line),
        other => panic!("expected parse failure, got {other:?}"),
    }
}

#[rstest]
#[case("CPU 4294967296")]
#[case("CPU 18446744073709551615")]
#[case("END_IO, 99999999999")]
fn operand_wider_than_32_bits_is_rejected(#[case] line: &str) {
    match parse_line(line) {
        Err(SimError::TraceParse { text, reason, .. }) => {
            assert_eq!(text, line);
            assert_eq!(reason, "operand out of range");
        }
        other => panic!("expected range failure, got {other:?}"),
    }
}

#[test]
fn operand_matches_kind() {
    assert_eq!(parse_line("CPU 70").unwrap().operand(), 70);
    assert_eq!(parse_line("SYSCALL 4").unwrap().operand(), 4);
    assert_eq!(parse_line("END_IO 4").unwrap().activity(), Activity::EndIo);
}

#[test]
fn parse_error_message_names_line() {
    let err = parse_line("CPU, x").unwrap_err().at_line(7);
    let msg = err.to_string();
    assert!(msg.contains("trace line 7"), "{msg}");
    assert!(msg.contains("CPU, x"), "{msg}");
}
