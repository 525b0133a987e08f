// tests/property/parser_test.rs

//! Property-based tests for the command grammar and reply envelope.

use bytes::BytesMut;
use fuod::core::handler::HandlerCategory;
use fuod::core::protocol::codec::ChunkCodec;
use fuod::core::protocol::reply::{FAILURE_TEXT, NOT_FOUND_TEXT};
use fuod::core::{Command, Reply};
use proptest::prelude::*;
use strum::IntoEnumIterator;
use tokio_util::codec::Decoder;

fn whitespace() -> impl Strategy<Value = String> {
    "[ \t]{1,4}"
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 200,
        max_shrink_iters: 1000,
        ..ProptestConfig::default()
    })]

    #[test]
    fn test_parse_lowercases_action_and_keeps_args(
        action in "[A-Za-z][A-Za-z0-9_-]{0,15}",
        args in prop::collection::vec("[!-~]{1,20}", 0..6),
        sep in whitespace(),
        lead in "[ \t]{0,3}",
        trail in "[ \t\r\n]{0,3}",
    ) {
        let mut line = format!("{lead}{action}");
        for arg in &args {
            line.push_str(&sep);
            line.push_str(arg);
        }
        line.push_str(&trail);

        let cmd = Command::parse(&line).unwrap();
        prop_assert_eq!(cmd.action(), action.to_lowercase());
        prop_assert_eq!(cmd.args(), args.as_slice());
    }

    #[test]
    fn test_display_reparses_to_same_command(
        action in "[a-z][a-z0-9_]{0,10}",
        args in prop::collection::vec("[!-~]{1,12}", 0..5),
    ) {
        let cmd = Command::new(action, args);
        let reparsed = Command::parse(&cmd.to_string()).unwrap();
        prop_assert_eq!(reparsed, cmd);
    }

    #[test]
    fn test_blank_lines_never_parse(line in "[ \t\r\n]{0,20}") {
        prop_assert!(Command::parse(&line).unwrap_err().is_parse_error());
    }

    #[test]
    fn test_ack_always_ends_with_ok(
        action in "[a-z]{1,10}",
        args in prop::collection::vec("[!-~]{1,12}", 0..4),
        body in proptest::option::of("[ -~\n]{0,64}"),
    ) {
        let cmd = Command::new(action.clone(), args);
        let text = Reply::ack(&cmd, body).to_string();
        let expected_prefix = format!("ACK {}", action);
        prop_assert!(text.starts_with(&expected_prefix));
        prop_assert!(text.ends_with("\nOK\n"));
        prop_assert_ne!(text.as_str(), NOT_FOUND_TEXT);
        prop_assert_ne!(text.as_str(), FAILURE_TEXT);
    }

    #[test]
    fn test_unknown_actions_have_no_category(action in "[a-z]{1,12}") {
        let known = HandlerCategory::for_action(&action).is_some();
        let listed = HandlerCategory::iter()
            .flat_map(|c| c.actions().iter())
            .any(|a| *a == action);
        prop_assert_eq!(known, listed);
    }

    #[test]
    fn test_decoder_chunks_never_exceed_limit(
        data in prop::collection::vec(any::<u8>(), 1..4096),
        max_chunk in 1usize..2048,
    ) {
        let mut codec = ChunkCodec::new(max_chunk);
        let mut buf = BytesMut::from(&data[..]);
        let mut out = Vec::new();
        while let Some(chunk) = codec.decode(&mut buf).unwrap() {
            prop_assert!(!chunk.is_empty());
            prop_assert!(chunk.len() <= max_chunk);
            out.extend_from_slice(&chunk);
        }
        prop_assert_eq!(out, data);
    }
}
