//! Unit tests for per-line formatting

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use std::cell::RefCell;
    use std::io::Cursor;
    use vebuild_pretty::cli::StreamOptions;
    use vebuild_pretty::config::Defaults;
    use vebuild_pretty::format::{FormatRequest, LineFormatter};
    use vebuild_pretty::operations::format_stream;

    /// Records every request it is asked to format
    #[derive(Default)]
    struct Recorder {
        calls: RefCell<Vec<FormatRequest>>,
    }

    impl LineFormatter for Recorder {
        fn format_line(&self, request: &FormatRequest) -> String {
            self.calls.borrow_mut().push(request.clone());
            request.description.clone()
        }
    }

    fn run(args: &[&str], input: &str) -> Vec<FormatRequest> {
        let recorder = Recorder::default();
        let options = StreamOptions::parse(args, &Defaults::default());
        let mut out = Vec::new();
        format_stream(Cursor::new(input.to_owned()), &mut out, &recorder, &options).unwrap();
        recorder.calls.into_inner()
    }

    #[test]
    fn vebuild_scenario() {
        let calls = run(&["--vebuild", "test", "net"], "ok\nfail: timeout\n");
        assert_eq!(
            calls,
            vec![
                FormatRequest::new("test", "net", "ok", false),
                FormatRequest::new("test", "net", "fail: timeout", false),
            ]
        );
    }

    #[test]
    fn one_call_per_line() {
        let input: String = (0..25).map(|i| format!("line {i}\n")).collect();
        let calls = run(&["CC", "fat"], &input);

        assert_eq!(calls.len(), 25);
        for (i, call) in calls.iter().enumerate() {
            assert_eq!(call.description, format!("line {i}"));
            assert!(call.is_custom);
        }
    }

    #[test]
    fn empty_input_never_calls_formatter() {
        assert!(run(&["--vebuild", "make"], "").is_empty());
    }

    #[test]
    fn only_the_terminator_is_removed() {
        let calls = run(&["CC", "fat"], "  indented\t \r\n\n");
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].description, "  indented\t ");
        assert_eq!(calls[1].description, "");
    }
}
