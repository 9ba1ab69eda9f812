// crates/engine/src/processor.rs
use crate::classifier::Classifier;
use crate::error::{EngineError, Result};
use crate::formatter::write_record;
use crate::output::OutputOpener;
use crate::router::OutputRegistry;
use crate::stats::LineCounts;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Route every line of the file at `path`.
///
/// Counts are updated as lines are handled, so a file that fails half-way
/// still contributes what was written before the failure.
///
/// # Errors
/// [`EngineError::InputOpen`]/[`EngineError::InputRead`] for problems with the
/// input, [`EngineError::OutputWrite`] if an output rejects a write.
pub fn process_file<O: OutputOpener>(
    path: &Path,
    classifier: &Classifier,
    registry: &mut OutputRegistry<O>,
    counts: &mut LineCounts,
) -> Result<()> {
    let file = File::open(path).map_err(|source| EngineError::InputOpen {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = BufReader::new(file);
    process_lines(&mut reader, path, classifier, registry, counts)
}

/// Line loop shared by files and in-memory readers.
///
/// Lines are split on `\n` only; a `\r` before it stays part of the line.
/// A last line without a terminator is still processed.
///
/// # Errors
/// See [`process_file`].
pub fn process_lines<R: BufRead, O: OutputOpener>(
    reader: &mut R,
    path: &Path,
    classifier: &Classifier,
    registry: &mut OutputRegistry<O>,
    counts: &mut LineCounts,
) -> Result<()> {
    let mut line = Vec::new();

    loop {
        line.clear();
        let n = reader
            .read_until(b'\n', &mut line)
            .map_err(|source| EngineError::InputRead {
                path: path.to_path_buf(),
                source,
            })?;
        if n == 0 {
            break;
        }
        if line.last() == Some(&b'\n') {
            line.pop();
        }
        counts.read += 1;
        route_line(&line, classifier, registry, counts)?;
    }

    Ok(())
}

/// Classify one line and append it to its output.
///
/// # Errors
/// [`EngineError::OutputWrite`] if the routed output rejects the write.
pub fn route_line<O: OutputOpener>(
    line: &[u8],
    classifier: &Classifier,
    registry: &mut OutputRegistry<O>,
    counts: &mut LineCounts,
) -> Result<()> {
    let Some(classification) = classifier.classify(line) else {
        counts.dropped += 1;
        return Ok(());
    };
    counts.matched += 1;
    let domain = classification.domain.as_str();

    let Some(writer) = registry.route(domain) else {
        counts.unrouted += 1;
        return Ok(());
    };
    if let Err(source) = write_record(writer, line) {
        return Err(EngineError::OutputWrite {
            path: registry.path_of(registry.destination_for(domain)),
            source,
        });
    }

    counts.record_written(&registry.file_name(registry.destination_for(domain)));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allow_list::AllowList;
    use crate::output::MemoryOpener;
    use std::io::{BufReader, Cursor, Read, Write};
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    /// Reader that fails on every call.
    struct Unreadable;

    impl Read for Unreadable {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("device went away"))
        }
    }

    fn setup(opener: &MemoryOpener) -> (Classifier, OutputRegistry<MemoryOpener>) {
        let classifier = Classifier::new().unwrap();
        let registry = OutputRegistry::open(opener.clone(), AllowList::builtin()).unwrap();
        (classifier, registry)
    }

    #[test]
    fn test_lines_are_routed_and_formatted() {
        let opener = MemoryOpener::new();
        let (classifier, mut registry) = setup(&opener);
        let mut counts = LineCounts::default();

        let mut input = Cursor::new(
            "alice@gmail.com: hi\nbob@unknown.org no colon here\nnot an email at all\n",
        );
        process_lines(&mut input, Path::new("mem"), &classifier, &mut registry, &mut counts)
            .unwrap();
        registry.finish().unwrap();

        assert_eq!(opener.text("gmail.txt").as_deref(), Some("alice@gmail.com\thi\n"));
        assert_eq!(
            opener.text("other.txt").as_deref(),
            Some("bob@unknown.org no colon here\n")
        );
        assert_eq!(counts.read, 3);
        assert_eq!(counts.matched, 2);
        assert_eq!(counts.dropped, 1);
        assert_eq!(counts.written(), 2);
    }

    #[test]
    fn test_crlf_and_missing_final_newline() {
        let opener = MemoryOpener::new();
        let (classifier, mut registry) = setup(&opener);
        let mut counts = LineCounts::default();

        let mut input = Cursor::new(b"a@yahoo.com:pw\r\nb@yahoo.com:last".to_vec());
        process_lines(&mut input, Path::new("mem"), &classifier, &mut registry, &mut counts)
            .unwrap();

        assert_eq!(
            opener.contents("yahoo.txt").unwrap(),
            b"a@yahoo.com\tpw\r\nb@yahoo.com\tlast\n"
        );
        assert_eq!(counts.read, 2);
    }

    #[test]
    fn test_unavailable_output_drops_line() {
        let opener = MemoryOpener::failing(["gmail.txt"]);
        let (classifier, mut registry) = setup(&opener);
        let mut counts = LineCounts::default();

        route_line(b"x@gmail.com:1", &classifier, &mut registry, &mut counts).unwrap();
        route_line(b"y@gmail.com:2", &classifier, &mut registry, &mut counts).unwrap();

        assert_eq!(counts.matched, 2);
        assert_eq!(counts.unrouted, 2);
        assert_eq!(counts.written(), 0);
        // No fallback to the overflow file.
        assert_eq!(opener.contents("other.txt"), Some(Vec::new()));
    }

    #[test]
    fn test_read_error_keeps_lines_already_written() {
        let opener = MemoryOpener::new();
        let (classifier, mut registry) = setup(&opener);
        let mut counts = LineCounts::default();

        let mut input = BufReader::new(Cursor::new(b"a@gmail.com:1\n".to_vec()).chain(Unreadable));
        let err = process_lines(
            &mut input,
            Path::new("flaky.txt"),
            &classifier,
            &mut registry,
            &mut counts,
        )
        .unwrap_err();

        assert!(matches!(err, EngineError::InputRead { .. }));
        assert!(err.is_file_scoped());
        assert!(err.to_string().contains("flaky.txt"));
        assert_eq!(counts.read, 1);
        assert_eq!(opener.text("gmail.txt").as_deref(), Some("a@gmail.com\t1\n"));
    }

    #[test]
    fn test_write_failure_names_the_output() {
        let opener = MemoryOpener::new().with_broken_writes(["gmail.txt", "other.txt"]);
        let (classifier, mut registry) = setup(&opener);
        let mut counts = LineCounts::default();

        let err = route_line(b"x@gmail.com:1", &classifier, &mut registry, &mut counts)
            .unwrap_err();
        match err {
            EngineError::OutputWrite { path, .. } => assert_eq!(path, PathBuf::from("gmail.txt")),
            other => panic!("unexpected error: {other}"),
        }

        let err = route_line(b"y@example.org:2", &classifier, &mut registry, &mut counts)
            .unwrap_err();
        assert!(!err.is_file_scoped());
        assert!(err.to_string().contains("other.txt"));
        assert_eq!(counts.written(), 0);
    }

    #[test]
    fn test_process_file_missing_input() {
        let opener = MemoryOpener::new();
        let (classifier, mut registry) = setup(&opener);
        let mut counts = LineCounts::default();

        let err = process_file(
            Path::new("definitely/not/here.txt"),
            &classifier,
            &mut registry,
            &mut counts,
        )
        .unwrap_err();
        assert!(err.is_file_scoped());
        assert!(err.to_string().contains("here.txt"));
    }

    #[test]
    fn test_process_file_reads_from_disk() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "USER@GMAIL.COM:secret\nnothing\n").unwrap();

        let opener = MemoryOpener::new();
        let (classifier, mut registry) = setup(&opener);
        let mut counts = LineCounts::default();
        process_file(file.path(), &classifier, &mut registry, &mut counts).unwrap();

        assert_eq!(opener.text("gmail.txt").as_deref(), Some("USER@GMAIL.COM\tsecret\n"));
        assert_eq!(counts.dropped, 1);
    }
}
