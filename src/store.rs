//! JSON persistence for the [`ElectionLedger`].
//!
//! The whole ledger is written as one object with `candidates`, `voters`
//! and `results` fields. Loading is all-or-nothing: a document that fails to
//! parse leaves the in-memory ledger exactly as it was.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::Result;
use crate::model::ElectionLedger;

/// Where the ledger is kept unless configured otherwise.
pub const DEFAULT_DATA_PATH: &str = "voting_data.json";

/// What happened when loading a ledger file.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The file was read and replaced the ledger's state.
    Loaded,
    /// There was no file; the ledger is unchanged.
    Fresh,
    /// The file was not a valid ledger document; the ledger is unchanged.
    Corrupted,
}

impl ElectionLedger {
    /// Write the whole ledger to `destination`, replacing any existing file.
    pub fn save_all(&self, destination: impl AsRef<Path>) -> Result<()> {
        let destination = destination.as_ref();

        let mut json = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut json, PrettyFormatter::with_indent(b"    "));
        self.serialize(&mut serializer)?;
        fs::write(destination, json)?;

        info!("Data saved successfully to {}", destination.display());
        Ok(())
    }

    /// Replace the ledger's state with the contents of `source`.
    ///
    /// A missing file or a corrupted document is reported through the
    /// returned [`LoadOutcome`]; only genuine I/O failures are errors.
    pub fn load_all(&mut self, source: impl AsRef<Path>) -> Result<LoadOutcome> {
        let source = source.as_ref();

        let bytes = match fs::read(source) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!("No saved data found at {}, starting fresh", source.display());
                return Ok(LoadOutcome::Fresh);
            }
            Err(err) => return Err(err.into()),
        };

        match serde_json::from_slice::<ElectionLedger>(&bytes) {
            Ok(ledger) => {
                *self = ledger;
                info!("Data loaded successfully from {}", source.display());
                Ok(LoadOutcome::Loaded)
            }
            Err(err) => {
                warn!(
                    "Data file {} seems corrupted, ignoring it: {err}",
                    source.display()
                );
                Ok(LoadOutcome::Corrupted)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::TempDir;

    fn init_logging() {
        log4rs_test_utils::test_logging::init_logging_once_for(["election_ledger"], None, None);
    }

    #[test]
    fn save_then_load_reproduces_ledger() {
        init_logging();
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_DATA_PATH);

        let ledger = ElectionLedger::example();
        ledger.save_all(&path).unwrap();

        let mut loaded = ElectionLedger::new();
        assert_eq!(loaded.load_all(&path).unwrap(), LoadOutcome::Loaded);
        assert_eq!(loaded, ledger);
        assert_eq!(loaded.results(), ledger.results());
        assert_eq!(
            loaded.candidates().roles().collect::<Vec<_>>(),
            vec!["Head Boy", "Head Girl"]
        );
    }

    #[test]
    fn saved_document_layout() {
        init_logging();
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ledger.json");

        let mut ledger = ElectionLedger::new();
        ledger.add_candidate("A", "Pres");
        ledger.register_voter("s1");
        ledger.cast_vote("s1", "Pres", "A").unwrap();
        ledger.save_all(&path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let expected = r#"{
    "candidates": {
        "Pres": [
            "A"
        ]
    },
    "voters": {
        "s1": true
    },
    "results": {
        "Pres": {
            "A": 1
        }
    }
}"#;
        assert_eq!(text, expected);
    }

    #[test]
    fn save_overwrites_previous_content() {
        init_logging();
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ledger.json");
        fs::write(&path, "x".repeat(4096)).unwrap();

        ElectionLedger::new().save_all(&path).unwrap();
        let value: serde_json::Value =
            serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"candidates": {}, "voters": {}, "results": {}})
        );
    }

    #[test]
    fn missing_file_starts_fresh() {
        init_logging();
        let dir = TempDir::new().unwrap();
        let mut ledger = ElectionLedger::new();
        assert_eq!(
            ledger.load_all(dir.path().join("absent.json")).unwrap(),
            LoadOutcome::Fresh
        );
        assert!(ledger.candidates().is_empty());
        assert!(ledger.voters().is_empty());
        assert!(ledger.tally().is_empty());
    }

    #[test]
    fn corrupted_file_leaves_ledger_untouched() {
        init_logging();
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ledger.json");
        let original = ElectionLedger::example();

        for content in [
            &b"{ not json"[..],
            &b""[..],
            &b"[1, 2, 3]"[..],
            &b"[]"[..],
            &br#"[{"X": ["Y"]}]"#[..],
            &b"null"[..],
            &br#""candidates""#[..],
            &br#"{"candidates": null}"#[..],
            &br#"{"voters": {"s1": "yes"}}"#[..],
            &br#"{"candidates": {"Pres": ["A"]}, "results": {"Pres": {"A": -1}}}"#[..],
            &[0xff, 0xfe, 0x00][..],
        ] {
            fs::write(&path, content).unwrap();
            let mut ledger = original.clone();
            assert_eq!(ledger.load_all(&path).unwrap(), LoadOutcome::Corrupted);
            assert_eq!(ledger, original);
        }
    }

    #[test]
    fn missing_fields_default_to_empty() {
        init_logging();
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ledger.json");
        fs::write(&path, r#"{"voters": {"s1": false, "s2": true}}"#).unwrap();

        let mut ledger = ElectionLedger::example();
        assert_eq!(ledger.load_all(&path).unwrap(), LoadOutcome::Loaded);
        assert!(ledger.candidates().is_empty());
        assert!(ledger.tally().is_empty());
        assert_eq!(
            ledger.voters().iter().collect::<Vec<_>>(),
            vec![("s1", false), ("s2", true)]
        );
    }

    #[test]
    fn document_key_order_is_kept() {
        init_logging();
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ledger.json");
        fs::write(
            &path,
            r#"{
                "results": {"Head Girl": {"Isha": 2}, "Head Boy": {"Vivaan": 1}},
                "voters": {"s9": true, "s1": false, "s9": false},
                "note": ["ignored"]
            }"#,
        )
        .unwrap();

        let mut ledger = ElectionLedger::new();
        assert_eq!(ledger.load_all(&path).unwrap(), LoadOutcome::Loaded);
        assert_eq!(
            ledger.tally().roles().collect::<Vec<_>>(),
            vec!["Head Girl", "Head Boy"]
        );
        // A repeated key keeps its first position and takes the last value.
        assert_eq!(
            ledger.voters().iter().collect::<Vec<_>>(),
            vec![("s9", false), ("s1", false)]
        );
        assert!(ledger.candidates().is_empty());
    }

    #[test]
    fn loaded_state_is_usable() {
        init_logging();
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ledger.json");
        ElectionLedger::example().save_all(&path).unwrap();

        let mut ledger = ElectionLedger::new();
        ledger.load_all(&path).unwrap();
        // Flags survive the round trip.
        assert!(ledger.cast_vote("student001", "Head Boy", "Vivaan").is_err());
        ledger.cast_vote("student004", "Head Boy", "Vivaan").unwrap();
        assert_eq!(ledger.tally().count("Head Boy", "Vivaan"), 2);
    }

    #[test]
    fn unreadable_source_is_an_error() {
        init_logging();
        let dir = TempDir::new().unwrap();
        let mut ledger = ElectionLedger::example();
        // A directory exists but cannot be read as a file.
        let result = ledger.load_all(dir.path());
        assert!(matches!(result, Err(Error::Io(_))));
        assert_eq!(ledger, ElectionLedger::example());
    }

    #[test]
    fn save_to_missing_directory_is_an_error() {
        init_logging();
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no").join("such").join("dir.json");
        assert!(matches!(
            ElectionLedger::example().save_all(path),
            Err(Error::Io(_))
        ));
    }
}
