//! JSONL (JSON Lines) table files.
//!
//! Each table is one file; each line is one record. Unparseable lines are
//! skipped with a warning so a single bad row cannot take a page down.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::marker::PhantomData;
use std::path::PathBuf;

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use super::{StoreConfig, StoreError};

/// Tables of the league store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Season,
    Sport,
    SportCategory,
    Stage,
    Fixture,
    FixtureParticipant,
    Team,
}

impl Table {
    /// Get the filename for this table.
    pub fn filename(&self) -> &'static str {
        match self {
            Table::Season => "seasons.jsonl",
            Table::Sport => "sports.jsonl",
            Table::SportCategory => "sport_categories.jsonl",
            Table::Stage => "stages.jsonl",
            Table::Fixture => "fixtures.jsonl",
            Table::FixtureParticipant => "fixture_participants.jsonl",
            Table::Team => "teams.jsonl",
        }
    }
}

/// JSONL file reader.
pub struct JsonlReader<T> {
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T: DeserializeOwned> JsonlReader<T> {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _marker: PhantomData,
        }
    }

    /// Create a reader for a table of the store.
    pub fn for_table(config: &StoreConfig, table: Table) -> Self {
        Self::new(config.table_path(table))
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read all records. A missing file reads as an empty table.
    pub fn read_all(&self) -> Result<Vec<T>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);
        let mut records = Vec::new();
        let mut line_num = 0;

        for line in reader.lines() {
            line_num += 1;
            let line = line?;

            if line.trim().is_empty() {
                continue;
            }

            match serde_json::from_str(&line) {
                Ok(record) => records.push(record),
                Err(e) => {
                    warn!("Failed to parse line {} in {:?}: {}", line_num, self.path, e);
                }
            }
        }

        debug!("Read {} records from {:?}", records.len(), self.path);
        Ok(records)
    }

    /// Read records matching a predicate.
    pub fn read_where<F>(&self, predicate: F) -> Result<Vec<T>, StoreError>
    where
        F: Fn(&T) -> bool,
    {
        let all = self.read_all()?;
        Ok(all.into_iter().filter(predicate).collect())
    }
}

/// JSONL file writer. Used by the `import` command and tests only.
pub struct JsonlWriter<T> {
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T: Serialize> JsonlWriter<T> {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _marker: PhantomData,
        }
    }

    /// Create a writer for a table of the store.
    pub fn for_table(config: &StoreConfig, table: Table) -> Self {
        Self::new(config.table_path(table))
    }

    fn ensure_dir(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    /// Append a single record to the file.
    pub fn append(&self, record: &T) -> Result<(), StoreError> {
        self.ensure_dir()?;

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut writer = BufWriter::new(file);
        let json = serde_json::to_string(record)?;
        writeln!(writer, "{}", json)?;
        writer.flush()?;

        debug!("Appended record to {:?}", self.path);
        Ok(())
    }

    /// Write records, replacing the entire file.
    pub fn write_all(&self, records: &[T]) -> Result<usize, StoreError> {
        self.ensure_dir()?;

        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        let mut count = 0;

        for record in records {
            let json = serde_json::to_string(record)?;
            writeln!(writer, "{}", json)?;
            count += 1;
        }

        writer.flush()?;
        debug!("Wrote {} records to {:?}", count, self.path);

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    struct TestRecord {
        id: i64,
        name: String,
    }

    #[test]
    fn test_write_and_read() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("test.jsonl");

        let records = vec![
            TestRecord {
                id: 1,
                name: "First".to_string(),
            },
            TestRecord {
                id: 2,
                name: "Second".to_string(),
            },
        ];

        let writer: JsonlWriter<TestRecord> = JsonlWriter::new(path.clone());
        assert_eq!(writer.write_all(&records).unwrap(), 2);

        let reader: JsonlReader<TestRecord> = JsonlReader::new(path);
        let read = reader.read_all().unwrap();
        assert_eq!(read, records);
    }

    #[test]
    fn test_read_missing_file_is_empty() {
        let tmp = TempDir::new().unwrap();
        let reader: JsonlReader<TestRecord> = JsonlReader::new(tmp.path().join("missing.jsonl"));
        assert!(!reader.exists());
        assert!(reader.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_append() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("append.jsonl");

        let writer: JsonlWriter<TestRecord> = JsonlWriter::new(path.clone());
        writer
            .append(&TestRecord {
                id: 1,
                name: "A".to_string(),
            })
            .unwrap();
        writer
            .append(&TestRecord {
                id: 2,
                name: "B".to_string(),
            })
            .unwrap();

        let reader: JsonlReader<TestRecord> = JsonlReader::new(path);
        assert_eq!(reader.read_all().unwrap().len(), 2);
    }

    #[test]
    fn test_read_all_skips_bad_lines() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bad.jsonl");

        std::fs::write(
            &path,
            r#"{"id":1,"name":"Good"}
not-valid-json
{"id":2,"name":"Also Good"}
"#,
        )
        .unwrap();

        let reader: JsonlReader<TestRecord> = JsonlReader::new(path);
        let records = reader.read_all().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].name, "Also Good");
    }

    #[test]
    fn test_read_where() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("filter.jsonl");

        let writer: JsonlWriter<TestRecord> = JsonlWriter::new(path.clone());
        writer
            .write_all(&[
                TestRecord {
                    id: 1,
                    name: "A".to_string(),
                },
                TestRecord {
                    id: 2,
                    name: "B".to_string(),
                },
                TestRecord {
                    id: 3,
                    name: "C".to_string(),
                },
            ])
            .unwrap();

        let reader: JsonlReader<TestRecord> = JsonlReader::new(path);
        let filtered = reader.read_where(|r| r.id > 1).unwrap();
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].name, "B");
    }

    #[test]
    fn test_for_table_path() {
        let tmp = TempDir::new().unwrap();
        let config = StoreConfig::new(tmp.path().to_path_buf());
        let writer: JsonlWriter<TestRecord> = JsonlWriter::for_table(&config, Table::Stage);
        assert_eq!(writer.path, tmp.path().join("stages.jsonl"));
    }

    #[test]
    fn test_table_filenames() {
        assert_eq!(Table::Season.filename(), "seasons.jsonl");
        assert_eq!(Table::SportCategory.filename(), "sport_categories.jsonl");
        assert_eq!(Table::Fixture.filename(), "fixtures.jsonl");
        assert_eq!(Table::Team.filename(), "teams.jsonl");
    }

    #[test]
    fn test_write_all_overwrites() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("overwrite.jsonl");

        let writer: JsonlWriter<TestRecord> = JsonlWriter::new(path.clone());
        writer
            .write_all(&[TestRecord {
                id: 1,
                name: "Old".to_string(),
            }])
            .unwrap();
        writer
            .write_all(&[
                TestRecord {
                    id: 2,
                    name: "New1".to_string(),
                },
                TestRecord {
                    id: 3,
                    name: "New2".to_string(),
                },
            ])
            .unwrap();

        let reader: JsonlReader<TestRecord> = JsonlReader::new(path);
        let read = reader.read_all().unwrap();
        assert_eq!(read.len(), 2);
        assert_eq!(read[0].name, "New1");
    }
}
