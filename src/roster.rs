//! Student roster: records of identifier, name and grades, and loading them
//! from a whitespace-separated text file.
//!
//! Each line of a roster file holds an integer identifier, the full name
//! (which may contain spaces) and the grades:
//!
//! ```text
//! 171  Blanca Agirrebarrenetse  9.5
//! 23   Carles Balcells de Lara  4.9  5
//! ```

use log::{debug, info};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::ops::{Add, AddAssign};
use std::path::{Path, PathBuf};

/// Identifier given to records created without one
pub const UNKNOWN_ID: i64 = -1;

static GRADE_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+(?:\.\d+)?$").unwrap());

#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("Failed to open roster file '{}'", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to read roster line {line}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },
    #[error("Line {line}: '{token}' is not a valid identifier")]
    InvalidId { line: usize, token: String },
    #[error("Line {line}: '{token}' is not a valid grade")]
    InvalidGrade { line: usize, token: String },
}

/// A student with their grades
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentRecord {
    pub id: i64,
    pub name: String,
    pub grades: Vec<f64>,
}

impl StudentRecord {
    pub fn new(name: impl Into<String>, id: i64, grades: Vec<f64>) -> Self {
        Self { id, name: name.into(), grades }
    }

    /// A record with no identifier and no grades
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, UNKNOWN_ID, Vec::new())
    }

    /// Return a new record with `grade` appended, leaving `self` untouched
    pub fn with_grade(&self, grade: f64) -> Self {
        let mut grades = self.grades.clone();
        grades.push(grade);
        Self { id: self.id, name: self.name.clone(), grades }
    }

    /// Arithmetic mean of the grades, 0 when there are none
    pub fn average(&self) -> f64 {
        if self.grades.is_empty() {
            return 0.0;
        }
        self.grades.iter().sum::<f64>() / self.grades.len() as f64
    }

    /// Constructor-like rendering, e.g. `StudentRecord("Ana Ruiz", 7, [8.5])`
    pub fn repr(&self) -> String {
        format!("StudentRecord({:?}, {}, {:?})", self.name, self.id, self.grades)
    }
}

impl Add<f64> for StudentRecord {
    type Output = StudentRecord;

    fn add(mut self, grade: f64) -> Self::Output {
        self.grades.push(grade);
        self
    }
}

impl Add<f64> for &StudentRecord {
    type Output = StudentRecord;

    fn add(self, grade: f64) -> Self::Output {
        self.with_grade(grade)
    }
}

impl AddAssign<f64> for StudentRecord {
    fn add_assign(&mut self, grade: f64) {
        self.grades.push(grade);
    }
}

/// Tab-separated identifier, name and average with one decimal
impl fmt::Display for StudentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{:.1}", self.id, self.name, self.average())
    }
}

/// Parse one roster line. Blank lines yield `Ok(None)`.
fn parse_line(text: &str, line: usize) -> Result<Option<StudentRecord>, RosterError> {
    let tokens: Vec<&str> = text.split([' ', '\t']).filter(|t| !t.trim().is_empty()).map(str::trim).collect();
    let Some((first, rest)) = tokens.split_first() else {
        return Ok(None);
    };

    let id = first
        .parse::<i64>()
        .map_err(|_| RosterError::InvalidId { line, token: first.to_string() })?;

    let split = rest.iter().position(|t| GRADE_TOKEN.is_match(t)).unwrap_or(rest.len());
    let (name, grades) = rest.split_at(split);

    let grades = grades
        .iter()
        .map(|t| {
            t.parse::<f64>()
                .map_err(|_| RosterError::InvalidGrade { line, token: t.to_string() })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Some(StudentRecord::new(name.join(" "), id, grades)))
}

/// Read a roster from any buffered reader, keyed by student name.
/// A later line with the same name replaces the earlier record.
pub fn read_roster<R: BufRead>(reader: R) -> Result<BTreeMap<String, StudentRecord>, RosterError> {
    let mut roster = BTreeMap::new();

    for (index, text) in reader.lines().enumerate() {
        let line = index + 1;
        let text = text.map_err(|source| RosterError::Read { line, source })?;

        if let Some(record) = parse_line(&text, line)? {
            debug!("Roster line {}: {}", line, record.repr());
            if let Some(previous) = roster.insert(record.name.clone(), record) {
                debug!("Replacing earlier record for '{}'", previous.name);
            }
        }
    }

    Ok(roster)
}

/// Load a roster file into a map from student name to record
pub fn load_roster<P: AsRef<Path>>(path: P) -> Result<BTreeMap<String, StudentRecord>, RosterError> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|source| RosterError::Open { path: path.to_path_buf(), source })?;

    let roster = read_roster(BufReader::new(file))?;
    info!("Loaded {} students from {}", roster.len(), path.display());
    Ok(roster)
}
