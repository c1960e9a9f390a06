use crate::error::Error;
use crate::model::Student;
use csv::{QuoteStyle, ReaderBuilder, Trim, WriterBuilder};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const HEADER: [&str; 3] = ["Name", "StudentId", "Age"];
const HEADER_LINE: &str = "Name,StudentId,Age";

/// Overwrite `path` with the full roster and return the resolved absolute
/// path. Fields are written verbatim, without quoting: a comma inside a
/// name or an identifier corrupts that row on reload (such a row then has
/// more than three fields and gets skipped by `load_students`).
pub fn save_students(students: &[Student], path: &Path) -> Result<PathBuf, Error> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .from_path(path)?;
    writer.write_record(HEADER)?;
    for student in students {
        let age = student.age().to_string();
        writer.write_record([student.name(), student.id().as_str(), &age])?;
    }
    writer.flush()?;
    debug!(students = students.len(), path = %path.display(), "roster saved");
    Ok(std::path::absolute(path)?)
}

/// Read a roster back. The first line must equal `Name,StudentId,Age`
/// byte for byte (only the line terminator is stripped); rows with a field
/// count other than three are skipped, an unparseable age aborts the
/// whole load.
pub fn load_students(path: &Path) -> Result<Vec<Student>, Error> {
    let mut file = BufReader::new(File::open(path)?);
    let mut raw = String::new();
    if file.read_line(&mut raw)? == 0 {
        return Err(Error::MalformedFormat("roster file is empty".to_owned()));
    }
    let header = raw.strip_suffix('\n').unwrap_or(&raw);
    let header = header.strip_suffix('\r').unwrap_or(header);
    if header != HEADER_LINE {
        return Err(Error::MalformedFormat(format!(
            "expected header {HEADER_LINE:?}, found {header:?}"
        )));
    }
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(file);
    let mut students = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.len() != 3 {
            warn!(
                fields = record.len(),
                "skipping roster row with unexpected field count"
            );
            continue;
        }
        let age = record[2].parse::<u32>().map_err(|_| {
            Error::MalformedFormat(format!("cannot parse age {:?}", &record[2]))
        })?;
        // an empty name or id is a file problem, not a caller problem
        let student = Student::new(&record[1], &record[0], age).map_err(|err| match err {
            Error::InvalidArgument(msg) => Error::MalformedFormat(msg),
            other => other,
        })?;
        students.push(student);
    }
    Ok(students)
}
