//! Reading timesheet lines from a file or any buffered reader.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::TimesheetError;
use crate::parser::{Summary, TimesheetParser};
use crate::report::ReportSink;

/// Opens a timesheet file for reading.
pub fn open_timesheet(path: &Path) -> Result<BufReader<File>, TimesheetError> {
    let unreadable = |source| TimesheetError::FileUnreadable {
        path: path.to_path_buf(),
        source,
    };

    match path.metadata() {
        Ok(meta) if meta.is_dir() => {
            return Err(unreadable(io::Error::from(io::ErrorKind::IsADirectory)));
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(TimesheetError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        _ => {}
    }

    let file = File::open(path).map_err(|err| {
        if err.kind() == io::ErrorKind::NotFound {
            TimesheetError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            unreadable(err)
        }
    })?;
    Ok(BufReader::new(file))
}

/// Feeds lines from `reader` into `parser` until the input is exhausted or the
/// period ends, releases the reader, then writes the summary.
///
/// Invalid UTF-8 is replaced rather than rejected.
pub fn run_report<R, S>(
    mut reader: R,
    mut parser: TimesheetParser,
    sink: &mut S,
) -> Result<Summary, TimesheetError>
where
    R: BufRead,
    S: ReportSink + ?Sized,
{
    let mut buffer = Vec::new();
    let mut lines_read = 0_usize;

    loop {
        buffer.clear();
        if reader.read_until(b'\n', &mut buffer)? == 0 {
            break;
        }
        lines_read += 1;

        let line = String::from_utf8_lossy(&buffer);
        if parser.feed(&line, sink)?.is_break() {
            break;
        }
    }

    drop(reader);
    tracing::debug!(lines_read, "finished reading timesheet");
    Ok(parser.finish(sink)?)
}

/// Opens `path` and runs a full report over it.
///
/// The file is closed before the summary is written.
pub fn report_file<S: ReportSink + ?Sized>(
    path: &Path,
    parser: TimesheetParser,
    sink: &mut S,
) -> Result<Summary, TimesheetError> {
    let reader = open_timesheet(path)?;
    tracing::debug!(path = %path.display(), period = %parser.period(), "reading timesheet");
    run_report(reader, parser, sink)
}
