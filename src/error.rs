use std::fmt;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    /// Report JSON could not be parsed into a `ValuationReport`.
    Input(serde_json::Error),
    /// A table row whose cell count differs from the table's column count.
    RowArity {
        table: String,
        row: usize,
        cells: usize,
        columns: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {e}"),
            Error::Input(e) => write!(f, "Invalid report input: {e}"),
            Error::RowArity {
                table,
                row,
                cells,
                columns,
            } => write!(
                f,
                "Table '{table}' row {row} has {cells} cells but {columns} column widths"
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Input(e) => Some(e),
            Error::RowArity { .. } => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Input(e)
    }
}
