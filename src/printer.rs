use std::fmt;
use std::io::{self, ErrorKind, Write};
use std::path::Path;
use std::process::{Command, ExitStatus, Output, Stdio};

use tempfile::TempPath;
use tracing::{debug, instrument, trace};

/// Replaced by the spool file path in the arguments of a [`SpoolPrinter`].
pub const FILE_TOKEN: &str = "{file}";

#[derive(Debug)]
pub enum PrintError {
    /// The print command ran but exited unsuccessfully.
    Failed { status: ExitStatus, stderr: String },
    /// The print command could not be started or fed.
    Io(io::Error),
}

impl fmt::Display for PrintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrintError::Failed { status, stderr } if stderr.trim().is_empty() => {
                write!(f, "print command failed with {status}")
            }
            PrintError::Failed { stderr, .. } => f.write_str(stderr),
            PrintError::Io(err) => write!(f, "could not run print command: {err}"),
        }
    }
}

impl std::error::Error for PrintError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PrintError::Io(err) => Some(err),
            PrintError::Failed { .. } => None,
        }
    }
}

impl From<io::Error> for PrintError {
    fn from(err: io::Error) -> Self {
        PrintError::Io(err)
    }
}

/// Something that can put a text document on paper.
pub trait Printer {
    fn submit(&self, text: &str) -> Result<(), PrintError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Windows,
    Unix,
}

impl Platform {
    pub fn detect() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    pub fn from_os(os: &str) -> Self {
        match os {
            "macos" => Platform::MacOs,
            "windows" => Platform::Windows,
            _ => Platform::Unix,
        }
    }

    /// The default printer mechanism of this platform family.
    pub fn printer(self) -> Box<dyn Printer> {
        match self {
            Platform::MacOs | Platform::Unix => Box::new(LinePrinter::lpr()),
            Platform::Windows => Box::new(SpoolPrinter::out_printer()),
        }
    }
}

/// Pipes the document into the standard input of a print command.
#[derive(Debug, Clone)]
pub struct LinePrinter {
    program: String,
    args: Vec<String>,
}

impl LinePrinter {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn lpr() -> Self {
        Self::new("lpr")
    }

    /// Program followed by whitespace separated arguments. `None` for a blank line.
    pub fn from_command_line(command: &str) -> Option<Self> {
        let mut parts = command.split_whitespace();
        let program = parts.next()?;
        Some(Self::new(program).args(parts))
    }
}

impl Printer for LinePrinter {
    #[instrument(skip_all, fields(program = %self.program))]
    fn submit(&self, text: &str) -> Result<(), PrintError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            match stdin.write_all(text.as_bytes()) {
                // The command quit without reading; its exit status tells the story.
                Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                    trace!("Print command closed its input early")
                }
                other => other?,
            }
        }

        check_output(child.wait_with_output()?)
    }
}

/// Writes the document to a temporary file and hands the file to a print command.
#[derive(Debug, Clone)]
pub struct SpoolPrinter {
    program: String,
    args: Vec<String>,
}

impl SpoolPrinter {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Arguments may contain [`FILE_TOKEN`].
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// PowerShell reading the file and sending it to the default printer.
    pub fn out_printer() -> Self {
        Self::new("powershell").args([
            "-NoProfile".to_string(),
            "-Command".to_string(),
            format!("Get-Content '{FILE_TOKEN}' | Out-Printer"),
        ])
    }

    fn print_file(&self, path: &Path) -> Result<(), PrintError> {
        let path = path.to_string_lossy();
        let args = self.args.iter().map(|a| a.replace(FILE_TOKEN, &path));
        let output = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .output()?;
        check_output(output)
    }
}

impl Printer for SpoolPrinter {
    #[instrument(skip_all, fields(program = %self.program))]
    fn submit(&self, text: &str) -> Result<(), PrintError> {
        let spool = SpoolFile::create(text)?;
        let result = self.print_file(spool.path());
        spool.release();
        result
    }
}

/// Temporary copy of the document, removed by [`SpoolFile::release`].
struct SpoolFile {
    path: TempPath,
}

impl SpoolFile {
    fn create(text: &str) -> io::Result<Self> {
        let mut file = tempfile::Builder::new()
            .prefix("dojo-report-")
            .suffix(".txt")
            .tempfile()?;
        file.write_all(text.as_bytes())?;
        file.flush()?;
        trace!("Wrote spool file {}", file.path().display());
        // Close our handle so the print command can open the file on any platform.
        Ok(Self {
            path: file.into_temp_path(),
        })
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn release(self) {
        let path = self.path.to_path_buf();
        if let Err(e) = self.path.close() {
            debug!("Could not remove spool file {}: {e}", path.display());
        }
    }
}

fn check_output(output: Output) -> Result<(), PrintError> {
    if output.status.success() {
        Ok(())
    } else {
        Err(PrintError::Failed {
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
