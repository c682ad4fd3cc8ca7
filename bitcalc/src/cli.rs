use std::{
    ffi::OsString,
    io::{self, IsTerminal, Write},
    time::Duration,
};
use termcolor::{BufferWriter, Color, ColorChoice, ColorSpec, WriteColor};

/// Kind of a status line written to stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Status {
    Running,
    Finished,
    Interrupted,
    Warning,
}

impl Status {
    pub(crate) fn label(self) -> &'static str {
        match self {
            Status::Running => "Running",
            Status::Finished => "Finished",
            Status::Interrupted => "Interrupted",
            Status::Warning => "Warning",
        }
    }

    fn colour(self) -> Color {
        match self {
            Status::Running => Color::Magenta,
            Status::Finished => Color::Green,
            Status::Interrupted | Status::Warning => Color::Yellow,
        }
    }

    /// Label right-aligned in a bold column, then the plain text.
    pub(crate) fn write_line<W: WriteColor>(self, out: &mut W, text: &str) -> io::Result<()> {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(self.colour())).set_bold(true).set_intense(true);

        out.set_color(&spec)?;
        write!(out, "{:>11}", self.label())?;
        out.reset()?;
        writeln!(out, " {text}")
    }

    fn report(self, text: &str) {
        let writer = stderr_buffer_writer();
        let mut buffer = writer.buffer();

        self.write_line(&mut buffer, text)
            .and_then(|()| writer.print(&buffer))
            .expect("Writing status to stderr");
    }
}

pub(crate) fn print_running(path: &str) {
    Status::Running.report(path)
}

pub(crate) fn print_finished(duration: Duration, warnings: usize) {
    Status::Finished.report(&finished_text(duration, warnings))
}

pub(crate) fn print_interrupted() {
    Status::Interrupted.report("leaving session")
}

pub(crate) fn print_warning(text: &str) {
    Status::Warning.report(text)
}

pub(crate) fn finished_text(duration: Duration, warnings: usize) -> String {
    let elapsed = format!("{:.2}s", duration.as_secs_f64());

    match warnings {
        0 => format!("in {elapsed}"),
        1 => format!("in {elapsed} with 1 warning"),
        n => format!("in {elapsed} with {n} warnings"),
    }
}

pub fn stderr_buffer_writer() -> BufferWriter {
    BufferWriter::stderr(color_choice(
        std::env::var_os("FORCE_COLOR"),
        io::stderr().is_terminal()
    ))
}

/// A non-empty `FORCE_COLOR` wins; otherwise colour only on a terminal.
pub(crate) fn color_choice(force: Option<OsString>, terminal: bool) -> ColorChoice {
    match force {
        Some(value) if !value.is_empty() => ColorChoice::Always,
        _ if terminal => ColorChoice::Auto,
        _ => ColorChoice::Never,
    }
}
