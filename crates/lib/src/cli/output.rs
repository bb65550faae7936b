use core::fmt;
use std::io::{self, Write};

use serde::Serialize;

use crate::cli::Report;

/// Writer for solver output, as plain text or as the JSON line protocol
/// consumed by the aggregate runner.
pub(crate) struct Output<O> {
    out: O,
    kind: OutputKind,
}

pub(crate) enum OutputKind {
    Json,
    Normal,
}

impl<O> Output<O>
where
    O: Write,
{
    pub(crate) fn new(out: O, kind: OutputKind) -> Self {
        Self { out, kind }
    }

    pub(crate) fn info(&mut self, m: impl fmt::Display) -> io::Result<()> {
        self.message(MessageKind::Info, m)
    }

    pub(crate) fn error(&mut self, m: impl fmt::Display) -> io::Result<()> {
        self.message(MessageKind::Error, m)
    }

    pub(crate) fn report(&mut self, report: &Report) -> io::Result<()> {
        match self.kind {
            OutputKind::Json => self.line(LineType::Report, report),
            OutputKind::Normal => writeln!(self.out, "{report}"),
        }
    }

    fn message(&mut self, kind: MessageKind, m: impl fmt::Display) -> io::Result<()> {
        match self.kind {
            OutputKind::Json => {
                let message = Message {
                    kind,
                    output: m.to_string(),
                };

                self.line(LineType::Message, &message)
            }
            OutputKind::Normal => writeln!(self.out, "{kind}: {m}"),
        }
    }

    fn line<T>(&mut self, ty: LineType, data: &T) -> io::Result<()>
    where
        T: Serialize,
    {
        serde_json::to_writer(&mut self.out, &Line { ty, data })?;
        writeln!(self.out)
    }
}

#[derive(Serialize)]
struct Line<'a, T> {
    #[serde(rename = "type")]
    ty: LineType,
    data: &'a T,
}

#[derive(Serialize)]
#[serde(rename_all = "kebab-case")]
enum LineType {
    Message,
    Report,
}

#[derive(Serialize)]
struct Message {
    kind: MessageKind,
    output: String,
}

#[derive(Serialize, Clone, Copy)]
#[serde(rename_all = "kebab-case")]
enum MessageKind {
    Info,
    Error,
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageKind::Info => write!(f, "info"),
            MessageKind::Error => write!(f, "error"),
        }
    }
}
