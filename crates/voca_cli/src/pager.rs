use std::io::{self, IsTerminal, Write};
use std::process::{ExitStatus, Stdio};

use anyhow::{anyhow, Context};
use crossterm::style::{Color, Stylize};
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;
use voca_core::Result;

const PAGER: &str = "less";
const PAGER_ARGS: [&str; 2] = ["-R", "-c"];

/// Shows Markdown text in `less`, wrapped to the terminal and with coloured headings.
pub struct Pager {
    width: Option<usize>,
    enabled: bool,
}

impl Pager {
    pub fn new(enabled: bool) -> Self {
        Self {
            width: terminal_width(),
            enabled: enabled && io::stdout().is_terminal(),
        }
    }

    pub fn render(&self, content: &str) -> String {
        let wrapped = match self.width {
            Some(width) => wrap(content, width),
            None => content.to_string(),
        };
        highlight_headings(&wrapped)
    }

    pub async fn show(&self, content: &str) -> Result<()> {
        let rendered = self.render(content);
        if !self.enabled {
            print_plain(&rendered)?;
            return Ok(());
        }

        let mut child = match Command::new(PAGER).args(PAGER_ARGS).stdin(Stdio::piped()).spawn() {
            Ok(child) => child,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("{} not found, printing to stdout", PAGER);
                print_plain(&rendered)?;
                return Ok(());
            }
            Err(e) => return Err(anyhow::Error::new(e).context("failed to start pager").into()),
        };

        if let Some(mut stdin) = child.stdin.take() {
            // The reader may quit before consuming everything.
            if let Err(e) = stdin.write_all(rendered.as_bytes()).await {
                if e.kind() != io::ErrorKind::BrokenPipe {
                    return Err(anyhow::Error::new(e).context("failed to write to pager").into());
                }
            }
        }

        let status = child.wait().await.context("failed to wait for pager")?;
        check_exit(status)
    }
}

fn check_exit(status: ExitStatus) -> Result<()> {
    if status.success() {
        return Ok(());
    }
    Err(anyhow!("{} exited with {}", PAGER, status)
        .context("pager failed")
        .into())
}

fn print_plain(text: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn terminal_width() -> Option<usize> {
    crossterm::terminal::size()
        .ok()
        .map(|(columns, _)| columns as usize)
        .filter(|columns| *columns > 0)
}

fn heading_level(line: &str) -> Option<usize> {
    let hashes = line.chars().take_while(|c| *c == '#').count();
    ((1..=6).contains(&hashes) && line[hashes..].starts_with(' ')).then_some(hashes)
}

fn heading_color(level: usize) -> Color {
    match level {
        2 => Color::Yellow,
        3 => Color::Green,
        4 => Color::Blue,
        5 => Color::Cyan,
        _ => Color::Magenta,
    }
}

/// Soft-wraps body lines at spaces so none exceeds `width` columns where
/// possible. Headings are left alone.
pub fn wrap(text: &str, width: usize) -> String {
    text.split('\n')
        .map(|line| {
            if heading_level(line).is_some() || line.chars().count() <= width {
                line.to_string()
            } else {
                wrap_line(line, width)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn wrap_line(line: &str, width: usize) -> String {
    let mut out = String::with_capacity(line.len() + line.len() / width.max(1));
    let mut column = 0;
    for word in line.split(' ') {
        let word_width = word.chars().count();
        if column > 0 && column + 1 + word_width > width {
            out.push('\n');
            column = 0;
        } else if column > 0 {
            out.push(' ');
            column += 1;
        }
        out.push_str(word);
        column += word_width;
    }
    out
}

pub fn highlight_headings(text: &str) -> String {
    text.split('\n')
        .map(|line| match heading_level(line) {
            Some(level) => line.to_string().with(heading_color(level)).bold().to_string(),
            None => line.to_string(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
