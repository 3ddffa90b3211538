//! Line-oriented front end: one message per stdin line

use super::controller::ChatController;
use crate::cli::OutputFormat;
use crate::domain::{Message, Sender};
use crate::infrastructure::backend::ChatBackend;
use crate::render::{render_message, to_html, to_plain};
use thiserror::Error;
use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::info;

#[derive(Debug, Error)]
pub enum StdioError {
    #[error("stdin/stdout I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Run against the process stdin/stdout until EOF
pub async fn run<B>(
    controller: &mut ChatController<B>,
    format: OutputFormat,
) -> Result<(), StdioError>
where
    B: ChatBackend,
{
    let stdin = BufReader::new(io::stdin());
    let mut stdout = io::stdout();
    run_with_io(controller, format, stdin, &mut stdout).await
}

/// Drive the controller from any line source and print every new message.
pub async fn run_with_io<B, R, W>(
    controller: &mut ChatController<B>,
    format: OutputFormat,
    reader: R,
    writer: &mut W,
) -> Result<(), StdioError>
where
    B: ChatBackend,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut printed = flush_new_messages(controller, format, writer, 0).await?;

    let mut lines = reader.lines();
    while let Some(line) = lines.next_line().await? {
        if controller.submit(&line).await {
            printed = flush_new_messages(controller, format, writer, printed).await?;
        }
    }

    info!("Input closed, leaving STDIO mode");
    writer.flush().await?;
    Ok(())
}

async fn flush_new_messages<B, W>(
    controller: &ChatController<B>,
    format: OutputFormat,
    writer: &mut W,
    already_printed: usize,
) -> Result<usize, StdioError>
where
    B: ChatBackend,
    W: AsyncWrite + Unpin,
{
    let mut count = already_printed;
    for message in controller.log().messages().skip(already_printed) {
        let line = format_message(message, format);
        writer.write_all(line.as_bytes()).await?;
        writer.write_all(b"\n").await?;
        count += 1;
    }
    writer.flush().await?;
    Ok(count)
}

/// One printable block for a message in the requested format
pub fn format_message(message: &Message, format: OutputFormat) -> String {
    let rendered = render_message(message);
    match format {
        OutputFormat::Html => to_html(&rendered),
        OutputFormat::Text => {
            let prefix = match (message.sender, message.urgent) {
                (Sender::User, _) => format!("[{}] You: ", message.time),
                (Sender::Bot, false) => format!("[{}] Bot: ", message.time),
                (Sender::Bot, true) => format!("[{}] Bot (!): ", message.time),
            };
            let indent = " ".repeat(prefix.chars().count());
            let body = to_plain(&rendered);
            let mut lines = body.split('\n');
            let mut out = format!("{}{}", prefix, lines.next().unwrap_or(""));
            for line in lines {
                out.push('\n');
                out.push_str(&indent);
                out.push_str(line);
            }
            out
        }
    }
}
