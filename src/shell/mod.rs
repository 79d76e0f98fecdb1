//! # Shell Adapter
//!
//! Line-oriented stand-in for the chat host. Reads commands, feeds them to
//! `core::update` as `Action`s, and writes the stats panel.
//!
//! This is the only module that does I/O. It is generic over the reader and
//! writer so tests can drive it with in-memory buffers.
//!
//! ## Redraw Strategy
//!
//! - **Start**: the panel is drawn once if visible.
//! - **After a command**: redrawn whenever `update` returns `Effect::Render`.
//! - **Refresh tick**: fires every `refresh_interval`, but only writes when
//!   the panel is visible and the snapshot differs from the last one written.
//!
//! Input always wins over a pending tick (`biased` select), so a burst of
//! piped commands is applied before any refresh.

mod input;

pub use input::{ShellEvent, parse_line};

use log::{debug, info};
use std::io;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::time::MissedTickBehavior;

use crate::OutputFormat;
use crate::core::action::{Action, Effect, update};
use crate::core::state::App;
use crate::core::view::StatsView;

const HELP: &str = "\
Commands:
  /stats END_DAY              end the day
  /stats weight==<lbs>        set weight
  /stats age==<years>         set age
  /stats calories==<kcal>     set today's calories
  /stats date==YYYY-MM-DD     set the date
  /eat <kcal>                 add calories
  /reset                      restore starting stats
  /toggle (or s)              show/hide the panel
  /quit                       exit
";

#[derive(Debug, Clone, Copy)]
pub struct ShellOptions {
    pub refresh_interval: Duration,
    pub output: OutputFormat,
}

/// Writes panels and messages, remembering the last snapshot shown.
struct Renderer<'a, W> {
    output: &'a mut W,
    format: OutputFormat,
    last_view: Option<StatsView>,
}

impl<W: AsyncWrite + Unpin> Renderer<'_, W> {
    async fn panel(&mut self, view: StatsView) -> io::Result<()> {
        let text = match self.format {
            OutputFormat::Text => format!("{view}\n\n"),
            OutputFormat::Json => {
                let json = view
                    .to_json()
                    .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
                format!("{json}\n")
            }
        };
        self.output.write_all(text.as_bytes()).await?;
        self.output.flush().await?;
        self.last_view = Some(view);
        Ok(())
    }

    async fn panel_if_changed(&mut self, view: StatsView) -> io::Result<()> {
        if self.last_view.as_ref() == Some(&view) {
            return Ok(());
        }
        self.panel(view).await
    }

    async fn line(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.write_all(b"\n").await?;
        self.output.flush().await
    }
}

/// Runs the shell until input closes or the user quits.
pub async fn run<R, W>(
    app: &mut App,
    input: R,
    output: &mut W,
    options: ShellOptions,
) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    let mut renderer = Renderer {
        output,
        format: options.output,
        last_view: None,
    };

    let mut ticker = tokio::time::interval(options.refresh_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    // First tick completes immediately
    ticker.tick().await;

    if app.panel_visible {
        renderer.panel(app.view()).await?;
    }

    loop {
        let action = tokio::select! {
            biased;
            line = lines.next_line() => match line? {
                Some(line) => match parse_line(&line) {
                    Some(ShellEvent::Help) => {
                        renderer.line(HELP.trim_end()).await?;
                        continue;
                    }
                    Some(ShellEvent::Invalid(msg)) => {
                        renderer.line(&format!("error: {msg}")).await?;
                        continue;
                    }
                    Some(event) => match event.into_action() {
                        Some(action) => action,
                        None => continue,
                    },
                    None => continue,
                },
                None => {
                    info!("Input closed, leaving shell");
                    break;
                }
            },
            _ = ticker.tick() => Action::Refresh,
        };

        if action != Action::Refresh {
            debug!("Shell dispatching {:?}", action);
        }

        match update(app, action) {
            Effect::None => {}
            Effect::Render => {
                if app.panel_visible {
                    renderer.panel(app.view()).await?;
                } else {
                    renderer.line(&app.status_message).await?;
                }
            }
            Effect::RenderIfChanged => renderer.panel_if_changed(app.view()).await?,
            Effect::ShowError => {
                let msg = app.error.as_deref().unwrap_or("unknown error");
                renderer.line(&format!("error: {msg}")).await?;
            }
            Effect::Quit => break,
        }
    }

    Ok(())
}
