//! Replays a script against the shell and writes frames as JSON lines.

use std::io::Write;
use std::time::Duration;

use projexpert_common::{Event, ProjexpertError, Result};
use tokio::sync::broadcast::{self, error::TryRecvError};

use crate::app_state::IdeShell;
use crate::script::ScriptEvent;

/// Run every event in order. A frame is written for each `frame` event
/// and once more at the end. Returns the number of frames written.
pub async fn run<W: Write>(
    shell: &mut IdeShell,
    events: Vec<ScriptEvent>,
    out: &mut W,
) -> Result<usize> {
    let mut bus = shell.subscribe();
    let mut frames = 0;

    for event in events {
        shell.poll_messages();
        if shell.quit_requested() {
            tracing::info!("quit requested, stopping script");
            break;
        }

        match event {
            ScriptEvent::PointerDown { x, y } => shell.pointer_down(x, y),
            ScriptEvent::PointerMove { x, y } => shell.pointer_move(x, y),
            ScriptEvent::PointerUp { x, y } => {
                tracing::trace!(x, y, "pointer up");
                shell.pointer_up()
            }
            ScriptEvent::Viewport { width, height } => {
                shell.set_viewport(projexpert_common::Viewport::new(width, height))
            }
            ScriptEvent::Action { action } => shell.dispatch(action),
            ScriptEvent::Wait { ms } => {
                tokio::time::sleep(Duration::from_millis(ms)).await;
                tokio::task::yield_now().await;
            }
            ScriptEvent::Frame => {
                write_frame(shell, out)?;
                frames += 1;
            }
        }

        drain_events(&mut bus);
    }

    shell.poll_messages();
    drain_events(&mut bus);
    write_frame(shell, out)?;
    Ok(frames + 1)
}

fn write_frame<W: Write>(shell: &mut IdeShell, out: &mut W) -> Result<()> {
    let frame = shell.render_frame();
    serde_json::to_writer(&mut *out, &frame)
        .map_err(|e| ProjexpertError::Other(format!("failed to encode frame: {e}")))?;
    writeln!(out)?;
    Ok(())
}

fn drain_events(bus: &mut broadcast::Receiver<Event>) {
    loop {
        match bus.try_recv() {
            Ok(event) => tracing::trace!(?event, "shell event"),
            Err(TryRecvError::Lagged(n)) => tracing::warn!("event log lagged by {n}"),
            Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::{parse_script, DEMO_SCRIPT};
    use projexpert_common::Viewport;
    use projexpert_config::ProjexpertConfig;

    fn shell() -> IdeShell {
        IdeShell::new(&ProjexpertConfig::default(), Viewport::new(1440.0, 900.0))
    }

    fn frames(output: &[u8]) -> Vec<serde_json::Value> {
        std::str::from_utf8(output)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[tokio::test(start_paused = true)]
    async fn demo_script_runs_to_completion() {
        let mut shell = shell();
        let mut out = Vec::new();
        let written = run(&mut shell, parse_script(DEMO_SCRIPT).unwrap(), &mut out)
            .await
            .unwrap();

        let frames = frames(&out);
        assert_eq!(frames.len(), written);
        assert_eq!(written, 5);

        assert_eq!(frames[0]["copilot"]["status"], "Active");
        assert_eq!(frames[1]["copilot"]["geometry"]["width"], 540.0);
        assert_eq!(frames[2]["copilot"]["geometry"]["top_offset"], 160.0);
        assert_eq!(frames[3]["status_bar"]["sync"], "Syncing...");
        assert_eq!(frames[4]["status_bar"]["sync"], "Sync");
        assert_eq!(frames[4]["copilot"]["state"], "idle");
    }

    #[tokio::test]
    async fn quit_stops_remaining_events() {
        let mut shell = shell();
        let mut out = Vec::new();
        let script = parse_script(
            r#"
{"type":"action","action":"quit"}
{"type":"action","action":"open_copilot"}
{"type":"frame"}
"#,
        )
        .unwrap();
        let written = run(&mut shell, script, &mut out).await.unwrap();
        assert_eq!(written, 1);
        assert_eq!(frames(&out)[0]["copilot"]["status"], "Closed");
    }

    #[tokio::test]
    async fn viewport_event_moves_panel_frame() {
        let mut shell = shell();
        let mut out = Vec::new();
        let script = parse_script(r#"{"type":"viewport","width":1000,"height":700}"#).unwrap();
        run(&mut shell, script, &mut out).await.unwrap();
        let frame = &frames(&out)[0];
        assert_eq!(frame["viewport"]["width"], 1000.0);
        assert_eq!(frame["copilot"]["frame"]["x"], 580.0);
    }

    #[tokio::test]
    async fn empty_script_writes_final_frame() {
        let mut shell = shell();
        let mut out = Vec::new();
        assert_eq!(run(&mut shell, Vec::new(), &mut out).await.unwrap(), 1);
    }
}
