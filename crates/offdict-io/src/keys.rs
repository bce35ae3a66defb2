use offdict_core::key::parse_key_notation;
use offdict_types::AppEvent;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Read overlay input, one entry per line, until EOF.
///
/// Plain lines are key notations (`Escape`, `a`, `Shift+A`). Lines starting
/// with `!` are host signals: `!blur` (window lost focus), `!results`
/// (results ready). Blank lines are skipped and malformed ones logged.
pub async fn read_input_events<R, F>(reader: R, mut on_event: F) -> Result<(), anyhow::Error>
where
    R: AsyncBufRead + Unpin,
    F: FnMut(AppEvent),
{
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await? {
        match parse_input_line(&line) {
            Ok(Some(event)) => on_event(event),
            Ok(None) => {}
            Err(reason) => tracing::warn!("Ignoring input line {:?}: {}", line, reason),
        }
    }

    tracing::info!("Input stream closed");
    Ok(())
}

/// `Ok(None)` for blank lines
fn parse_input_line(line: &str) -> Result<Option<AppEvent>, String> {
    let notation = match line.trim() {
        // a bare space is the space key, not a blank line
        _ if line == " " => "space",
        "" => return Ok(None),
        trimmed => trimmed,
    };

    if let Some(signal) = notation.strip_prefix('!') {
        return match signal {
            "blur" => Ok(Some(AppEvent::WindowBlurred)),
            "results" => Ok(Some(AppEvent::ResultsReady)),
            other => Err(format!("unknown signal {other:?}")),
        };
    }

    parse_key_notation(notation)
        .map(|key| Some(AppEvent::Key(key)))
        .map_err(|e| e.to_string())
}
