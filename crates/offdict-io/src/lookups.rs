use offdict_types::{AppEvent, TextSource};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Read lookup input, one entry per line, until EOF.
///
/// `!release` is the pointer-release signal: the current selection is looked
/// up. Any other non-blank line is looked up verbatim.
pub async fn read_lookup_events<R, F>(reader: R, mut on_event: F) -> Result<(), anyhow::Error>
where
    R: AsyncBufRead + Unpin,
    F: FnMut(AppEvent),
{
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await? {
        let text = line.trim();
        match text {
            "" => {}
            "!release" => on_event(AppEvent::SelectionReleased),
            signal if signal.starts_with('!') => {
                tracing::warn!("Ignoring unknown signal: {:?}", signal);
            }
            _ => on_event(AppEvent::TextInput {
                text: text.to_string(),
                source: TextSource::Manual,
            }),
        }
    }

    tracing::info!("Lookup input closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use tokio::io::BufReader;

    use super::*;

    #[tokio::test]
    async fn reads_releases_and_queries() {
        let input = b"!release\n\n  hello there \n!bogus\n!release\n";
        let mut events = vec![];

        read_lookup_events(BufReader::new(&input[..]), |event| events.push(event))
            .await
            .unwrap();

        assert_eq!(events.len(), 3);
        assert!(matches!(events[0], AppEvent::SelectionReleased));
        assert!(matches!(
            &events[1],
            AppEvent::TextInput { text, source: TextSource::Manual } if text == "hello there"
        ));
        assert!(matches!(events[2], AppEvent::SelectionReleased));
    }
}
