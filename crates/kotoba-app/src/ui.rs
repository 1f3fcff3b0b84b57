use std::io::Write;

use kanal::AsyncReceiver;
use kotoba_types::{AppEvent, DisplayResult, DisplayToken};

pub fn render_tokens(tokens: &[DisplayToken]) -> String {
    let mut out = String::new();
    for token in tokens {
        out.push_str(&format!("  [{}] {}", token.index, token.markup));

        let mut details = vec![token.pos.as_str()];
        if let Some(base) = &token.base_form {
            details.push(base);
        }
        if token.degraded {
            details.push("no reading");
        }
        out.push_str(&format!("  ({})\n", details.join(", ")));
    }
    out
}

pub fn render_result(result: &DisplayResult) -> String {
    let mut out = format!("{} 【{}】", result.term, result.reading);
    if let Some(level) = &result.jlpt_level {
        out.push_str(&format!(" [{level}]"));
    }
    out.push('\n');

    if !result.part_of_speech.is_empty() {
        out.push_str(&format!("  {}\n", result.part_of_speech));
    }
    for (i, definition) in result.definitions.iter().enumerate() {
        out.push_str(&format!("  {}. {}\n", i + 1, definition));
    }
    out
}

const READY_BANNER: &str = "* Ready. Type Japanese text, :lookup <n>, :style <name> or :quit\n";

/// Print UI events to stdout until the channel closes
pub async fn ui_loop(app_to_ui_rx: AsyncReceiver<AppEvent>) -> anyhow::Result<()> {
    while let Ok(event) = app_to_ui_rx.recv().await {
        let text = match event {
            AppEvent::ShowTokens(tokens) if tokens.is_empty() => "  (no tokens)\n".to_string(),
            AppEvent::ShowTokens(tokens) => render_tokens(&tokens),
            AppEvent::ShowResult(result) => render_result(&result),
            AppEvent::StatusUpdate(status) => format!("* {status}\n"),
            AppEvent::BackendReady => READY_BANNER.to_string(),
            _ => continue,
        };

        let mut stdout = std::io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        stdout.flush()?;
    }
    Ok(())
}
