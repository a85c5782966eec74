//! HTML rendering of lookup outcomes.
//!
//! Rendering is a pure function of the outcome. Every string that came from the
//! user or the dictionary API is escaped before it is interpolated.

use crate::models::{Entry, LookupOutcome};

/// Rendered when a lookup succeeds with no entries.
pub const NO_RESULTS_HTML: &str = "<p>No results. Try another word.</p>";
/// Rendered when the primary entry has no meaning with definitions.
pub const NO_DEFINITIONS_HTML: &str = "<p>No definitions found in this entry.</p>";
/// Definitions shown per meaning.
pub const MAX_DEFINITIONS: usize = 5;

/// The output area for one outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedView {
    pub html: String,
    /// Pronunciation to wire to the play button, when one was rendered.
    pub audio_src: Option<String>,
}

pub fn render(outcome: &LookupOutcome) -> RenderedView {
    match outcome {
        LookupOutcome::Loading => RenderedView::default(),
        LookupOutcome::Success(entries) => match entries.first() {
            Some(entry) => render_entry(entry),
            None => RenderedView {
                html: NO_RESULTS_HTML.to_string(),
                audio_src: None,
            },
        },
        LookupOutcome::NotFound(_) | LookupOutcome::NetworkError => RenderedView {
            html: format!("<p>{}</p>", escape_html(outcome.message().unwrap_or_default())),
            audio_src: None,
        },
    }
}

fn render_entry(entry: &Entry) -> RenderedView {
    let audio_src = entry.audio_source();

    let mut html = String::new();
    html.push_str("<div class=\"result-header\">");
    html.push_str(&format!("<h2>{}</h2>", escape_html(&entry.word)));
    if let Some(phonetic) = entry.phonetic_text() {
        html.push_str(&format!(
            "<span class=\"phonetic\">{}</span>",
            escape_html(phonetic)
        ));
    }
    if let Some(src) = audio_src {
        html.push_str(&format!(
            "<button class=\"audio-btn\" id=\"playAudio\" type=\"button\" \
             data-audio-src=\"{}\" aria-label=\"Play pronunciation\">🔈 Play</button>",
            escape_html(src)
        ));
    }
    html.push_str("</div>");

    let body = render_meanings(entry);
    if body.is_empty() {
        html.push_str(NO_DEFINITIONS_HTML);
    } else {
        html.push_str(&body);
    }

    RenderedView {
        html,
        audio_src: audio_src.map(str::to_string),
    }
}

fn render_meanings(entry: &Entry) -> String {
    let mut out = String::new();
    for meaning in entry.meanings.iter().filter(|m| !m.definitions.is_empty()) {
        let pos = meaning.part_of_speech.as_deref().unwrap_or_default();
        out.push_str(&format!(
            "<div class=\"part-of-speech\">{}</div>",
            escape_html(pos)
        ));
        out.push_str("<ol class=\"definition-list\">");
        for def in meaning.definitions.iter().take(MAX_DEFINITIONS) {
            out.push_str("<li>");
            out.push_str(&escape_html(&def.definition));
            if let Some(example) = def.example.as_deref().filter(|e| !e.is_empty()) {
                out.push_str(&format!(
                    "<div class=\"example\">e.g., {}</div>",
                    escape_html(example)
                ));
            }
            out.push_str("</li>");
        }
        out.push_str("</ol>");
    }
    out
}

/// Escape text for insertion into HTML element content or attribute values.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
