//! Block Kit rendering of composed payloads.

use nudge_pipeline::{Payload, Segment, TaskSegment};
use serde_json::{Value, json};

/// Slack rejects messages with more than 50 blocks.
const MAX_BLOCKS: usize = 50;

/// Render a payload as an incoming-webhook message body.
///
/// The top-level `text` is the notification fallback; it carries the header.
#[must_use]
pub fn render(payload: &Payload) -> Value {
    let fallback = payload
        .segments
        .iter()
        .find_map(|segment| match segment {
            Segment::Header { text } => Some(text.as_str()),
            _ => None,
        })
        .unwrap_or_default();

    json!({
        "text": fallback,
        "blocks": render_blocks(&payload.segments),
    })
}

fn render_blocks(segments: &[Segment]) -> Vec<Value> {
    let mut blocks: Vec<Value> = segments.iter().map(render_segment).collect();
    if blocks.len() <= MAX_BLOCKS {
        return blocks;
    }

    // Drop task sections from the end, keeping the trailing divider and footer.
    let tail_len = segments
        .iter()
        .rev()
        .take_while(|segment| !matches!(segment, Segment::Task(_)))
        .count();
    let tail = blocks.split_off(blocks.len() - tail_len);
    let keep = MAX_BLOCKS - tail_len - 1;
    let hidden = blocks.len() - keep;
    blocks.truncate(keep);
    blocks.push(context(&format!("…and {hidden} more")));
    blocks.extend(tail);
    blocks
}

fn render_segment(segment: &Segment) -> Value {
    match segment {
        Segment::Header { text } => json!({
            "type": "header",
            "text": { "type": "plain_text", "text": text, "emoji": true }
        }),
        Segment::Summary { text, .. } => section(text),
        // The fixed prefix has no control characters, so the whole body is escaped.
        Segment::ErrorBody { text, .. } => section(&escape_mrkdwn(text)),
        Segment::Divider => json!({ "type": "divider" }),
        Segment::Task(task) => task_section(task),
        Segment::Footer { text, .. } => context(text),
    }
}

fn section(text: &str) -> Value {
    json!({
        "type": "section",
        "text": { "type": "mrkdwn", "text": text }
    })
}

fn context(text: &str) -> Value {
    json!({
        "type": "context",
        "elements": [{ "type": "mrkdwn", "text": text }]
    })
}

fn task_section(task: &TaskSegment) -> Value {
    let mut block = section(&task_text(task));
    block["accessory"] = json!({
        "type": "button",
        "text": { "type": "plain_text", "text": task.action.label, "emoji": true },
        "url": task.action.url,
        "action_id": task.action.action_id,
    });
    block
}

fn task_text(task: &TaskSegment) -> String {
    let mut text = format!(
        "{} *{}*\n{} Priority: {}  |  {} Status: {}\n📅 *{}* ({})",
        task.urgency_glyph,
        escape_mrkdwn(&task.title),
        task.priority_glyph,
        escape_mrkdwn(&task.priority_label),
        task.status_glyph,
        escape_mrkdwn(&task.status_label),
        task.due_label,
        task.days_phrase,
    );
    if !task.assignees.is_empty() {
        text.push_str("\n👤 ");
        let names: Vec<String> = task.assignees.iter().map(|name| escape_mrkdwn(name)).collect();
        text.push_str(&names.join(", "));
    }
    text
}

/// Escape the three characters Slack treats as control sequences in mrkdwn.
///
/// Record text must not open links or mentions such as `<!channel>`.
#[must_use]
pub fn escape_mrkdwn(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
