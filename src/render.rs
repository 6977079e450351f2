//! Plain-text and JSON rendering of an assembled feed.

use crate::models::{Comment, CompositeRecord};

/// Render records as text, one block per post.
///
/// Example output:
/// ```text
/// Author: Ann
/// Published: 2022-01-17T09:00:00+00:00
/// Content: Hello
/// Comments: 1
///   - Hi Ann (2 likes)
/// ```
pub fn render_text(records: &[CompositeRecord]) -> String {
    let mut output = String::new();
    for (i, record) in records.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        render_record(&mut output, record);
    }
    output
}

fn render_record(output: &mut String, record: &CompositeRecord) {
    output.push_str(&format!("Author: {}\n", record.author.name));
    if let Some(at) = record.post.published_at() {
        output.push_str(&format!("Published: {}\n", at.to_rfc3339()));
    }
    output.push_str(&format!("Content: {}\n", record.post.content));
    if let Some(attachment) = &record.post.attachment {
        output.push_str(&format!(
            "Attachment: [{}] {} ({})\n",
            attachment.kind.as_str(),
            attachment.description,
            attachment.url
        ));
    }
    output.push_str(&format!("Comments: {}\n", record.comments.len()));
    for comment in &record.comments {
        render_comment(output, comment);
    }
}

fn render_comment(output: &mut String, comment: &Comment) {
    let unit = if comment.likes == 1 { "like" } else { "likes" };
    output.push_str(&format!(
        "  - {} ({} {})\n",
        comment.content, comment.likes, unit
    ));
}

/// Render records as a pretty-printed JSON array.
pub fn render_json(records: &[CompositeRecord]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(records)
}
