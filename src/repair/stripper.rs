use crate::models::{ContentBlock, Record};

/// Remove every thinking block from an assistant record
///
/// Returns the record together with the number of blocks removed. Other block
/// types keep their relative order. A record whose content ends up empty is kept
/// with an empty array so the transcript keeps its line count. Records of any
/// other kind are returned unchanged with a count of 0.
pub fn strip_thinking(mut record: Record) -> (Record, usize) {
    let removed = match &mut record {
        Record::Assistant(assistant) => assistant.content_mut().map_or(0, strip_blocks),
        Record::User(_)
        | Record::System(_)
        | Record::Other(_)
        | Record::Blank
        | Record::Unparseable(_) => 0,
    };
    (record, removed)
}

fn strip_blocks(blocks: &mut Vec<ContentBlock>) -> usize {
    let before = blocks.len();
    blocks.retain(|block| !block.is_thinking());
    before - blocks.len()
}
