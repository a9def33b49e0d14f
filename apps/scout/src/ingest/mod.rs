// Turning input paths into documents: discovery walks the folder tree,
// the text source decodes one PDF into lines.

pub mod discover;
pub mod source;
