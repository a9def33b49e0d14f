// Data carried between the collaborators: decoded documents in, records out.

pub mod document;
pub mod record;
