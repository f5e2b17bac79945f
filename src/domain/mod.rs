mod post;
mod statement;

pub use post::{ContextValue, MISSING_CONTEXT_LITERAL, MissingContext, PostRecord};
pub use statement::{Fragment, StatementRow};
