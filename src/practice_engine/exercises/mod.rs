//! Exercise builders, one module per exercise type.
//!
//! Every builder checks its own data prerequisites and returns `None` when the
//! word cannot support that exercise, so the assembler can simply move on.
//!
//! | Module            | Exercise          | Needs |
//! |-------------------|-------------------|-------|
//! | `multiple_choice` | `MultipleChoice`  | translation |
//! | `translation`     | `WordTranslation` | translation |
//! | `fill_in_blank`   | `FillInBlank`     | translation + context sentence |
//! | `matching`        | `Matching`        | 4+ translated words |

pub mod fill_in_blank;
pub mod matching;
pub mod multiple_choice;
pub mod translation;
