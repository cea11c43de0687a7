use mongodb::error::{Error, ErrorKind, WriteFailure};

/// Server error code for a unique index violation (including `_id`)
pub const DUPLICATE_KEY_CODE: i32 = 11000;

/// Whether `err` is a duplicate-key violation.
///
/// Inserts that collide on `_id` surface this way; repositories map it to
/// their own "already exists" error.
pub fn is_duplicate_key(err: &Error) -> bool {
    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY_CODE
        }
        ErrorKind::Command(command_error) => command_error.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}
