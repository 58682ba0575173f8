use crate::validator::ValidationError;

/// Run a fallible movement sequence and fold its outcome into a single
/// human-readable message.
///
/// The closure short-circuits at its first failure; this adapter owns no
/// state of its own.
pub fn move_safely<F>(movement: F) -> String
where
    F: FnOnce() -> Result<(), ValidationError>,
{
    match movement() {
        Ok(()) => "Completed operation successfully.".to_string(),
        Err(ValidationError::InvalidMove { found, expected }) => format!(
            "The robot was supposed to move {}, but moved {} instead.",
            expected, found
        ),
        Err(ValidationError::EndOfPath) => {
            "The robot tried to move past the end of the path.".to_string()
        }
    }
}

/// Repeat a movement `times` times, stopping at the first failure.
pub fn perform<F>(times: usize, mut movement: F) -> Result<(), ValidationError>
where
    F: FnMut() -> Result<(), ValidationError>,
{
    for _ in 0..times {
        movement()?;
    }
    Ok(())
}
