/// Perform sanity checks on parsed structures.
/// These are less strict than magic number identification and only
/// indicate the data may be damaged; a failed check never stops a
/// conversion.
pub trait SanityCheck {
    /// Returns true if the structure looks plausible
    fn check(&self) -> bool;
}
