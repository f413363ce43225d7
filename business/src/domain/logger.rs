/// Logging port used by every use case.
///
/// Implemented in infrastructure (see the `logger` crate) so the domain never
/// depends on a concrete logging backend.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
