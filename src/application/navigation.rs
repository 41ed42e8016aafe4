use crate::domain::Destination;

/// Transition to the collection points screen.
///
/// The points screen lives outside this crate; implementors decide how the
/// chosen [`Destination`] reaches it.
pub trait Navigator {
    fn navigate(&mut self, destination: Destination) -> std::io::Result<()>;
}
