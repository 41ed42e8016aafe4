use crate::application::Navigator;
use crate::domain::Destination;
use std::io::Write;

/// Hands the destination to the next program as a single JSON line.
pub struct JsonLineNavigator<W: Write> {
    out: W,
}

impl<W: Write> JsonLineNavigator<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Navigator for JsonLineNavigator<W> {
    fn navigate(&mut self, destination: Destination) -> std::io::Result<()> {
        serde_json::to_writer(&mut self.out, &destination)?;
        writeln!(self.out)?;
        self.out.flush()
    }
}
