use std::io::Write;

use serde::{Deserialize, Serialize};

use critters_core::DemoResult;

/// Something that has a sound.
///
/// `say` is pure: it returns the sound and never writes it anywhere.
pub trait Say {
    fn say(&self) -> &'static str;
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cat;

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dog;

impl Say for Cat {
    fn say(&self) -> &'static str {
        "Meow"
    }
}

impl Say for Dog {
    fn say(&self) -> &'static str {
        "woof"
    }
}

/// Write the speaker's sound to `out` as a single line.
pub fn announce<S, W>(speaker: &S, out: &mut W) -> DemoResult<()>
where
    S: Say + ?Sized,
    W: Write,
{
    let sound = speaker.say();
    writeln!(out, "{sound}")?;
    tracing::debug!(sound, "announced");
    Ok(())
}

/// Run the demo: one cat, then one dog.
pub fn run<W: Write>(out: &mut W) -> DemoResult<()> {
    let c = Cat;
    announce(&c, out)?;
    let d = Dog;
    announce(&d, out)?;
    out.flush()?;

    tracing::info!(speakers = 2, "animal-sound demo finished");
    Ok(())
}
