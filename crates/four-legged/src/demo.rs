use std::io::Write;

use critters_core::DemoResult;
use critters_pets::{Cat, Dog};

use crate::capability::FourLegged;

/// Put any four-legged animal through its paces: walk, then sit.
///
/// Each behavior is written to `out` as its own line. The order is fixed and
/// does not depend on the concrete type behind `animal`.
pub fn demo<A, W>(animal: &A, out: &mut W) -> DemoResult<()>
where
    A: FourLegged + ?Sized,
    W: Write,
{
    let walked = animal.walk();
    writeln!(out, "{walked}")?;
    tracing::debug!(line = %walked, "walk");

    let sat = animal.sit();
    writeln!(out, "{sat}")?;
    tracing::debug!(line = %sat, "sit");

    Ok(())
}

/// Run the demo with Fido the terrier and Fluffy the siamese.
pub fn run<W: Write>(out: &mut W) -> DemoResult<()> {
    let dog = Dog {
        name: "Fido".to_string(),
        breed: "Terrier".to_string(),
    };
    let cat = Cat {
        name: "Fluffy".to_string(),
        breed: "Siamese".to_string(),
    };

    demo(&dog, out)?;
    demo(&cat, out)?;
    out.flush()?;

    tracing::info!(dog = %dog, cat = %cat, "four-legged demo finished");
    Ok(())
}
