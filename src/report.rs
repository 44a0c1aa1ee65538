//! Writes shape metrics as `Area: x.xx` / `Perimeter: x.xx` lines.

use std::io::{self, Write};

use tracing::debug;

use crate::error::Result;
use crate::shape::Shape;

pub fn format_metric(value: f64) -> String {
    format!("{value:.2}")
}

pub fn write_shape_info<W, S>(out: &mut W, shape: &S) -> Result<()>
where
    W: Write + ?Sized,
    S: Shape + ?Sized,
{
    let area = shape.area();
    let perimeter = shape.perimeter();
    debug!(shape = shape.name(), area, perimeter, "computed metrics");

    writeln!(out, "Area: {}", format_metric(area))?;
    writeln!(out, "Perimeter: {}", format_metric(perimeter))?;
    Ok(())
}

pub fn print_shape_info<S>(shape: &S) -> Result<()>
where
    S: Shape + ?Sized,
{
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_shape_info(&mut out, shape)
}

/// Labelled report; every section after the first is preceded by a blank line.
pub fn write_report<W>(out: &mut W, shapes: &[&dyn Shape]) -> Result<()>
where
    W: Write + ?Sized,
{
    for (i, shape) in shapes.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{}:", shape.name())?;
        write_shape_info(&mut *out, *shape)?;
    }
    out.flush()?;
    Ok(())
}
