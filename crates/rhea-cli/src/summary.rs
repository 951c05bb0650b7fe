use colored::Colorize;
use rhea_core::{CompoundKind, Rhea};
use std::collections::BTreeMap;
use std::fmt::{self, Write};
use std::path::Path;

pub fn render(
    dump: &Path,
    records: usize,
    rhea: &Rhea,
    unknown: Option<&BTreeMap<String, usize>>,
) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "{} {}", "rhea".bold(), dump.display())?;
    writeln!(out, "  records         {records}")?;

    let directional = rhea.reactions.iter().filter(|r| r.directional).count();
    writeln!(
        out,
        "  {}       {} ({} directional, {} bidirectional)",
        "reactions".green(),
        rhea.reactions.len(),
        directional,
        rhea.reactions.len() - directional
    )?;

    writeln!(out, "  {}       {}", "compounds".green(), rhea.compounds.len())?;
    for kind in CompoundKind::ALL {
        let count = rhea.compounds.iter().filter(|c| c.kind == kind).count();
        if count > 0 {
            writeln!(out, "    {:<28} {count}", kind.as_str())?;
        }
    }

    writeln!(
        out,
        "  {}  {}",
        "reactive parts".green(),
        rhea.reactive_parts.len()
    )?;
    writeln!(
        out,
        "  {}  {}",
        "reaction sides".green(),
        rhea.reaction_sides.len()
    )?;
    writeln!(
        out,
        "  {}    {}",
        "participants".green(),
        rhea.participants.len()
    )?;

    if let Some(unknown) = unknown {
        if unknown.is_empty() {
            writeln!(out, "  no unrecognized subclasses")?;
        } else {
            writeln!(out, "  {}", "unrecognized subclasses".yellow())?;
            for (iri, count) in unknown {
                writeln!(out, "    {iri} ({count})")?;
            }
        }
    }
    Ok(out)
}
