//! Title module emission.

use eyre_pretty::{Context, Result};
use std::{collections::HashSet, fmt::Write};
use tracing::{debug, warn};
use vtxload::{FormatDescriptor, Plan, Profile};

/// The module name of a descriptor.
pub fn module_name(descriptor: &FormatDescriptor) -> String {
    descriptor.name().trim_end_matches('_').to_lowercase()
}

/// Renders a title module with a specialized decoder for every entry of `profile` with at least
/// `min_verts` vertices.
pub fn emit(profile: &Profile, min_verts: u64) -> Result<String> {
    let mut profile = profile.clone();
    profile.sort();

    let mut out = String::new();
    let mut names = HashSet::new();

    writeln!(
        out,
        "// Generated by vtxgen from a descriptor profile of {}.",
        profile.title
    )?;
    writeln!(out)?;
    writeln!(out, "crate::specialize::specialize! {{")?;
    write!(out, "    \"{}\";", profile.title)?;

    for entry in &profile.entries {
        if entry.vertices < min_verts {
            debug!("skipping {} with {} vertices", entry.name, entry.vertices);
            continue;
        }

        let descriptor = entry.descriptor();
        let plan = Plan::new(&descriptor)
            .with_context(|| format!("building the plan of {}", entry.name))?;

        let name = module_name(&descriptor);
        if !names.insert(name.clone()) {
            warn!("duplicate descriptor name {name}, skipping");
            continue;
        }

        let [w0, w1, w2, w3] = descriptor.words();
        writeln!(out, "\n")?;
        writeln!(out, "    {name}")?;
        writeln!(
            out,
            "    [0x{w0:08X}, 0x{w1:08X}, 0x{w2:08X}, 0x{w3:08X}] {} {{",
            entry.vertices
        )?;

        for step in plan.steps() {
            writeln!(out, "        {step};")?;
        }

        write!(out, "    }}")?;
    }

    writeln!(out)?;
    writeln!(out, "}}")?;

    Ok(out)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn module_layout() {
        let descriptor = FormatDescriptor::from_words([0x00022200, 0x01216009, 0, 0]);
        let mut profile = Profile::new("GZLE01");
        profile.record(&descriptor, 371602133);
        profile.record(&FormatDescriptor::from_words([0x00000200, 0x00000009, 0, 0]), 3);

        let module = emit(&profile, 10).unwrap();
        let expected = "\
// Generated by vtxgen from a descriptor profile of GZLE01.

crate::specialize::specialize! {
    \"GZLE01\";

    p_mtx0_3_i8_flt_c0_1_i8_8888_t0_mtx0_1_i8_flt
    [0x00022200, 0x01216009, 0x00000000, 0x00000000] 371602133 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        color<Index8, Rgba8888>;
        tex_coord<Index8, f32, 2>;
    }
}
";

        assert_eq!(module, expected);
    }
}
