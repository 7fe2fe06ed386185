//! Fixed symbol tables and identifier rendering.
//!
//! The tables are static and immutable; the identifier logic is where the
//! symbol environment decides rendering shape (concentration brackets,
//! compartment size function, or plain identifier text).

use crate::ast::{Constant, UnaryKind};
use crate::model::{RenderConfig, Symbol, SymbolEnvironment};

use super::escape::mask_special_chars;

/// LaTeX glyph for a named constant.
///
/// Simulation time and the delay marker come from this fixed dictionary,
/// independent of the symbol environment.
pub(crate) fn constant_symbol(constant: Constant) -> &'static str {
    match constant {
        Constant::Pi => "\\pi",
        Constant::E => "\\mathrm{e}",
        Constant::True => "\\mathbf{true}",
        Constant::False => "\\mathbf{false}",
        Constant::Infinity => "\\infty",
        Constant::NegInfinity => "-\\infty",
        Constant::Time => "t",
        Constant::Delay => "\\mathrm{delay}",
    }
}

/// Size-function symbol for a compartment of the given dimension.
pub(crate) fn size_function(dimensions: u32) -> &'static str {
    match dimensions {
        3 => "vol",
        2 => "area",
        1 => "length",
        _ => "point",
    }
}

/// LaTeX command for a function-style unary operator.
///
/// `None` for the structural kinds (negation, roots, delimiter pairs,
/// factorial, logical not), which have their own rendering rules. Functions
/// without a native LaTeX command are set upright with `\mathrm`.
pub(crate) fn function_symbol(kind: UnaryKind) -> Option<&'static str> {
    let symbol = match kind {
        UnaryKind::Negate
        | UnaryKind::Sqrt
        | UnaryKind::Abs
        | UnaryKind::Ceiling
        | UnaryKind::Floor
        | UnaryKind::Factorial
        | UnaryKind::Not => return None,
        UnaryKind::Exp => "\\exp",
        UnaryKind::Ln => "\\ln",
        UnaryKind::Log10 => "\\log_{10}",
        UnaryKind::Sin => "\\sin",
        UnaryKind::Cos => "\\cos",
        UnaryKind::Tan => "\\tan",
        UnaryKind::Cot => "\\cot",
        UnaryKind::Sec => "\\sec",
        UnaryKind::Csc => "\\csc",
        UnaryKind::Sinh => "\\sinh",
        UnaryKind::Cosh => "\\cosh",
        UnaryKind::Tanh => "\\tanh",
        UnaryKind::Coth => "\\coth",
        UnaryKind::Sech => "\\mathrm{sech}",
        UnaryKind::Csch => "\\mathrm{csch}",
        UnaryKind::Arcsin => "\\arcsin",
        UnaryKind::Arccos => "\\arccos",
        UnaryKind::Arctan => "\\arctan",
        UnaryKind::Arccot => "\\mathrm{arccot}",
        UnaryKind::Arcsec => "\\mathrm{arcsec}",
        UnaryKind::Arccsc => "\\mathrm{arccsc}",
        UnaryKind::Arcsinh => "\\mathrm{arcsinh}",
        UnaryKind::Arccosh => "\\mathrm{arccosh}",
        UnaryKind::Arctanh => "\\mathrm{arctanh}",
        UnaryKind::Arccoth => "\\mathrm{arccoth}",
        UnaryKind::Arcsech => "\\mathrm{arcsech}",
        UnaryKind::Arccsch => "\\mathrm{arccsch}",
    };
    Some(symbol)
}

/// Render a bare identifier according to its classification in the model.
///
/// Species whose quantity is dimensionally a concentration (not
/// substance-only, in a compartment with at least one spatial dimension) are
/// wrapped in concentration brackets. Compartments render as their size
/// function applied to the identifier. Anything else is plain identifier
/// text.
pub fn render_identifier(name: &str, env: &SymbolEnvironment, config: &RenderConfig) -> String {
    match env.resolve(name) {
        Symbol::Species(info) => {
            let text = display_text(&info.id, info.name.as_deref(), config);
            if !info.has_only_substance_units && info.compartment_dimensions > 0 {
                format!("\\left[{}\\right]", text)
            } else {
                text
            }
        }
        Symbol::Compartment(info) => {
            let text = display_text(&info.id, info.name.as_deref(), config);
            format!(
                "\\mathrm{{{}}}\\left({}\\right)",
                size_function(info.spatial_dimensions),
                text
            )
        }
        Symbol::Unknown => styled_id(name, config),
    }
}

/// Choose and style the display text for a model entity: the display name
/// when preferred and present, the machine id otherwise.
fn display_text(id: &str, name: Option<&str>, config: &RenderConfig) -> String {
    match name {
        Some(name) if config.prefer_names => {
            // Display names are prose and may be long; give LaTeX
            // hyphenation hints at masked characters.
            format!("\\text{{{}}}", mask_special_chars(name, true))
        }
        _ => styled_id(id, config),
    }
}

/// Style a machine id as identifier text.
pub(crate) fn styled_id(id: &str, config: &RenderConfig) -> String {
    let masked = mask_special_chars(id, false);
    if config.typewriter_ids {
        format!("\\mathtt{{{}}}", masked)
    } else {
        format!("\\mathrm{{{}}}", masked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CompartmentInfo, SpeciesInfo};

    fn env_with_species(info: SpeciesInfo) -> SymbolEnvironment {
        let mut env = SymbolEnvironment::new();
        env.add_species(info);
        env
    }

    #[test]
    fn test_concentration_brackets() {
        let env = env_with_species(SpeciesInfo::new("S1"));
        let out = render_identifier("S1", &env, &RenderConfig::default());
        assert_eq!(out, "\\left[\\mathtt{S1}\\right]");
    }

    #[test]
    fn test_substance_only_species_unbracketed() {
        let env = env_with_species(SpeciesInfo::new("S1").with_substance_units(true));
        let out = render_identifier("S1", &env, &RenderConfig::default());
        assert_eq!(out, "\\mathtt{S1}");
    }

    #[test]
    fn test_zero_dimension_species_unbracketed() {
        let env = env_with_species(SpeciesInfo::new("S1").with_compartment_dimensions(0));
        let out = render_identifier("S1", &env, &RenderConfig::default());
        assert_eq!(out, "\\mathtt{S1}");
    }

    #[test]
    fn test_species_display_name() {
        let env = env_with_species(SpeciesInfo::new("S1").with_name("glucose"));
        let config = RenderConfig {
            prefer_names: true,
            ..RenderConfig::default()
        };
        let out = render_identifier("S1", &env, &config);
        assert_eq!(out, "\\left[\\text{glucose}\\right]");
    }

    #[test]
    fn test_name_preference_without_name_falls_back_to_id() {
        let env = env_with_species(SpeciesInfo::new("S1"));
        let config = RenderConfig {
            prefer_names: true,
            ..RenderConfig::default()
        };
        let out = render_identifier("S1", &env, &config);
        assert_eq!(out, "\\left[\\mathtt{S1}\\right]");
    }

    #[test]
    fn test_compartment_size_functions() {
        let mut env = SymbolEnvironment::new();
        env.add_compartment(CompartmentInfo::new("c3"));
        env.add_compartment(CompartmentInfo::new("c2").with_dimensions(2));
        env.add_compartment(CompartmentInfo::new("c1").with_dimensions(1));
        env.add_compartment(CompartmentInfo::new("c0").with_dimensions(0));
        env.add_compartment(CompartmentInfo::new("c9").with_dimensions(9));
        let config = RenderConfig::default();

        assert_eq!(
            render_identifier("c3", &env, &config),
            "\\mathrm{vol}\\left(\\mathtt{c3}\\right)"
        );
        assert_eq!(
            render_identifier("c2", &env, &config),
            "\\mathrm{area}\\left(\\mathtt{c2}\\right)"
        );
        assert_eq!(
            render_identifier("c1", &env, &config),
            "\\mathrm{length}\\left(\\mathtt{c1}\\right)"
        );
        assert_eq!(
            render_identifier("c0", &env, &config),
            "\\mathrm{point}\\left(\\mathtt{c0}\\right)"
        );
        assert_eq!(
            render_identifier("c9", &env, &config),
            "\\mathrm{point}\\left(\\mathtt{c9}\\right)"
        );
    }

    #[test]
    fn test_unknown_identifier() {
        let env = SymbolEnvironment::new();
        let out = render_identifier("k_on", &env, &RenderConfig::default());
        assert_eq!(out, "\\mathtt{k\\_on}");
    }

    #[test]
    fn test_roman_ids_without_typewriter() {
        let env = SymbolEnvironment::new();
        let config = RenderConfig {
            typewriter_ids: false,
            ..RenderConfig::default()
        };
        assert_eq!(render_identifier("k1", &env, &config), "\\mathrm{k1}");
    }

    #[test]
    fn test_time_and_delay_glyphs() {
        assert_eq!(constant_symbol(Constant::Time), "t");
        assert_eq!(constant_symbol(Constant::Delay), "\\mathrm{delay}");
    }

    #[test]
    fn test_structural_kinds_have_no_function_symbol() {
        assert_eq!(function_symbol(UnaryKind::Negate), None);
        assert_eq!(function_symbol(UnaryKind::Sqrt), None);
        assert_eq!(function_symbol(UnaryKind::Factorial), None);
        assert_eq!(function_symbol(UnaryKind::Sin), Some("\\sin"));
        assert_eq!(function_symbol(UnaryKind::Arccsch), Some("\\mathrm{arccsch}"));
    }
}
