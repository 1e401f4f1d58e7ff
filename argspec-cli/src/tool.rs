//! Declarations for the `convert` tool validated by the CLI.
//!
//! ```text
//! --convert -in <file> -out <file> [-force]
//! --list
//! ```

use argspec_core::restriction::{
    FirstArgMustBeRootRestriction, IllegalComboRestriction, LegalArgumentsRestriction,
    MandatedComboRestriction, MustContainAtLeastOneArgumentRestriction,
    ParameterCountRestriction, UnknownArgumentsRestriction,
};
use argspec_core::{Grouping, Registry, RestrictionSet, Result, StringComparison};

/// Registry and restrictions describing the tool.
pub struct Tool {
    pub registry: Registry,
    pub restrictions: RestrictionSet,
}

pub fn declare(comparison: StringComparison) -> Result<Tool> {
    let mut registry = Registry::with_comparison(comparison);
    let root = registry.add_specification(0, "--")?;
    let switch = registry.add_specification(1, "-")?;

    let convert = registry.add_described_argument(&root, "convert", "Convert a file")?;
    let list = registry.add_described_argument(&root, "list", "List supported formats")?;
    let input = registry.add_described_argument(&switch, "in", "Input file")?;
    let output = registry.add_described_argument(&switch, "out", "Output file")?;
    let force = registry.add_described_argument(&switch, "force", "Overwrite the output")?;

    let convert_files = Grouping::new(vec![convert.clone()], vec![input.clone(), output.clone()])?
        .with_description("convert without overwriting");
    let convert_forced = Grouping::new(
        vec![convert.clone()],
        vec![input.clone(), output.clone(), force],
    )?
    .with_description("convert, overwriting the output");
    let list_only = Grouping::single(list.clone()).with_description("list formats");

    let with_input = Grouping::new(vec![convert.clone()], vec![input.clone()])?;
    let with_output = Grouping::new(vec![convert.clone()], vec![output.clone()])?;

    let restrictions = RestrictionSet::new()
        .with(MustContainAtLeastOneArgumentRestriction::new())
        .with(FirstArgMustBeRootRestriction::new(root.clone()))
        .with(UnknownArgumentsRestriction::new())
        .with(LegalArgumentsRestriction::new(vec![
            convert_files,
            convert_forced,
            list_only,
        ]))
        .with(ParameterCountRestriction::new(vec![convert.clone(), input], 1, 1)?)
        .with(ParameterCountRestriction::new(vec![convert.clone(), output], 1, 1)?)
        .with(ParameterCountRestriction::for_argument(list.clone(), 0, 0)?)
        .with(MandatedComboRestriction::new(with_input, with_output))
        .with(IllegalComboRestriction::new(
            Grouping::single(convert),
            Grouping::single(list),
        ));

    Ok(Tool {
        registry,
        restrictions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(raw: &[&str]) -> Vec<String> {
        let tool = declare(StringComparison::Ordinal).unwrap();
        let tokens: Vec<String> = raw.iter().map(|token| token.to_string()).collect();
        tool.restrictions
            .violations(&tool.registry.matcher(), &tokens)
            .into_iter()
            .map(|violation| violation.kind)
            .collect()
    }

    #[test]
    fn test_valid_invocations() {
        assert!(check(&["--convert", "-in", "a.txt", "-out", "b.cs"]).is_empty());
        assert!(check(&["--convert", "-out", "b.cs", "-in", "a.txt", "-force"]).is_empty());
        assert!(check(&["--list"]).is_empty());
    }

    #[test]
    fn test_missing_output() {
        assert_eq!(
            check(&["--convert", "-in", "a.txt"]),
            vec!["LegalArgumentsRestriction", "MandatedComboRestriction"]
        );
    }

    #[test]
    fn test_empty_invocation() {
        assert_eq!(check(&[]), vec!["MustContainAtLeastOneArgumentRestriction"]);
    }

    #[test]
    fn test_convert_and_list_together() {
        let kinds = check(&["--convert", "-in", "a", "-out", "b", "--list"]);
        assert_eq!(kinds, vec!["IllegalComboRestriction"]);
    }
}
