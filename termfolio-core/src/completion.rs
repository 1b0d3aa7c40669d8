//! Two-tier completion engine.
//!
//! Tier 1 ("argument-aware") understands the multi-word commands with
//! enumerable sub-arguments: `themes set <name>`, `projects go <n>` and
//! `social go <n>`. Tier 2 is a plain case-insensitive prefix match over
//! the registry. Tier 1 wins whenever it produces anything; results from
//! the two tiers are never merged.
//!
//! The engine is a pure function of the buffer and the data snapshot:
//! identical inputs always yield the same ordered candidate list.

use crate::config::PortfolioConfig;
use crate::registry::CommandRegistry;
use crate::theme::ThemeSet;

/// A candidate completion: the full reconstructed command string plus a
/// human-readable label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub command: String,
    pub description: String,
}

impl Suggestion {
    fn new(command: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            description: description.into(),
        }
    }
}

/// Run both tiers in priority order.
pub fn complete(
    buffer: &str,
    registry: &CommandRegistry,
    config: &PortfolioConfig,
    themes: &ThemeSet,
) -> Vec<Suggestion> {
    let argument = argument_aware(buffer, config, themes);
    if !argument.is_empty() {
        return argument;
    }
    prefix(buffer, registry)
}

/// Tier 1: completions for commands with sub-argument grammar.
///
/// Returns an empty vector when the buffer's first token is not one of
/// the known multi-word commands, or when nothing matches.
pub fn argument_aware(
    buffer: &str,
    config: &PortfolioConfig,
    themes: &ThemeSet,
) -> Vec<Suggestion> {
    let mut tokens = buffer.trim().split_whitespace();
    let Some(first) = tokens.next() else {
        return Vec::new();
    };
    let rest: Vec<&str> = tokens.collect();

    match first.to_lowercase().as_str() {
        "themes" => {
            let values: Vec<(String, String)> = themes
                .all()
                .iter()
                .map(|palette| (palette.name.clone(), palette.label.clone()))
                .collect();
            sub_command("themes", "set", "Set a theme", &values, &rest)
        }
        "projects" => {
            let values: Vec<(String, String)> = config
                .projects
                .iter()
                .enumerate()
                .map(|(i, project)| ((i + 1).to_string(), project.name.clone()))
                .collect();
            sub_command("projects", "go", "Go to a project", &values, &rest)
        }
        "social" => {
            let values: Vec<(String, String)> = config
                .social_links()
                .into_iter()
                .enumerate()
                .map(|(i, link)| ((i + 1).to_string(), link.label.to_string()))
                .collect();
            sub_command("social", "go", "Go to a social link", &values, &rest)
        }
        _ => Vec::new(),
    }
}

/// Completion for one `<base> <verb> <value>` grammar.
///
/// - no tokens after the base, or a partial verb: suggest the canonical
///   verb form ("themes set").
/// - full verb, value slot empty: enumerate every valid value.
/// - full verb, partial value: case-sensitive prefix filter, enumeration
///   order preserved.
fn sub_command(
    base: &str,
    verb: &str,
    verb_description: &str,
    values: &[(String, String)],
    rest: &[&str],
) -> Vec<Suggestion> {
    let enumerate_all = || {
        values
            .iter()
            .map(|(value, label)| Suggestion::new(format!("{base} {verb} {value}"), label))
            .collect()
    };

    match rest {
        [] => vec![Suggestion::new(
            format!("{base} {verb}"),
            verb_description,
        )],
        [typed] => {
            let typed = typed.to_lowercase();
            if typed == verb {
                enumerate_all()
            } else if verb.starts_with(&typed) {
                vec![Suggestion::new(
                    format!("{base} {verb}"),
                    verb_description,
                )]
            } else {
                Vec::new()
            }
        }
        [typed, partial] => {
            if typed.to_lowercase() != verb {
                return Vec::new();
            }
            values
                .iter()
                .filter(|(value, _)| value.starts_with(partial))
                .map(|(value, label)| Suggestion::new(format!("{base} {verb} {value}"), label))
                .collect()
        }
        _ => Vec::new(),
    }
}

/// Tier 2: case-insensitive prefix match over registered command names,
/// registration order preserved. Empty input yields nothing.
pub fn prefix(buffer: &str, registry: &CommandRegistry) -> Vec<Suggestion> {
    registry
        .prefix_matches(buffer)
        .into_iter()
        .map(|cmd| Suggestion::new(cmd.name, cmd.description))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn snapshot() -> (CommandRegistry, PortfolioConfig, ThemeSet) {
        (
            CommandRegistry::with_defaults(),
            PortfolioConfig::default(),
            ThemeSet::builtin(),
        )
    }

    fn commands(suggestions: &[Suggestion]) -> Vec<&str> {
        suggestions.iter().map(|s| s.command.as_str()).collect()
    }

    #[test]
    fn test_prefix_suggests_in_registration_order() {
        let (registry, config, themes) = snapshot();
        let results = complete("h", &registry, &config, &themes);
        assert_eq!(commands(&results), vec!["help", "history"]);
    }

    #[test]
    fn test_prefix_is_case_insensitive() {
        let (registry, config, themes) = snapshot();
        let results = complete("Ab", &registry, &config, &themes);
        assert_eq!(commands(&results), vec!["about"]);
    }

    #[test]
    fn test_empty_buffer_yields_nothing() {
        let (registry, config, themes) = snapshot();
        assert!(complete("", &registry, &config, &themes).is_empty());
        assert!(complete("   ", &registry, &config, &themes).is_empty());
    }

    #[test]
    fn test_unknown_prefix_yields_nothing() {
        let (registry, config, themes) = snapshot();
        assert!(complete("xyz", &registry, &config, &themes).is_empty());
    }

    #[test]
    fn test_bare_themes_suggests_canonical_verb() {
        let (_, config, themes) = snapshot();
        let results = argument_aware("themes", &config, &themes);
        assert_eq!(commands(&results), vec!["themes set"]);
        assert_eq!(results[0].description, "Set a theme");
    }

    #[test]
    fn test_partial_verb_suggests_canonical_form() {
        let (_, config, themes) = snapshot();
        for input in ["themes s", "themes se"] {
            let results = argument_aware(input, &config, &themes);
            assert_eq!(commands(&results), vec!["themes set"], "input: {input}");
        }
        let results = argument_aware("projects g", &config, &themes);
        assert_eq!(commands(&results), vec!["projects go"]);
    }

    #[test]
    fn test_full_verb_enumerates_all_themes() {
        let (_, config, themes) = snapshot();
        let results = argument_aware("themes set", &config, &themes);
        assert_eq!(
            commands(&results),
            vec![
                "themes set amber",
                "themes set green",
                "themes set white",
                "themes set ibm",
                "themes set paper",
                "themes set solarized",
                "themes set monochrome",
            ]
        );
        assert_eq!(results[0].description, "Amber Phosphor");
    }

    #[test]
    fn test_partial_theme_key_filters_case_sensitively() {
        let (_, config, themes) = snapshot();
        let results = argument_aware("themes set g", &config, &themes);
        assert_eq!(commands(&results), vec!["themes set green"]);

        // Upper-case partial must not match: theme keys are matched
        // case-sensitively.
        assert!(argument_aware("themes set G", &config, &themes).is_empty());
    }

    #[test]
    fn test_projects_go_enumerates_indices() {
        let (_, config, themes) = snapshot();
        let results = argument_aware("projects go", &config, &themes);
        assert_eq!(
            commands(&results),
            vec!["projects go 1", "projects go 2", "projects go 3"]
        );
        assert_eq!(results[0].description, "Korra");
    }

    #[test]
    fn test_social_go_enumerates_platforms() {
        let (_, config, themes) = snapshot();
        let results = argument_aware("social go", &config, &themes);
        assert_eq!(results.len(), 4);
        assert_eq!(results[0].description, "GitHub");
        assert_eq!(results[3].command, "social go 4");
    }

    #[test]
    fn test_argument_tier_beats_prefix_tier() {
        let (registry, config, themes) = snapshot();
        // "projects" matches a registered name (prefix tier would return
        // the bare command), but the argument tier wins and suggests the
        // canonical verb form instead. Results are never merged.
        let results = complete("projects", &registry, &config, &themes);
        assert_eq!(commands(&results), vec!["projects go"]);
    }

    #[test]
    fn test_unknown_verb_falls_back_to_nothing() {
        let (registry, config, themes) = snapshot();
        let results = complete("themes blah", &registry, &config, &themes);
        assert!(results.is_empty());
    }

    #[test]
    fn test_extra_tokens_yield_nothing() {
        let (_, config, themes) = snapshot();
        assert!(argument_aware("themes set green extra", &config, &themes).is_empty());
    }

    #[test]
    fn test_completion_is_deterministic() {
        let (registry, config, themes) = snapshot();
        let first = complete("themes set", &registry, &config, &themes);
        let second = complete("themes set", &registry, &config, &themes);
        assert_eq!(first, second);
    }
}
