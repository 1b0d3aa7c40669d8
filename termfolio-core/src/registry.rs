//! Command registry: the fixed table of commands the prompt understands.
//!
//! Populated once at startup, never mutated afterwards. Registration
//! order is meaningful: `help` listing and prefix completion both walk
//! the table in order.

/// Name of the command that empties the displayed log. It is the one
/// command excluded from the raw recall history.
pub const CLEAR_COMMAND: &str = "clear";

/// Dispatch tag; one variant per built-in command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Help,
    About,
    Projects,
    Skills,
    Experience,
    Education,
    Social,
    Contact,
    Gui,
    Pwd,
    Themes,
    Clear,
    Banner,
    Whoami,
    Echo,
    History,
    Repo,
    Welcome,
}

/// Metadata describing one command.
#[derive(Debug, Clone)]
pub struct CommandSpec {
    /// Lower-case unique name, e.g. "projects".
    pub name: &'static str,
    /// One-line description shown in `help` and completion.
    pub description: &'static str,
    /// Usage pattern, e.g. "projects go <number>".
    pub usage: &'static str,
    pub kind: CommandKind,
}

/// Registry holding all commands in registration order.
pub struct CommandRegistry {
    commands: Vec<CommandSpec>,
}

impl CommandRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Create a registry pre-populated with all built-in commands.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register_defaults();
        registry
    }

    /// Register a single command. Names must be lower-case and unique.
    pub fn register(&mut self, spec: CommandSpec) {
        debug_assert!(
            spec.name.chars().all(|c| !c.is_uppercase()),
            "command names are registered lower-case"
        );
        debug_assert!(
            self.lookup(spec.name).is_none(),
            "duplicate command name: {}",
            spec.name
        );
        self.commands.push(spec);
    }

    fn register_defaults(&mut self) {
        self.register(CommandSpec {
            name: "help",
            description: "Show available commands",
            usage: "help",
            kind: CommandKind::Help,
        });
        self.register(CommandSpec {
            name: "about",
            description: "Display information about me",
            usage: "about",
            kind: CommandKind::About,
        });
        self.register(CommandSpec {
            name: "projects",
            description: "List my projects with links (usage: projects go <number>)",
            usage: "projects [go <number>]",
            kind: CommandKind::Projects,
        });
        self.register(CommandSpec {
            name: "skills",
            description: "Show my technical skills",
            usage: "skills",
            kind: CommandKind::Skills,
        });
        self.register(CommandSpec {
            name: "experience",
            description: "Display work experience",
            usage: "experience",
            kind: CommandKind::Experience,
        });
        self.register(CommandSpec {
            name: "education",
            description: "Display education background",
            usage: "education",
            kind: CommandKind::Education,
        });
        self.register(CommandSpec {
            name: "social",
            description: "Show social media links (usage: social go <number>)",
            usage: "social [go <number>]",
            kind: CommandKind::Social,
        });
        self.register(CommandSpec {
            name: "contact",
            description: "Display contact information",
            usage: "contact",
            kind: CommandKind::Contact,
        });
        self.register(CommandSpec {
            name: "gui",
            description: "Open my GUI portfolio",
            usage: "gui",
            kind: CommandKind::Gui,
        });
        self.register(CommandSpec {
            name: "pwd",
            description: "Print working directory",
            usage: "pwd",
            kind: CommandKind::Pwd,
        });
        self.register(CommandSpec {
            name: "themes",
            description: "Show available themes (usage: themes set <theme>)",
            usage: "themes [set <theme>]",
            kind: CommandKind::Themes,
        });
        self.register(CommandSpec {
            name: CLEAR_COMMAND,
            description: "Clear the terminal screen (Ctrl+L)",
            usage: "clear",
            kind: CommandKind::Clear,
        });
        self.register(CommandSpec {
            name: "banner",
            description: "Show the ASCII art banner",
            usage: "banner",
            kind: CommandKind::Banner,
        });
        self.register(CommandSpec {
            name: "whoami",
            description: "Display current user info",
            usage: "whoami",
            kind: CommandKind::Whoami,
        });
        self.register(CommandSpec {
            name: "echo",
            description: "Print a message (usage: echo <message>)",
            usage: "echo <message>",
            kind: CommandKind::Echo,
        });
        self.register(CommandSpec {
            name: "history",
            description: "Show command history",
            usage: "history",
            kind: CommandKind::History,
        });
        self.register(CommandSpec {
            name: "repo",
            description: "Open the GitHub repository",
            usage: "repo",
            kind: CommandKind::Repo,
        });
        self.register(CommandSpec {
            name: "welcome",
            description: "Display the welcome message",
            usage: "welcome",
            kind: CommandKind::Welcome,
        });
    }

    /// Case-insensitive lookup by name.
    pub fn lookup(&self, name: &str) -> Option<&CommandSpec> {
        let normalized = name.to_lowercase();
        self.commands.iter().find(|cmd| cmd.name == normalized)
    }

    /// `(name, description)` pairs in registration order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.commands.iter().map(|cmd| (cmd.name, cmd.description))
    }

    /// Command names matching a case-insensitive prefix, in registration
    /// order. An empty prefix matches nothing: the prompt shows no
    /// suggestions for an empty buffer.
    pub fn prefix_matches(&self, prefix: &str) -> Vec<&CommandSpec> {
        let normalized = prefix.trim().to_lowercase();
        if normalized.is_empty() {
            return Vec::new();
        }
        self.commands
            .iter()
            .filter(|cmd| cmd.name.starts_with(&normalized))
            .collect()
    }

    /// Return all registered commands.
    pub fn all(&self) -> &[CommandSpec] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_registry_new_is_empty() {
        let registry = CommandRegistry::new();
        assert_eq!(registry.len(), 0);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_with_defaults_populates() {
        let registry = CommandRegistry::with_defaults();
        assert_eq!(registry.len(), 18);
    }

    #[test]
    fn test_lookup_by_name() {
        let registry = CommandRegistry::with_defaults();
        let cmd = registry.lookup("projects");
        assert!(cmd.is_some());
        assert_eq!(cmd.unwrap().kind, CommandKind::Projects);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let registry = CommandRegistry::with_defaults();
        assert!(registry.lookup("HELP").is_some());
        assert!(registry.lookup("Themes").is_some());
        assert!(registry.lookup("wHoAmI").is_some());
    }

    #[test]
    fn test_lookup_unknown_returns_none() {
        let registry = CommandRegistry::with_defaults();
        assert!(registry.lookup("sudo").is_none());
    }

    #[test]
    fn test_entries_preserve_registration_order() {
        let registry = CommandRegistry::with_defaults();
        let names: Vec<&str> = registry.entries().map(|(name, _)| name).collect();
        assert_eq!(names[0], "help");
        assert_eq!(names[1], "about");
        assert_eq!(*names.last().unwrap(), "welcome");
    }

    #[test]
    fn test_prefix_matches_in_order() {
        let registry = CommandRegistry::with_defaults();
        let matches: Vec<&str> = registry
            .prefix_matches("h")
            .into_iter()
            .map(|cmd| cmd.name)
            .collect();
        // "help" registered before "history".
        assert_eq!(matches, vec!["help", "history"]);
    }

    #[test]
    fn test_prefix_matches_case_insensitive() {
        let registry = CommandRegistry::with_defaults();
        let matches = registry.prefix_matches("PRO");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "projects");
    }

    #[test]
    fn test_prefix_matches_empty_input_yields_nothing() {
        let registry = CommandRegistry::with_defaults();
        assert!(registry.prefix_matches("").is_empty());
        assert!(registry.prefix_matches("   ").is_empty());
    }

    #[test]
    fn test_no_duplicate_names() {
        let registry = CommandRegistry::with_defaults();
        let mut seen = HashSet::new();
        for cmd in registry.all() {
            assert!(seen.insert(cmd.name), "duplicate command name: {}", cmd.name);
        }
    }

    #[test]
    fn test_clear_command_constant_is_registered() {
        let registry = CommandRegistry::with_defaults();
        let cmd = registry.lookup(CLEAR_COMMAND);
        assert!(cmd.is_some());
        assert_eq!(cmd.unwrap().kind, CommandKind::Clear);
    }
}
