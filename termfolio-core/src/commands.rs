//! Built-in command handlers.
//!
//! Handlers are pure over the data snapshot they receive: they read the
//! portfolio content, the theme table, and session read-state, and return
//! a [`CommandOutcome`]. The few commands with an external side effect
//! (opening a link, switching the theme, clearing the screen) request it
//! through an [`Effect`] descriptor instead of performing it.

use crate::config::PortfolioConfig;
use crate::output::{CommandOutcome, Effect, Line, Output, Span};
use crate::registry::{CommandKind, CommandRegistry};
use crate::theme::ThemeSet;

/// Read-only snapshot handed to every handler.
pub struct HandlerContext<'a> {
    pub config: &'a PortfolioConfig,
    pub themes: &'a ThemeSet,
    pub registry: &'a CommandRegistry,
    /// Raw recall history, oldest first (for the `history` command).
    pub recall_history: &'a [String],
    pub current_theme: &'a str,
}

/// Dispatch one command to its handler.
pub fn execute(kind: CommandKind, args: &[&str], ctx: &HandlerContext<'_>) -> CommandOutcome {
    match kind {
        CommandKind::Help => help(ctx),
        CommandKind::About => about(ctx),
        CommandKind::Projects => projects(args, ctx),
        CommandKind::Skills => skills(ctx),
        CommandKind::Experience => experience(ctx),
        CommandKind::Education => education(ctx),
        CommandKind::Social => social(args, ctx),
        CommandKind::Contact => contact(ctx),
        CommandKind::Gui => gui(ctx),
        CommandKind::Pwd => pwd(ctx),
        CommandKind::Themes => themes(args, ctx),
        CommandKind::Clear => CommandOutcome::with_effect(Output::new(), Effect::ClearScreen),
        CommandKind::Banner => banner(ctx),
        CommandKind::Whoami => {
            CommandOutcome::output(Output::new().line(Span::primary(&ctx.config.username)))
        }
        CommandKind::Echo => echo(args),
        CommandKind::History => history(ctx),
        CommandKind::Repo => repo(ctx),
        CommandKind::Welcome => welcome(ctx),
    }
}

fn help(ctx: &HandlerContext<'_>) -> CommandOutcome {
    let mut output = Output::new().line(Span::accent("Available Commands:"));
    for (name, description) in ctx.registry.entries() {
        output.push(vec![
            Span::primary(format!("  {name:<12}")),
            Span::muted(description),
        ]);
    }
    output.push(Line::blank());
    for (key, hint) in [
        ("[Tab]", " auto-complete"),
        ("[\u{2191}][\u{2193}]", " navigate history"),
        ("[Ctrl+L]", " clear terminal"),
        ("[Esc]", " clear input"),
    ] {
        output.push(vec![Span::accent(format!("  {key}")), Span::muted(hint)]);
    }
    CommandOutcome::output(output)
}

fn banner_lines(ctx: &HandlerContext<'_>) -> Vec<Line> {
    ctx.config
        .ascii_banner
        .iter()
        .map(|row| Line::from(Span::primary(row)))
        .collect()
}

fn welcome(ctx: &HandlerContext<'_>) -> CommandOutcome {
    let mut output = Output::new();
    for line in banner_lines(ctx) {
        output.push(line);
    }
    output.push(Line::blank());
    output.push(vec![
        Span::muted("Welcome to my terminal portfolio! Type "),
        Span::accent("help"),
        Span::muted(" to get started."),
    ]);
    CommandOutcome::output(output)
}

fn banner(ctx: &HandlerContext<'_>) -> CommandOutcome {
    let mut output = Output::new();
    for line in banner_lines(ctx) {
        output.push(line);
    }
    CommandOutcome::output(output)
}

fn about(ctx: &HandlerContext<'_>) -> CommandOutcome {
    let about = &ctx.config.about;
    let mut output = Output::new()
        .line(Span::text(&about.description))
        .line(Line::blank())
        .line(Span::accent("Quick Facts:"));
    for detail in &about.details {
        output.push(Span::muted(format!("  - {detail}")));
    }
    CommandOutcome::output(output)
}

fn projects(args: &[&str], ctx: &HandlerContext<'_>) -> CommandOutcome {
    if let ["go", index, ..] = args {
        return match resolve_index(index, ctx.config.projects.len()) {
            Some(i) => {
                let project = &ctx.config.projects[i];
                CommandOutcome::with_effect(
                    Output::new().line(Span::success(format!("Opening {}...", project.name))),
                    Effect::OpenUrl(project.link.clone()),
                )
            }
            None => CommandOutcome::output(Output::error_message(
                "Invalid project number. Use \"projects\" to see available projects.",
            )),
        };
    }

    let mut output = Output::new().line(Span::accent(
        "My Projects (use \"projects go <number>\" to open):",
    ));
    for (i, project) in ctx.config.projects.iter().enumerate() {
        output.push(Line::blank());
        output.push(Span::primary(format!("  {}. {}", i + 1, project.name)));
        output.push(Span::muted(format!("     {}", project.description)));
        if !project.tech.is_empty() {
            output.push(Span::info(format!("     {}", project.tech.join(", "))));
        }
        output.push(Span::muted(format!("     {}", project.link)));
    }
    CommandOutcome::output(output)
}

fn skills(ctx: &HandlerContext<'_>) -> CommandOutcome {
    let skills = &ctx.config.skills;
    let mut output = Output::new().line(Span::accent("Technical Skills"));
    for (label, group) in [
        ("Languages", &skills.languages),
        ("Frontend", &skills.frontend),
        ("Backend", &skills.backend),
        ("DevOps", &skills.devops),
        ("Tools", &skills.tools),
        ("Practices", &skills.practices),
    ] {
        if group.is_empty() {
            continue;
        }
        output.push(Line::blank());
        output.push(Span::primary(format!("  {label}")));
        output.push(Span::text(format!("  {}", group.join(", "))));
    }
    CommandOutcome::output(output)
}

fn experience(ctx: &HandlerContext<'_>) -> CommandOutcome {
    let mut output = Output::new().line(Span::accent("Work Experience:"));
    for entry in &ctx.config.experience {
        output.push(Line::blank());
        output.push(Span::secondary(format!("  {}", entry.role)));
        output.push(Span::info(format!("  {}", entry.company)));
        output.push(Span::muted(format!("  {}", entry.period)));
        output.push(Span::text(format!("  {}", entry.description)));
    }
    CommandOutcome::output(output)
}

fn education(ctx: &HandlerContext<'_>) -> CommandOutcome {
    let mut output = Output::new().line(Span::accent("Education:"));
    for entry in &ctx.config.education {
        output.push(Line::blank());
        output.push(Span::secondary(format!("  {}", entry.degree)));
        output.push(Span::info(format!("  {}", entry.institution)));
        output.push(Span::muted(format!("  {}", entry.period)));
        output.push(Span::text(format!("  {}", entry.description)));
    }
    CommandOutcome::output(output)
}

fn social(args: &[&str], ctx: &HandlerContext<'_>) -> CommandOutcome {
    let links = ctx.config.social_links();

    if let ["go", index, ..] = args {
        return match resolve_index(index, links.len()) {
            Some(i) => CommandOutcome::with_effect(
                Output::new().line(Span::success(format!("Opening {}...", links[i].label))),
                Effect::OpenUrl(links[i].url.clone()),
            ),
            None => CommandOutcome::output(Output::error_message(
                "Invalid option. Use \"social\" to see available options.",
            )),
        };
    }

    let mut output = Output::new().line(Span::accent(
        "Connect with me (use \"social go <number>\" to open):",
    ));
    for (i, link) in links.iter().enumerate() {
        output.push(vec![
            Span::accent(format!("  {}. ", i + 1)),
            Span::primary(format!("{:<10}", link.label)),
            Span::text(&link.url),
        ]);
    }
    CommandOutcome::output(output)
}

fn contact(ctx: &HandlerContext<'_>) -> CommandOutcome {
    let output = Output::new()
        .line(Span::accent("Get in Touch:"))
        .line(vec![
            Span::text("  Email: "),
            Span::info(&ctx.config.social.email),
        ])
        .line(Line::blank())
        .line(Span::muted(
            "  Feel free to reach out for collaborations, opportunities, or just to say hi!",
        ));
    CommandOutcome::output(output)
}

fn gui(ctx: &HandlerContext<'_>) -> CommandOutcome {
    CommandOutcome::with_effect(
        Output::new().line(Span::success("Opening GUI portfolio...")),
        Effect::OpenUrl(ctx.config.social.website.clone()),
    )
}

fn pwd(ctx: &HandlerContext<'_>) -> CommandOutcome {
    CommandOutcome::output(
        Output::new().line(Span::text(format!("/home/{}", ctx.config.username))),
    )
}

fn themes(args: &[&str], ctx: &HandlerContext<'_>) -> CommandOutcome {
    if let ["set", name, ..] = args {
        return match ctx.themes.get(name) {
            Some(palette) => CommandOutcome::with_effect(
                Output::new().line(Span::success(format!("Theme changed to {}", palette.label))),
                Effect::ThemeChanged(palette.name.clone()),
            ),
            None => {
                let available: Vec<&str> = ctx.themes.names().collect();
                CommandOutcome::output(Output::error_message(format!(
                    "Theme \"{name}\" not found. Available themes: {}",
                    available.join(", ")
                )))
            }
        };
    }

    let mut output = Output::new().line(Span::accent("Available Themes (use \"themes set <name>\"):"));
    for palette in ctx.themes.all() {
        output.push(vec![
            Span::primary(format!("  {:<12}", palette.name)),
            Span::muted(&palette.label),
        ]);
    }
    output.push(Line::blank());
    let current_label = ctx
        .themes
        .get(ctx.current_theme)
        .map(|palette| palette.label.clone())
        .unwrap_or_else(|| ctx.current_theme.to_string());
    output.push(vec![
        Span::muted("Current theme: "),
        Span::info(current_label),
    ]);
    CommandOutcome::output(output)
}

fn echo(args: &[&str]) -> CommandOutcome {
    let message = args.join(" ").replace('"', "");
    CommandOutcome::output(Output::new().line(Span::text(message)))
}

fn history(ctx: &HandlerContext<'_>) -> CommandOutcome {
    let mut output = Output::new();
    for (i, cmd) in ctx.recall_history.iter().enumerate() {
        output.push(vec![
            Span::accent(format!("  {:>3}", i + 1)),
            Span::muted(format!("  {cmd}")),
        ]);
    }
    CommandOutcome::output(output)
}

fn repo(ctx: &HandlerContext<'_>) -> CommandOutcome {
    CommandOutcome::with_effect(
        Output::new().line(Span::success("Opening GitHub profile...")),
        Effect::OpenUrl(ctx.config.social.github.clone()),
    )
}

/// Parse a 1-based index argument against a list length.
fn resolve_index(raw: &str, len: usize) -> Option<usize> {
    let n: usize = raw.parse().ok()?;
    let index = n.checked_sub(1)?;
    (index < len).then_some(index)
}
